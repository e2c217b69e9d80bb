//! Client library for the BookShelf recommendation API.
//!
//! Formalizes the recommendation-and-save workflow: an optional cover
//! photo upload, a genre/author recommendation query, and per-item
//! save/remove calls against the backend's saved-books store. All durable
//! state lives in the backend; this crate is purely a request-mediation
//! layer.
//!
//! ```no_run
//! use bookshelf_client::{Book, BookshelfClient, ClientConfig, RecommendationQuery};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = BookshelfClient::new(&ClientConfig::default())?;
//!
//! let query = RecommendationQuery::genres(vec!["Mystery".into(), "Thriller".into()]);
//! let books = client.recommendations(&query).await?;
//!
//! if let Some(book) = books.first() {
//!     let saved = client.save(book).await?;
//!     client.remove(saved.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

pub use client::{BookshelfClient, Photo, RecommendationOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use models::{Book, RecommendationQuery, SavedBook, UploadResult};
