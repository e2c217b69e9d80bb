use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recommended book as returned by the backend
///
/// Immutable once received; there is no client-side identity for a plain
/// recommendation. Identity only exists once the backend has persisted the
/// book as a [`SavedBook`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// A book persisted in the backend's saved-list store
///
/// The `id` is assigned by the backend on save and is the only valid key
/// for removal. List position is a page-session convenience and must never
/// be sent to the backend as an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedBook {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Timestamp stamped by the backend when the record was created.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedBook {
    /// The book fields without the server-assigned identity
    pub fn book(&self) -> Book {
        Book {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
        }
    }
}

/// The genre/author filter submitted to request recommendations
///
/// Constructed from selection state at request time; never persisted.
/// Empty selections are valid — the backend decides what they yield.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationQuery {
    /// Selected genres, in selection order. Order is preserved on the wire.
    pub genres: Vec<String>,
    /// Author filter; `None` is sent as an explicit JSON null.
    pub author_name: Option<String>,
}

impl RecommendationQuery {
    /// Builds a query, normalizing a blank author string to `None`
    pub fn new(genres: Vec<String>, author_name: Option<String>) -> Self {
        let author_name = author_name.filter(|name| !name.trim().is_empty());
        Self {
            genres,
            author_name,
        }
    }

    /// Query with genre filters only
    pub fn genres(genres: Vec<String>) -> Self {
        Self::new(genres, None)
    }
}

/// Outcome of a best-effort image upload
///
/// The upload endpoint's response payload is implementation-defined and
/// deliberately ignored; callers only get success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadResult {
    pub success: bool,
}

// ============================================================================
// Wire Types (BookShelf API request/response shapes)
// ============================================================================

/// Body of `POST /recommendations`
#[derive(Debug, Serialize)]
pub struct RecommendRequest {
    pub genres: Vec<String>,
    /// Serialized as `null` when absent — the backend expects the key.
    pub author_name: Option<String>,
}

impl From<&RecommendationQuery> for RecommendRequest {
    fn from(query: &RecommendationQuery) -> Self {
        Self {
            genres: query.genres.clone(),
            author_name: query.author_name.clone(),
        }
    }
}

/// Response of `POST /recommendations`
///
/// The backend attaches echo/metadata fields (`user_preferences`,
/// `model_version`, ...) that the client has no use for; only the
/// recommendation list is decoded. A missing field means no matches.
#[derive(Debug, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Vec<Book>,
}

/// Response of `GET /saved-books`
#[derive(Debug, Deserialize)]
pub struct SavedBooksResponse {
    #[serde(default)]
    pub saved_books: Vec<SavedBook>,
}

/// Response of `POST /saved-books` — the persisted record nested under `book`
#[derive(Debug, Deserialize)]
pub struct SaveBookResponse {
    pub book: SavedBook,
}
