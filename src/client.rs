use reqwest::Method;

use crate::{
    config::ClientConfig,
    error::ClientResult,
    http::HttpClient,
    models::{Book, RecommendationQuery, SavedBook, UploadResult},
    services::{ImageUploader, RecommendationService, SavedBooksService},
};

/// A cover photo the user picked for a recommendation request
#[derive(Debug, Clone)]
pub struct Photo {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Result of the photo-then-recommend workflow
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub books: Vec<Book>,
    /// `None` when no photo was given; otherwise the upload outcome, so a
    /// caller can tell the user their photo was ignored.
    pub upload: Option<UploadResult>,
}

/// Facade over the BookShelf API
///
/// One handle per backend, composing the three services over a shared
/// transport. This is the single integration point a UI layer binds to;
/// page code holds no recommendation state of its own and passes the
/// selected [`Book`] value straight to [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct BookshelfClient {
    http: HttpClient,
    recommendations: RecommendationService,
    saved_books: SavedBooksService,
    uploader: ImageUploader,
}

impl BookshelfClient {
    /// Creates a client for the configured backend
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = HttpClient::new(config)?;

        Ok(Self {
            recommendations: RecommendationService::new(http.clone()),
            saved_books: SavedBooksService::new(http.clone()),
            uploader: ImageUploader::new(http.clone()),
            http,
        })
    }

    /// Creates a client from `BOOKSHELF_`-prefixed environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(&config)?)
    }

    /// Fetches recommendations for a genre/author query
    pub async fn recommendations(&self, query: &RecommendationQuery) -> ClientResult<Vec<Book>> {
        self.recommendations.fetch(query).await
    }

    /// The full page workflow: optional photo upload, then recommendations
    ///
    /// The upload always runs to completion first — success or not — before
    /// the recommendation request is issued; the two are never in flight
    /// together. A failed upload does not abort the workflow.
    pub async fn recommend_with_photo(
        &self,
        query: &RecommendationQuery,
        photo: Option<Photo>,
    ) -> ClientResult<RecommendationOutcome> {
        let upload = match photo {
            Some(photo) => Some(self.uploader.upload(photo.bytes, &photo.filename).await),
            None => None,
        };

        let books = self.recommendations.fetch(query).await?;

        Ok(RecommendationOutcome { books, upload })
    }

    /// Lists the saved-books collection
    pub async fn saved_books(&self) -> ClientResult<Vec<SavedBook>> {
        self.saved_books.list().await
    }

    /// Saves a book; returns the record with its backend-assigned id
    pub async fn save(&self, book: &Book) -> ClientResult<SavedBook> {
        self.saved_books.save(book).await
    }

    /// Removes a saved book by id; idempotent on the client side
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        self.saved_books.remove(id).await
    }

    /// Uploads a cover photo on its own; best-effort, never errors
    pub async fn upload_photo(&self, photo: Photo) -> UploadResult {
        self.uploader.upload(photo.bytes, &photo.filename).await
    }

    /// Backend reachability probe against `GET /health`
    pub async fn health(&self) -> ClientResult<()> {
        self.http.request(Method::GET, "/health", None).await?;
        Ok(())
    }
}
