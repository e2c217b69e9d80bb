use reqwest::Method;

use crate::{
    error::{ClientError, ClientResult},
    http::HttpClient,
    models::{Book, SaveBookResponse, SavedBook, SavedBooksResponse},
};

const SAVED_BOOKS_PATH: &str = "/saved-books";

/// Save/list/remove operations against the backend's saved-books store
///
/// The backend is the sole source of identity: records only gain an `id`
/// on save, and that `id` is the only valid removal key. Save is not
/// idempotent — saving identical content twice creates two records.
#[derive(Debug, Clone)]
pub struct SavedBooksService {
    http: HttpClient,
}

impl SavedBooksService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetches the full saved set; empty when the backend reports none
    pub async fn list(&self) -> ClientResult<Vec<SavedBook>> {
        let value = self
            .http
            .request(Method::GET, SAVED_BOOKS_PATH, None)
            .await?;

        let response: SavedBooksResponse =
            serde_json::from_value(value).map_err(ClientError::Decode)?;

        Ok(response.saved_books)
    }

    /// Persists a book and returns the backend-assigned record
    ///
    /// The caller passes the full `Book` value it selected; nothing here
    /// depends on list positions or any session-global recommendation state.
    pub async fn save(&self, book: &Book) -> ClientResult<SavedBook> {
        let body = serde_json::to_value(book).map_err(ClientError::Decode)?;

        let value = self
            .http
            .request(Method::POST, SAVED_BOOKS_PATH, Some(&body))
            .await?;

        let response: SaveBookResponse =
            serde_json::from_value(value).map_err(ClientError::Decode)?;

        tracing::info!(
            id = response.book.id,
            title = %response.book.title,
            "Book saved"
        );

        Ok(response.book)
    }

    /// Deletes a saved record by its backend-assigned id
    ///
    /// A 404 counts as success: the record is gone either way, which makes
    /// remove idempotent from the client's perspective. Any other non-2xx
    /// status is surfaced as [`ClientError::Api`].
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        let path = format!("{}/{}", SAVED_BOOKS_PATH, id);

        match self.http.request_status(Method::DELETE, &path, None).await {
            Ok(_) => {
                tracing::info!(id, "Book removed");
                Ok(())
            }
            Err(ClientError::Api { status: 404 }) => {
                tracing::debug!(id, "Book already absent on remove");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
