/// Service layer over the BookShelf backend
///
/// Each service owns one slice of the API surface and holds nothing but a
/// cloned [`HttpClient`](crate::http::HttpClient) handle: every operation
/// is a single stateless request/response exchange, so independent calls
/// may overlap freely with no ordering guarantees between them.
pub mod recommendations;
pub mod saved_books;
pub mod upload;

pub use recommendations::RecommendationService;
pub use saved_books::SavedBooksService;
pub use upload::ImageUploader;
