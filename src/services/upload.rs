use crate::{http::HttpClient, models::UploadResult};

const UPLOAD_PATH: &str = "/upload-image";
const FILE_FIELD: &str = "file";

/// Best-effort cover photo upload
///
/// The photo is optional context for a recommendation request, never a
/// precondition, so every failure — transport, status, anything — is
/// downgraded to `UploadResult { success: false }` instead of an error.
/// This is the one place in the crate where a failure is deliberately
/// swallowed.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    http: HttpClient,
}

impl ImageUploader {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Uploads one image as a multipart form; never raises
    pub async fn upload(&self, bytes: Vec<u8>, filename: &str) -> UploadResult {
        match self
            .http
            .post_file(UPLOAD_PATH, FILE_FIELD, filename.to_string(), bytes)
            .await
        {
            Ok(()) => {
                tracing::debug!(filename = %filename, "Image uploaded");
                UploadResult { success: true }
            }
            Err(e) => {
                tracing::warn!(
                    filename = %filename,
                    error = %e,
                    "Image upload failed, continuing without it"
                );
                UploadResult { success: false }
            }
        }
    }
}
