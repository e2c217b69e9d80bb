/// Client-level errors
///
/// Three failure kinds, mirroring the three ways a request against the
/// BookShelf backend can go wrong: the transport never reached the server,
/// the server answered with a non-success status, or the body it sent back
/// could not be decoded. No retries happen anywhere in this crate; the
/// first failure is surfaced to the caller as-is.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, timeout, broken stream.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Backend was reachable but rejected or failed the request.
    #[error("api returned status {status}")]
    Api { status: u16 },

    /// Response arrived with a 2xx status but the body was not the JSON
    /// shape we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        ClientError::Network(err)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
