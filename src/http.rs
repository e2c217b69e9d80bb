use std::time::Duration;

use reqwest::{multipart, Client, Method};
use serde_json::Value;

use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
};

/// Thin JSON request core shared by every service
///
/// One request, one response: serialize the optional body as JSON, map a
/// transport failure to [`ClientError::Network`], a non-2xx status to
/// [`ClientError::Api`], and an unparseable body to [`ClientError::Decode`].
/// There is deliberately no retry or backoff here — this is a simple I/O
/// wrapper, not a resilient network stack.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    base_url: String,
}

impl HttpClient {
    /// Builds the client with the configured base URL and request timeout
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::from_transport)?;

        Ok(Self {
            inner,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues a single JSON request and returns the decoded response body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        json_body: Option<&Value>,
    ) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.inner.request(method.clone(), &url);
        if let Some(body) = json_body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Request rejected by backend"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(ClientError::from_transport)?;
        serde_json::from_str(&text).map_err(ClientError::Decode)
    }

    /// Issues a request where only the status matters; any body is discarded
    pub async fn request_status(
        &self,
        method: Method,
        path: &str,
        json_body: Option<&Value>,
    ) -> ClientResult<u16> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.inner.request(method, &url);
        if let Some(body) = json_body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        Ok(status.as_u16())
    }

    /// Posts one file as a multipart form with a single named field
    ///
    /// The upload endpoint's response body is implementation-defined and
    /// unused beyond the status check.
    pub async fn post_file(
        &self,
        path: &str,
        field: &'static str,
        filename: String,
        bytes: Vec<u8>,
    ) -> ClientResult<()> {
        let url = format!("{}{}", self.base_url, path);

        let part = multipart::Part::bytes(bytes).file_name(filename);
        let form = multipart::Form::new().part(field, part);

        let response = self
            .inner
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
