use reqwest::Method;

use crate::{
    error::{ClientError, ClientResult},
    http::HttpClient,
    models::{Book, RecommendRequest, RecommendResponse, RecommendationQuery},
};

const RECOMMENDATIONS_PATH: &str = "/recommendations";

/// Fetches book recommendations for a genre/author query
#[derive(Debug, Clone)]
pub struct RecommendationService {
    http: HttpClient,
}

impl RecommendationService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Issues exactly one POST and returns the normalized book list
    ///
    /// Genres go out in the order given; a normalized-empty author is sent
    /// as an explicit null. No client-side validation happens here — an
    /// empty query is valid and yields whatever the backend returns. A
    /// response without a `recommendations` field decodes as an empty list.
    pub async fn fetch(&self, query: &RecommendationQuery) -> ClientResult<Vec<Book>> {
        let body = serde_json::to_value(RecommendRequest::from(query))
            .map_err(ClientError::Decode)?;

        let value = self
            .http
            .request(Method::POST, RECOMMENDATIONS_PATH, Some(&body))
            .await?;

        let response: RecommendResponse =
            serde_json::from_value(value).map_err(ClientError::Decode)?;

        tracing::info!(
            genres = query.genres.len(),
            author = query.author_name.as_deref().unwrap_or(""),
            results = response.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(response.recommendations)
    }
}
