use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::error::{IdeasClientError, IdeasClientResult};
use crate::models::{IdeasPage, ListingQuery};
use crate::source::IdeasSource;

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент прокси `ideas-server`.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент с базовым URL прокси, например `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> IdeasClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Базовый URL прокси.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> IdeasClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorResponseDto>()
            .await
            .ok()
            .and_then(|body| body.error);
        IdeasClientError::from_status(status, message)
    }
}

#[async_trait(?Send)]
impl IdeasSource for HttpClient {
    async fn fetch_ideas(&self, query: &ListingQuery) -> IdeasClientResult<IdeasPage> {
        let response = self
            .client
            .get(self.endpoint("/api/ideas"))
            .header(ACCEPT, "application/json")
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(IdeasClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<IdeasPage>()
            .await
            .map_err(IdeasClientError::from_reqwest)
    }
}
