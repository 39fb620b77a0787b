use async_trait::async_trait;
use gloo_net::http::Request;
use ideas_client::{IdeasClientError, IdeasClientResult, IdeasPage, IdeasSource, ListingQuery};
use serde::Deserialize;

/// Пустое значение означает тот же origin: страницу раздаёт сам прокси.
pub(crate) const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct GlooSource {
    base_url: String,
}

impl GlooSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait(?Send)]
impl IdeasSource for GlooSource {
    async fn fetch_ideas(&self, query: &ListingQuery) -> IdeasClientResult<IdeasPage> {
        let url = format!("{}?{}", self.endpoint("/api/ideas"), query.to_query_string());

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| IdeasClientError::Network(err.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("API response error: {status}"));
            return Err(IdeasClientError::Status { status, message });
        }

        response
            .json::<IdeasPage>()
            .await
            .map_err(|err| IdeasClientError::Decode(err.to_string()))
    }
}
