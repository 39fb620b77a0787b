use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::body::Body;
use reqwest::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::data::content_gateway::{ContentGateway, ImagePayload};
use crate::domain::error::ProxyError;
use crate::domain::image::{HeaderProfile, ImageSource};
use crate::domain::listing::ListingQuery;

#[derive(Debug, Clone)]
pub(crate) struct HttpGateway {
    base_url: String,
    client: Client,
    image_headers: HeaderProfile,
    listing_timeout: Duration,
}

impl HttpGateway {
    pub(crate) fn new(
        base_url: impl Into<String>,
        image_headers: HeaderProfile,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self> {
        // Общий таймаут ставится только на запрос списка: тело картинки
        // стримится, и ограничивается лишь пауза между чтениями.
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(timeout)
            .build()
            .context("failed to build upstream http client")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
            image_headers,
            listing_timeout: timeout,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn listing_request(&self, query: &ListingQuery) -> RequestBuilder {
        self.client
            .get(self.endpoint("/api/ideas"))
            .header(ACCEPT, "application/json")
            .query(&query.pairs())
            .timeout(self.listing_timeout)
    }

    fn image_request(&self, source: &ImageSource) -> RequestBuilder {
        let mut request = self.client.get(source.as_str());
        for (name, value) in self.image_headers.headers() {
            request = request.header(name, value);
        }
        request
    }
}

#[async_trait]
impl ContentGateway for HttpGateway {
    async fn list_ideas(&self, query: &ListingQuery) -> Result<Value, ProxyError> {
        let response = self
            .listing_request(query)
            .send()
            .await
            .map_err(|err| ProxyError::Transport(err.to_string()))?;

        // Тело отдаётся как есть, статус апстрима не проверяется.
        response
            .json::<Value>()
            .await
            .map_err(|err| ProxyError::Decode(err.to_string()))
    }

    async fn fetch_image(&self, source: &ImageSource) -> Result<ImagePayload, ProxyError> {
        let response = self
            .image_request(source)
            .send()
            .await
            .map_err(|err| ProxyError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(ImagePayload {
            content_type,
            body: Body::from_stream(response.bytes_stream()),
        })
    }
}
