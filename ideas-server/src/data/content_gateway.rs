use async_trait::async_trait;
use axum::body::Body;
use serde_json::Value;

use crate::domain::error::ProxyError;
use crate::domain::image::ImageSource;
use crate::domain::listing::ListingQuery;

pub(crate) struct ImagePayload {
    pub(crate) content_type: Option<String>,
    pub(crate) body: Body,
}

#[async_trait]
pub(crate) trait ContentGateway: Send + Sync {
    async fn list_ideas(&self, query: &ListingQuery) -> Result<Value, ProxyError>;
    async fn fetch_image(&self, source: &ImageSource) -> Result<ImagePayload, ProxyError>;
}
