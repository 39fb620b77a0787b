use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::data::content_gateway::{ContentGateway, ImagePayload};
use crate::domain::error::ProxyError;
use crate::domain::image::ImageSource;
use crate::domain::listing::ListingQuery;

pub(crate) struct ProxyService {
    gateway: Arc<dyn ContentGateway>,
}

impl ProxyService {
    pub(crate) fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    pub(crate) async fn list_ideas(&self, raw_query: Option<&str>) -> Result<Value, ProxyError> {
        let query = ListingQuery::from_raw(raw_query);
        debug!(pairs = query.pairs().len(), "forwarding listing request");
        self.gateway.list_ideas(&query).await
    }

    /// Параметр проверяется до обращения к апстриму.
    pub(crate) async fn fetch_image(&self, raw_url: Option<&str>) -> Result<ImagePayload, ProxyError> {
        let source = ImageSource::parse(raw_url)?;
        self.gateway.fetch_image(&source).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::ProxyService;
    use crate::data::content_gateway::testing::FakeGateway;
    use crate::domain::error::ProxyError;

    #[tokio::test]
    async fn list_ideas_forwards_pairs_and_returns_body_verbatim() {
        let body = json!({ "data": [], "meta": { "total": 0 }, "links": { "next": null } });
        let gateway = FakeGateway::with_listing(body.clone());
        let service = ProxyService::new(Arc::new(gateway.clone()));

        let result = service
            .list_ideas(Some("page[number]=2&append[]=medium_image"))
            .await
            .expect("list must succeed");

        assert_eq!(result, body);
        let calls = gateway.list_calls.lock().expect("mutex poisoned");
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].pairs(),
            &[
                ("page[number]".to_string(), "2".to_string()),
                ("append[]".to_string(), "medium_image".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn list_ideas_propagates_gateway_failure() {
        let service = ProxyService::new(Arc::new(FakeGateway::default()));

        let err = service.list_ideas(None).await.expect_err("must fail");
        assert!(matches!(err, ProxyError::Transport(_)));
    }

    #[tokio::test]
    async fn fetch_image_without_url_never_calls_gateway() {
        let gateway = FakeGateway::default();
        let service = ProxyService::new(Arc::new(gateway.clone()));

        let err = match service.fetch_image(None).await {
            Ok(_) => panic!("missing url must be rejected"),
            Err(err) => err,
        };

        assert!(matches!(err, ProxyError::MissingParameter("url")));
        assert_eq!(gateway.image_call_count(), 0);
    }

    #[tokio::test]
    async fn fetch_image_passes_upstream_status_through() {
        let gateway = FakeGateway::failing_image(ProxyError::UpstreamStatus(404));
        let service = ProxyService::new(Arc::new(gateway.clone()));

        let err = match service.fetch_image(Some("https://assets.example.com/a.jpg")).await {
            Ok(_) => panic!("upstream 404 must be an error"),
            Err(err) => err,
        };

        assert!(matches!(err, ProxyError::UpstreamStatus(404)));
        assert_eq!(
            gateway.image_calls.lock().expect("mutex poisoned").as_slice(),
            ["https://assets.example.com/a.jpg".to_string()]
        );
    }
}
