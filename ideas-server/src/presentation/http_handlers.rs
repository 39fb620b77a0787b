use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::{AppState, routes};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::routes;
    use crate::application::proxy_service::ProxyService;
    use crate::data::content_gateway::testing::FakeGateway;
    use crate::domain::error::ProxyError;
    use crate::presentation::AppState;

    fn app(gateway: &FakeGateway) -> Router {
        let proxy = ProxyService::new(Arc::new(gateway.clone()));
        routes(AppState::new(Arc::new(proxy)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let (status, _, body) = get(app(&FakeGateway::default()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn ideas_are_forwarded_with_repeated_keys() {
        let upstream = json!({ "data": [{ "title": "Hello" }], "meta": { "total": 1 } });
        let gateway = FakeGateway::with_listing(upstream.clone());

        let (status, content_type, body) = get(
            app(&gateway),
            "/api/ideas?page%5Bnumber%5D=1&page%5Bsize%5D=10&append%5B%5D=small_image&append%5B%5D=medium_image&sort=-published_at",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let parsed: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(parsed, upstream);

        let calls = gateway.list_calls.lock().expect("mutex poisoned");
        let keys: Vec<&str> = calls[0].pairs().iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(
            keys,
            ["page[number]", "page[size]", "append[]", "append[]", "sort"]
        );
    }

    #[tokio::test]
    async fn ideas_failure_returns_json_500() {
        let gateway = FakeGateway::default();

        let (status, _, body) = get(app(&gateway), "/api/ideas").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, br#"{"error":"Failed to fetch API data"}"#);
        assert_eq!(gateway.list_call_count(), 1);
    }

    #[tokio::test]
    async fn image_without_url_is_400_and_skips_upstream() {
        let gateway = FakeGateway::default();

        let (status, _, body) = get(app(&gateway), "/proxy-image").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, br#"Missing "url" query parameter"#);
        assert_eq!(gateway.image_call_count(), 0);
    }

    #[tokio::test]
    async fn image_is_streamed_with_upstream_content_type() {
        let gateway = FakeGateway::default();

        let (status, content_type, body) = get(
            app(&gateway),
            "/proxy-image?url=https%3A%2F%2Fassets.example.com%2Fstorage%2Fa.jpg",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(body, b"jpeg-bytes");
        assert_eq!(
            gateway.image_calls.lock().expect("mutex poisoned").as_slice(),
            ["https://assets.example.com/storage/a.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn api_prefixed_image_route_is_the_same_handler() {
        let gateway = FakeGateway::failing_image(ProxyError::UpstreamStatus(404));

        let (status, _, body) = get(
            app(&gateway),
            "/api/proxy-image?url=https%3A%2F%2Fassets.example.com%2Fmissing.jpg",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"Failed to fetch image");
    }

    #[tokio::test]
    async fn image_with_relative_url_is_rejected() {
        let gateway = FakeGateway::default();

        let (status, _, _) = get(app(&gateway), "/proxy-image?url=%2Fstorage%2Fa.jpg").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(gateway.image_call_count(), 0);
    }
}
