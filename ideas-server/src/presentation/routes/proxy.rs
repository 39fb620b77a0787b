use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::ideas::list_ideas;
use crate::presentation::handlers::images::proxy_image;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ideas", get(list_ideas))
        .route("/proxy-image", get(proxy_image))
        .route("/api/proxy-image", get(proxy_image))
}
