use std::sync::Arc;

use crate::application::proxy_service::ProxyService;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) proxy: Arc<ProxyService>,
}

impl AppState {
    pub(crate) fn new(proxy: Arc<ProxyService>) -> Self {
        Self { proxy }
    }
}
