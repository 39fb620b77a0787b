use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::proxy_service::ProxyService;
use data::upstream::http_gateway::HttpGateway;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let gateway = HttpGateway::new(
        settings.upstream_base_url.clone(),
        settings.image_header_profile(),
        settings.upstream_connect_timeout(),
        settings.upstream_timeout(),
    )?;
    let proxy = Arc::new(ProxyService::new(Arc::new(gateway)));

    server::run_http(&settings, AppState::new(proxy)).await
}
