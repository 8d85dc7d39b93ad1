use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod error;
mod handlers {
    pub mod leads;
}

use config::RelayConfig;
use handlers::leads;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    config: RelayConfig,
    http: reqwest::Client,
    limiter: DefaultDirectRateLimiter,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        let limiter = RateLimiter::direct(Quota::per_minute(config.lead_rate_per_minute));
        Ok(AppState { config, http, limiter })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let allow_origin = match &state.config.frontend_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/leads", post(leads::relay_lead))
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(allow_origin)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RelayConfig::from_env()?;
    let bind_addr = config.bind_addr;
    info!(
        "Relaying leads to {} at {} per minute, serving {}",
        config.lead_form_endpoint,
        config.lead_rate_per_minute,
        config.static_dir.display()
    );

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
