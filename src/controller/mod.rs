use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::places_repo::PlacesApi;
use crate::search::MaxDimensions;

pub mod health_check;
pub mod search_controller;

#[derive(Clone)]
pub struct AppState {
    pub places_api: Arc<dyn PlacesApi>,
    pub places_api_key: Option<String>,
    pub max_photo: MaxDimensions,
}

pub async fn serve(app_state: AppState, config: &Config) -> anyhow::Result<()> {
    let origins = config
        .origin_urls
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    let application = router_endpoints(app_state).layer(
        ServiceBuilder::new()
            .layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::OPTIONS])
                    .allow_origin(origins)
                    .allow_headers([CONTENT_TYPE]),
            )
            .layer(CompressionLayer::new()),
    );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    // The web client addresses the same search under an `/api` prefix.
    health_check::router()
        .merge(search_controller::router(app_state.clone()))
        .nest("/api", search_controller::router(app_state))
        .fallback(page_not_found_handler)
}
