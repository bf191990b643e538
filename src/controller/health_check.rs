use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route("/ping", get(ping))
}

async fn get_health_check() -> StatusCode {
    StatusCode::OK
}

/// Liveness probe
async fn ping() -> &'static str {
    "pong"
}
