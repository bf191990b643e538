use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::controller::AppState;
use crate::helpers::error_response::ErrorResponse;
use crate::search::orchestrator::SearchOrchestrator;

pub fn router(app_state: AppState) -> Router {
    let orchestrator = Arc::new(SearchOrchestrator::new(
        app_state.places_api,
        app_state.places_api_key,
        app_state.max_photo,
    ));

    Router::new()
        .route("/search", get(search_restaurants))
        .route_layer(Extension(orchestrator))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchParam {
    pub query: Option<String>,
}

pub async fn search_restaurants(
    Extension(orchestrator): Extension<Arc<SearchOrchestrator>>,
    Query(params): Query<SearchParam>,
) -> impl IntoResponse {
    let query = match params.query.filter(|query| !query.is_empty()) {
        Some(query) => query,
        None => return ErrorResponse::bad_request("Query parameter is required").into_response(),
    };

    match orchestrator.search(&query).await {
        Ok(restaurants) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": restaurants,
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Something went wrong searching restaurants for {}: {:?}", query, e);
            ErrorResponse::internal_server_error(e.to_string()).into_response()
        }
    }
}
