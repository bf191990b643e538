use axum::response::IntoResponse;

use crate::helpers::error_response::ErrorResponse;

pub async fn page_not_found_handler() -> impl IntoResponse {
    ErrorResponse::not_found("Oops looks like you landed at the wrong endpoint")
}
