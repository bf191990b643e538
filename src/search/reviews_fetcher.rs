use tracing::{instrument, warn};

use crate::errors::ApiError;
use crate::models::review::ReviewsBundle;
use crate::search::photo_resolver::{resolve_batch, QueryReferenceStrategy};
use crate::search::SearchContext;

/// Fetches reviews, rating and review photos for one place.
///
/// A place without a details record yields an empty bundle. Review photos
/// are resolved as one batch; if that batch fails the bundle keeps the
/// photos exactly as the provider returned them.
#[instrument(skip(ctx))]
pub async fn fetch_reviews(ctx: SearchContext<'_>, place_id: &str) -> Result<ReviewsBundle, ApiError> {
    let mut bundle = ctx
        .api
        .place_details(ctx.api_key, place_id)
        .await?
        .unwrap_or_default();

    if bundle.photos.is_empty() {
        return Ok(bundle);
    }

    let strategy = QueryReferenceStrategy::new(ctx);
    match resolve_batch(&strategy, &bundle.photos).await {
        Ok(resolved) => bundle.photos = resolved,
        Err(e) => {
            warn!("Failed to fetch review photos data, keeping unresolved photos: {}", e);
        }
    }

    Ok(bundle)
}
