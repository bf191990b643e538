use futures::try_join;
use tracing::instrument;

use crate::errors::{PhotoResolutionError, UpstreamError};
use crate::models::photo::{PlacePhoto, PlacePhotoReference};
use crate::models::place::RawPlace;
use crate::models::restaurant::Restaurant;
use crate::search::normalize::assemble_restaurant;
use crate::search::photo_resolver::{resolve_batch, NamedResourceStrategy};
use crate::search::reviews_fetcher::fetch_reviews;
use crate::search::SearchContext;

/// Turns one text-search result into a `Restaurant`.
///
/// The place's own photos and its reviews are fetched concurrently. Unlike
/// review photos, a single place photo that cannot be resolved fails the
/// whole place.
#[instrument(skip(ctx, place), fields(place = %place.display_name()))]
pub async fn enrich(ctx: SearchContext<'_>, place: RawPlace) -> Result<Restaurant, UpstreamError> {
    let place_name = place.display_name().to_string();

    let photos = async {
        resolve_place_photos(ctx, &place.photos)
            .await
            .map_err(|source| UpstreamError::PlacePhoto {
                place: place_name.clone(),
                source,
            })
    };
    let reviews = async {
        fetch_reviews(ctx, &place.id)
            .await
            .map_err(|source| UpstreamError::Reviews {
                place: place_name.clone(),
                source,
            })
    };

    let (photos, reviews) = try_join!(photos, reviews)?;
    Ok(assemble_restaurant(place, photos, reviews))
}

async fn resolve_place_photos(
    ctx: SearchContext<'_>,
    references: &[PlacePhotoReference],
) -> Result<Vec<PlacePhoto>, PhotoResolutionError> {
    if references.is_empty() {
        return Ok(Vec::new());
    }

    let strategy = NamedResourceStrategy::new(ctx);
    let resolved = resolve_batch(&strategy, references).await?;
    Ok(resolved.into_iter().filter(|photo| !photo.is_empty()).collect())
}
