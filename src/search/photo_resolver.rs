use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::debug;

use crate::errors::{ApiError, PhotoResolutionError};
use crate::models::photo::{PlacePhoto, PlacePhotoReference, ReviewPhoto};
use crate::search::SearchContext;

const REFERENCE_LOG_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoVariant {
    /// Place photos: media endpoint keyed by resource name, URL in the body.
    NamedResource,
    /// Review photos: query-parameter endpoint, URL is the redirect target.
    QueryReference,
}

/// How one kind of photo reference becomes a fetchable URL.
#[async_trait]
pub trait PhotoResolutionStrategy: Send + Sync {
    type Reference: Send + Sync;
    type Resolved: Send;

    fn variant(&self) -> PhotoVariant;

    /// The opaque token inside the reference.
    fn token(reference: &Self::Reference) -> &str;

    async fn fetch(&self, reference: &Self::Reference) -> Result<Self::Resolved, ApiError>;
}

pub struct NamedResourceStrategy<'a> {
    ctx: SearchContext<'a>,
}

impl<'a> NamedResourceStrategy<'a> {
    pub fn new(ctx: SearchContext<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<'a> PhotoResolutionStrategy for NamedResourceStrategy<'a> {
    type Reference = PlacePhotoReference;
    type Resolved = PlacePhoto;

    fn variant(&self) -> PhotoVariant {
        PhotoVariant::NamedResource
    }

    fn token(reference: &PlacePhotoReference) -> &str {
        &reference.name
    }

    async fn fetch(&self, reference: &PlacePhotoReference) -> Result<PlacePhoto, ApiError> {
        let media = self
            .ctx
            .api
            .photo_media(self.ctx.api_key, &reference.name, self.ctx.max_photo)
            .await?;
        Ok(PlacePhoto::from_media(media, reference))
    }
}

pub struct QueryReferenceStrategy<'a> {
    ctx: SearchContext<'a>,
}

impl<'a> QueryReferenceStrategy<'a> {
    pub fn new(ctx: SearchContext<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<'a> PhotoResolutionStrategy for QueryReferenceStrategy<'a> {
    type Reference = ReviewPhoto;
    type Resolved = ReviewPhoto;

    fn variant(&self) -> PhotoVariant {
        PhotoVariant::QueryReference
    }

    fn token(reference: &ReviewPhoto) -> &str {
        &reference.photo_reference
    }

    async fn fetch(&self, reference: &ReviewPhoto) -> Result<ReviewPhoto, ApiError> {
        let url = self
            .ctx
            .api
            .photo_redirect(
                self.ctx.api_key,
                &reference.photo_reference,
                self.ctx.max_photo,
            )
            .await?;
        Ok(reference.with_url(url))
    }
}

/// Resolves one reference. No retries, no caching.
pub async fn resolve<S: PhotoResolutionStrategy>(
    strategy: &S,
    reference: &S::Reference,
) -> Result<S::Resolved, PhotoResolutionError> {
    let token = S::token(reference);
    if token.trim().is_empty() {
        return Err(PhotoResolutionError::EmptyReference);
    }

    strategy.fetch(reference).await.map_err(|source| {
        let reference = truncate_reference(token);
        debug!(variant = ?strategy.variant(), %reference, error = %source, "photo resolution failed");
        PhotoResolutionError::Upstream { reference, source }
    })
}

/// Resolves every reference concurrently. Output order follows input order;
/// the first failure fails the whole batch.
pub async fn resolve_batch<S: PhotoResolutionStrategy>(
    strategy: &S,
    references: &[S::Reference],
) -> Result<Vec<S::Resolved>, PhotoResolutionError> {
    try_join_all(references.iter().map(|reference| resolve(strategy, reference))).await
}

pub fn truncate_reference(reference: &str) -> String {
    reference.chars().take(REFERENCE_LOG_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::photo::AuthorAttribution;
    use crate::search::testing::{review_photo, FakePlacesApi};
    use crate::search::MaxDimensions;

    fn ctx(api: &FakePlacesApi) -> SearchContext<'_> {
        SearchContext {
            api,
            api_key: "test-key",
            max_photo: MaxDimensions::default(),
        }
    }

    #[test]
    fn truncates_long_references_for_diagnostics() {
        let reference = "AUc7tXWkVbq3f9Q0cZ2u8Lr1mYhNpD4sTgE6";

        assert_eq!(truncate_reference(reference), "AUc7tXWkVbq3f9Q0cZ2u");
        assert_eq!(truncate_reference("short"), "short");
    }

    #[tokio::test]
    async fn empty_reference_is_rejected_without_a_call() {
        let api = FakePlacesApi::default();
        let strategy = QueryReferenceStrategy::new(ctx(&api));

        let err = resolve(&strategy, &review_photo("")).await.unwrap_err();

        assert!(matches!(err, PhotoResolutionError::EmptyReference));
        assert_eq!(api.photo_calls(), 0);
    }

    #[tokio::test]
    async fn named_resource_keeps_static_metadata() {
        let api = FakePlacesApi::default().with_media("places/p/photos/a", "https://img/a");
        let strategy = NamedResourceStrategy::new(ctx(&api));
        let reference = PlacePhotoReference {
            name: "places/p/photos/a".into(),
            width_px: 4032,
            height_px: 3024,
            author_attributions: vec![AuthorAttribution {
                display_name: "Grace".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let photo = resolve(&strategy, &reference).await.unwrap();

        assert_eq!(photo.photo_uri, "https://img/a");
        assert_eq!(photo.width_px, 4032);
        assert_eq!(photo.height_px, 3024);
        assert_eq!(photo.author_attributions[0].display_name, "Grace");
    }

    #[tokio::test]
    async fn query_reference_replaces_token_with_redirect_target() {
        let api = FakePlacesApi::default().with_redirect("ref-1", "https://lh3/final");
        let strategy = QueryReferenceStrategy::new(ctx(&api));
        let mut photo = review_photo("ref-1");
        photo.html_attributions = vec!["<a>Ada</a>".into()];

        let resolved = resolve(&strategy, &photo).await.unwrap();

        assert_eq!(resolved.photo_reference, "https://lh3/final");
        assert_eq!(resolved.width, photo.width);
        assert_eq!(resolved.height, photo.height);
        assert_eq!(resolved.html_attributions, photo.html_attributions);
    }

    #[tokio::test]
    async fn batch_keeps_input_order_regardless_of_completion() {
        let api = FakePlacesApi::default()
            .with_redirect("slow", "https://img/slow")
            .with_redirect("fast", "https://img/fast")
            .with_redirect("mid", "https://img/mid")
            .with_delay("slow", Duration::from_millis(40))
            .with_delay("mid", Duration::from_millis(20));
        let strategy = QueryReferenceStrategy::new(ctx(&api));
        let photos = vec![review_photo("slow"), review_photo("fast"), review_photo("mid")];

        let resolved = resolve_batch(&strategy, &photos).await.unwrap();

        let urls: Vec<_> = resolved.iter().map(|p| p.photo_reference.as_str()).collect();
        assert_eq!(urls, ["https://img/slow", "https://img/fast", "https://img/mid"]);
    }

    #[tokio::test]
    async fn batch_fails_when_any_reference_fails() {
        let long_reference = "missing-reference-0123456789";
        let api = FakePlacesApi::default().with_redirect("ok", "https://img/ok");
        let strategy = QueryReferenceStrategy::new(ctx(&api));
        let photos = vec![review_photo("ok"), review_photo(long_reference)];

        let err = resolve_batch(&strategy, &photos).await.unwrap_err();

        match err {
            PhotoResolutionError::Upstream { reference, .. } => {
                assert_eq!(reference, "missing-reference-01");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn batch_resolves_references_concurrently() {
        let delay = Duration::from_secs(1);
        let api = FakePlacesApi::default()
            .with_redirect("a", "https://img/a")
            .with_redirect("b", "https://img/b")
            .with_redirect("c", "https://img/c")
            .with_delay("a", delay)
            .with_delay("b", delay)
            .with_delay("c", delay);
        let strategy = QueryReferenceStrategy::new(ctx(&api));
        let photos = vec![review_photo("a"), review_photo("b"), review_photo("c")];
        let started = tokio::time::Instant::now();

        resolve_batch(&strategy, &photos).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "batch took {elapsed:?}");
    }
}
