//! Search-and-enrich pipeline.
//!
//! A query goes through one text search, then every returned place is
//! enriched concurrently: its own photos are resolved to media URLs while
//! its reviews are fetched (and their photos resolved in turn). Each batch
//! is awaited as a unit and keeps the input order.

pub mod normalize;
pub mod orchestrator;
pub mod photo_resolver;
pub mod place_enricher;
pub mod reviews_fetcher;

#[cfg(test)]
pub mod testing;

use crate::repositories::places_repo::PlacesApi;

/// Upper bound requested for resolved images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxDimensions {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for MaxDimensions {
    fn default() -> Self {
        Self {
            width_px: 1920,
            height_px: 1080,
        }
    }
}

/// Read-only inputs shared by every branch of one search call.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub api: &'a dyn PlacesApi,
    pub api_key: &'a str,
    pub max_photo: MaxDimensions,
}
