use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{trace, warn};

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::photo::PhotoMedia;
use crate::models::place::{RawPlace, TextSearchRequest, TextSearchResponse};
use crate::models::review::{PlaceDetailsReply, ReviewsBundle};
use crate::search::MaxDimensions;

pub const TEXT_SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.location,places.rating,places.priceLevel,places.userRatingCount,places.formattedAddress,places.shortFormattedAddress,places.photos,places.googleMapsUri,places.websiteUri,places.currentOpeningHours";
pub const PLACE_DETAILS_FIELDS: &str = "reviews,rating,photos";

const TEXT_SEARCH: &str = "text search";
const PLACE_DETAILS: &str = "place details";
const PHOTO_MEDIA: &str = "photo media";
const PHOTO: &str = "photo";

/// The four call shapes the search pipeline issues against the places
/// provider. The API key is passed on every call and never stored here.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn search_text(&self, api_key: &str, text_query: &str) -> Result<Vec<RawPlace>, ApiError>;

    /// `Ok(None)` when the provider has no details record for the place.
    async fn place_details(
        &self,
        api_key: &str,
        place_id: &str,
    ) -> Result<Option<ReviewsBundle>, ApiError>;

    async fn photo_media(
        &self,
        api_key: &str,
        photo_name: &str,
        max: MaxDimensions,
    ) -> Result<PhotoMedia, ApiError>;

    /// Follows redirects and returns the address finally reached.
    async fn photo_redirect(
        &self,
        api_key: &str,
        photo_reference: &str,
        max: MaxDimensions,
    ) -> Result<String, ApiError>;
}

pub struct GooglePlacesRepo {
    http: Client,
    places_base_url: String,
    maps_base_url: String,
}

impl GooglePlacesRepo {
    pub fn new(
        http: Client,
        places_base_url: impl Into<String>,
        maps_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            places_base_url: places_base_url.into().trim_end_matches('/').to_string(),
            maps_base_url: maps_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .context("Failed to build the places http client")?;

        Ok(Self::new(
            http,
            config.places_base_url.clone(),
            config.maps_base_url.clone(),
        ))
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesRepo {
    async fn search_text(&self, api_key: &str, text_query: &str) -> Result<Vec<RawPlace>, ApiError> {
        let response = self
            .http
            .post(format!("{}/places:searchText", self.places_base_url))
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", TEXT_SEARCH_FIELD_MASK)
            .json(&TextSearchRequest { text_query })
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint: TEXT_SEARCH, source })?;

        let parsed: TextSearchResponse = read_json(TEXT_SEARCH, response).await?;
        trace!(places = parsed.places.len(), "text search answered");
        Ok(parsed.places)
    }

    async fn place_details(
        &self,
        api_key: &str,
        place_id: &str,
    ) -> Result<Option<ReviewsBundle>, ApiError> {
        let response = self
            .http
            .get(format!("{}/details/json", self.maps_base_url))
            .query(&[
                ("place_id", place_id),
                ("fields", PLACE_DETAILS_FIELDS),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint: PLACE_DETAILS, source: source.without_url() })?;

        let reply: PlaceDetailsReply = read_json(PLACE_DETAILS, response).await?;
        if reply.result.is_none() && !reply.status.is_empty() && reply.status != "OK" {
            warn!(place_id, status = %reply.status, "place details returned no result");
        }
        Ok(reply.result)
    }

    async fn photo_media(
        &self,
        api_key: &str,
        photo_name: &str,
        max: MaxDimensions,
    ) -> Result<PhotoMedia, ApiError> {
        let response = self
            .http
            .get(format!("{}/{}/media", self.places_base_url, photo_name))
            .query(&[
                ("key", api_key.to_string()),
                ("maxHeightPx", max.height_px.to_string()),
                ("maxWidthPx", max.width_px.to_string()),
                ("skipHttpRedirect", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint: PHOTO_MEDIA, source: source.without_url() })?;

        read_json(PHOTO_MEDIA, response).await
    }

    async fn photo_redirect(
        &self,
        api_key: &str,
        photo_reference: &str,
        max: MaxDimensions,
    ) -> Result<String, ApiError> {
        let request = self
            .http
            .get(format!("{}/photo", self.maps_base_url))
            .query(&[
                ("photoreference", photo_reference.to_string()),
                ("key", api_key.to_string()),
                ("maxwidth", max.width_px.to_string()),
                ("maxheight", max.height_px.to_string()),
            ])
            .build()
            .map_err(|source| ApiError::Transport { endpoint: PHOTO, source: source.without_url() })?;
        let requested = request.url().clone();

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ApiError::Transport { endpoint: PHOTO, source: source.without_url() })?;

        let response = ensure_success(PHOTO, response)?;
        // The requested address carries the API key and must never reach clients.
        if response.url() == &requested {
            warn!(photo_reference, "photo endpoint answered without a redirect");
            return Err(ApiError::NotRedirected { endpoint: PHOTO });
        }
        // The image body is not needed, only where the redirects ended up.
        Ok(response.url().to_string())
    }
}

fn ensure_success(endpoint: &'static str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { endpoint, status });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ApiError> {
    let response = ensure_success(endpoint, response)?;
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { endpoint, source })?;

    serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}
