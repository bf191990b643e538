//! In-memory places provider for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::errors::ApiError;
use crate::models::photo::{PhotoMedia, PlacePhotoReference, ReviewPhoto};
use crate::models::place::{DisplayName, LatLng, RawPlace};
use crate::models::review::{Review, ReviewsBundle};
use crate::repositories::places_repo::PlacesApi;
use crate::search::MaxDimensions;

/// Unknown photo names and references fail with a 502, unknown place ids
/// have no details record. Delays are keyed by place id, photo name or
/// photo reference.
#[derive(Default)]
pub struct FakePlacesApi {
    places: Vec<RawPlace>,
    failing_text_search: bool,
    details: HashMap<String, ReviewsBundle>,
    failing_details: HashSet<String>,
    media: HashMap<String, PhotoMedia>,
    redirects: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    text_search_calls: AtomicUsize,
    photo_calls: AtomicUsize,
}

impl FakePlacesApi {
    pub fn with_place(mut self, place: RawPlace) -> Self {
        self.places.push(place);
        self
    }

    pub fn with_failing_text_search(mut self) -> Self {
        self.failing_text_search = true;
        self
    }

    pub fn with_details(mut self, place_id: &str, bundle: ReviewsBundle) -> Self {
        self.details.insert(place_id.to_string(), bundle);
        self
    }

    pub fn with_failing_details(mut self, place_id: &str) -> Self {
        self.failing_details.insert(place_id.to_string());
        self
    }

    pub fn with_media(self, photo_name: &str, photo_uri: &str) -> Self {
        let media = PhotoMedia {
            name: format!("{photo_name}/media"),
            photo_uri: photo_uri.to_string(),
        };
        self.with_media_body(photo_name, media)
    }

    pub fn with_media_body(mut self, photo_name: &str, media: PhotoMedia) -> Self {
        self.media.insert(photo_name.to_string(), media);
        self
    }

    pub fn with_redirect(mut self, reference: &str, url: &str) -> Self {
        self.redirects.insert(reference.to_string(), url.to_string());
        self
    }

    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn text_search_calls(&self) -> usize {
        self.text_search_calls.load(Ordering::SeqCst)
    }

    pub fn photo_calls(&self) -> usize {
        self.photo_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

fn bad_gateway(endpoint: &'static str) -> ApiError {
    ApiError::Status {
        endpoint,
        status: StatusCode::BAD_GATEWAY,
    }
}

#[async_trait]
impl PlacesApi for FakePlacesApi {
    async fn search_text(&self, _api_key: &str, _text_query: &str) -> Result<Vec<RawPlace>, ApiError> {
        self.text_search_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_text_search {
            return Err(bad_gateway("text search"));
        }
        Ok(self.places.clone())
    }

    async fn place_details(
        &self,
        _api_key: &str,
        place_id: &str,
    ) -> Result<Option<ReviewsBundle>, ApiError> {
        self.pause(place_id).await;
        if self.failing_details.contains(place_id) {
            return Err(bad_gateway("place details"));
        }
        Ok(self.details.get(place_id).cloned())
    }

    async fn photo_media(
        &self,
        _api_key: &str,
        photo_name: &str,
        _max: MaxDimensions,
    ) -> Result<PhotoMedia, ApiError> {
        self.photo_calls.fetch_add(1, Ordering::SeqCst);
        self.pause(photo_name).await;
        self.media
            .get(photo_name)
            .cloned()
            .ok_or_else(|| bad_gateway("photo media"))
    }

    async fn photo_redirect(
        &self,
        _api_key: &str,
        photo_reference: &str,
        _max: MaxDimensions,
    ) -> Result<String, ApiError> {
        self.photo_calls.fetch_add(1, Ordering::SeqCst);
        self.pause(photo_reference).await;
        self.redirects
            .get(photo_reference)
            .cloned()
            .ok_or_else(|| bad_gateway("photo"))
    }
}

pub fn raw_place(id: &str, name: &str, photo_names: &[&str]) -> RawPlace {
    RawPlace {
        id: id.to_string(),
        display_name: DisplayName {
            text: name.to_string(),
            language_code: "en".to_string(),
        },
        location: Some(LatLng {
            latitude: 40.7,
            longitude: -74.0,
        }),
        rating: Some(4.5),
        formatted_address: Some(format!("{name}, 1 Main St, Springfield")),
        photos: photo_names
            .iter()
            .map(|name| PlacePhotoReference {
                name: name.to_string(),
                width_px: 1200,
                height_px: 800,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn review_photo(reference: &str) -> ReviewPhoto {
    ReviewPhoto {
        height: 600,
        html_attributions: Vec::new(),
        photo_reference: reference.to_string(),
        width: 800,
    }
}

pub fn review(author: &str, rating: i64) -> Review {
    Review {
        author_name: author.to_string(),
        rating,
        text: format!("{author} liked it"),
        relative_time_description: "a week ago".to_string(),
        ..Default::default()
    }
}

pub fn bundle(rating: f64, reviews: Vec<Review>, photos: Vec<ReviewPhoto>) -> ReviewsBundle {
    ReviewsBundle {
        photos,
        rating,
        reviews,
    }
}
