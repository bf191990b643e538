use serde::{Deserialize, Serialize};

use crate::models::photo::PlacePhoto;
use crate::models::review::ReviewsBundle;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub rating: f64,
    pub photos: Vec<PlacePhoto>,
    pub location: Location,
    pub place_id: String,
    /// Owned by the client; never derived from upstream data.
    pub would_try: bool,
    pub reviews: ReviewsBundle,
    pub formatted_address: String,
    pub price_level: String,
    pub website_uri: String,
    pub google_maps_uri: String,
    pub current_opening_hours: CurrentOpeningHours,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct CurrentOpeningHours {
    pub open_now: bool,
    pub weekday_descriptions: Vec<String>,
    pub next_close_time: String,
}
