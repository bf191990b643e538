use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::photo::PlacePhotoReference;

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchRequest<'a> {
    pub text_query: &'a str,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct TextSearchResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub places: Vec<RawPlace>,
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayName {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub text: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub language_code: String,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamOpeningHours {
    pub open_now: Option<bool>,
    pub weekday_descriptions: Option<Vec<String>>,
    pub next_close_time: Option<String>,
}

/// One text-search result. Only lives for the duration of a search call.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub display_name: DisplayName,
    pub location: Option<LatLng>,
    pub rating: Option<f64>,
    pub price_level: Option<String>,
    pub user_rating_count: Option<i64>,
    pub formatted_address: Option<String>,
    pub short_formatted_address: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub photos: Vec<PlacePhotoReference>,
    pub google_maps_uri: Option<String>,
    pub website_uri: Option<String>,
    pub current_opening_hours: Option<UpstreamOpeningHours>,
}

impl RawPlace {
    pub fn display_name(&self) -> &str {
        &self.display_name.text
    }
}
