use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::photo::ReviewPhoto;

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Review {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub author_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub author_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub language: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub original_language: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub profile_photo_url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rating: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub relative_time_description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub text: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub time: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub translated: bool,
}

/// Reviews, overall rating and review photos of one place.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ReviewsBundle {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub photos: Vec<ReviewPhoto>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rating: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct PlaceDetailsReply {
    pub result: Option<ReviewsBundle>,
    #[serde(default)]
    pub status: String,
}
