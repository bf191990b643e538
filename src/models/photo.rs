use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub display_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub uri: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub photo_uri: String,
}

/// Place-level photo reference from text search. `name` is the opaque
/// resource name fed to the media endpoint.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacePhotoReference {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub width_px: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub height_px: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub author_attributions: Vec<AuthorAttribution>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub flag_content_uri: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub google_maps_uri: String,
}

/// Body returned by the named media endpoint when redirects are skipped.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMedia {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub photo_uri: String,
}

/// A place photo after resolution, as handed to clients.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacePhoto {
    pub name: String,
    pub photo_uri: String,
    pub width_px: i64,
    pub height_px: i64,
    pub author_attributions: Vec<AuthorAttribution>,
}

impl PlacePhoto {
    pub fn from_media(media: PhotoMedia, reference: &PlacePhotoReference) -> Self {
        Self {
            name: media.name,
            photo_uri: media.photo_uri,
            width_px: reference.width_px,
            height_px: reference.height_px,
            author_attributions: reference.author_attributions.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.photo_uri.is_empty()
    }
}

/// Review photo from place details. Before resolution `photo_reference` is
/// the opaque token; afterwards it holds the final image URL.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ReviewPhoto {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub height: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub html_attributions: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub photo_reference: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub width: i64,
}

impl ReviewPhoto {
    pub fn with_url(&self, url: String) -> Self {
        Self {
            photo_reference: url,
            ..self.clone()
        }
    }
}
