use clap::Parser;

use crate::search::MaxDimensions;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed by CORS
    #[clap(env, long, default_value = "http://localhost:8081")]
    pub origin_urls: String,

    #[clap(env, long)]
    pub places_api_key: Option<String>,

    #[clap(env, long, default_value = "https://places.googleapis.com/v1")]
    pub places_base_url: String,

    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api/place")]
    pub maps_base_url: String,

    #[clap(env, long, default_value_t = 1920)]
    pub photo_max_width_px: u32,

    #[clap(env, long, default_value_t = 1080)]
    pub photo_max_height_px: u32,

    /// Unset means outbound requests run until the upstream answers
    #[clap(env, long)]
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn photo_dimensions(&self) -> MaxDimensions {
        MaxDimensions {
            width_px: self.photo_max_width_px,
            height_px: self.photo_max_height_px,
        }
    }

    pub fn api_key(&self) -> Option<String> {
        self.places_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}
