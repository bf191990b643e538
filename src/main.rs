use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};

use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::places_repo::GooglePlacesRepo;

pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting restaurant search backend in {} environment", config.environment);

    let places_api_key = config.api_key();
    if places_api_key.is_none() {
        warn!("PLACES_API_KEY is not set, every search will fail until it is configured");
    }

    let app_state = AppState {
        places_api: Arc::new(GooglePlacesRepo::from_config(&config)?),
        places_api_key,
        max_photo: config.photo_dimensions(),
    };

    controller::serve(app_state, &config).await
}
