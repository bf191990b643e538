use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single outbound call to the places provider.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("failed to parse {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{endpoint} answered without redirecting to an image")]
    NotRedirected { endpoint: &'static str },
}

#[derive(Debug, Error)]
pub enum PhotoResolutionError {
    #[error("photo reference is empty")]
    EmptyReference,
    #[error("failed to get photo data for reference {reference}: {source}")]
    Upstream {
        reference: String,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to get places by text: {0}")]
    TextSearch(#[source] ApiError),
    #[error("failed to get reviews for {place}: {source}")]
    Reviews {
        place: String,
        #[source]
        source: ApiError,
    },
    #[error("failed to get photo for {place}: {source}")]
    PlacePhoto {
        place: String,
        #[source]
        source: PhotoResolutionError,
    },
}

#[derive(Debug, Error)]
#[error("PLACES_API_KEY environment variable is not set")]
pub struct ConfigurationError;

/// Everything a search call can fail with. The HTTP layer only exposes the
/// message; the variant is kept for logs.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

pub type SearchResult<T> = Result<T, SearchError>;
