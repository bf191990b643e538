use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::errors::{ConfigurationError, SearchResult, UpstreamError};
use crate::models::restaurant::Restaurant;
use crate::repositories::places_repo::PlacesApi;
use crate::search::place_enricher::enrich;
use crate::search::{MaxDimensions, SearchContext};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    AwaitingSearch,
    AwaitingEnrichment,
    Done,
    Failed,
}

pub struct SearchOrchestrator {
    api: Arc<dyn PlacesApi>,
    api_key: Option<String>,
    max_photo: MaxDimensions,
}

impl SearchOrchestrator {
    pub fn new(
        api: Arc<dyn PlacesApi>,
        api_key: Option<String>,
        max_photo: MaxDimensions,
    ) -> Self {
        Self {
            api,
            api_key,
            max_photo,
        }
    }

    /// Searches the provider and enriches every result.
    ///
    /// Either every place is enriched and returned in provider order, or the
    /// call fails as a whole. A query without matches is an empty list.
    pub async fn search(&self, query: &str) -> SearchResult<Vec<Restaurant>> {
        let mut state = SearchState::Idle;
        info!("Searching places for query: {}", query);

        let outcome = self.run(query, &mut state).await;
        match &outcome {
            Ok(restaurants) => {
                advance(&mut state, SearchState::Done);
                info!(
                    "Search for {} returned {} restaurants",
                    query,
                    restaurants.len()
                );
            }
            Err(_) => advance(&mut state, SearchState::Failed),
        }
        outcome
    }

    async fn run(&self, query: &str, state: &mut SearchState) -> SearchResult<Vec<Restaurant>> {
        let api_key = self.api_key.as_deref().ok_or(ConfigurationError)?;
        let ctx = SearchContext {
            api: self.api.as_ref(),
            api_key,
            max_photo: self.max_photo,
        };

        advance(state, SearchState::AwaitingSearch);
        let places = self
            .api
            .search_text(api_key, query)
            .await
            .map_err(UpstreamError::TextSearch)?;

        if places.is_empty() {
            return Ok(Vec::new());
        }

        advance(state, SearchState::AwaitingEnrichment);
        let restaurants = try_join_all(places.into_iter().map(|place| enrich(ctx, place))).await?;
        Ok(restaurants)
    }
}

fn advance(state: &mut SearchState, next: SearchState) {
    debug!(from = ?*state, to = ?next, "search state changed");
    *state = next;
}
