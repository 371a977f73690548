//! Resolution engine.
//!
//! The single entry point for the presentation layer. Combines query
//! biasing, the result cache, the live provider and the offline fallback:
//!
//! 1. Offline mode short-circuits to offline data before any cache or
//!    network access.
//! 2. A fresh cache entry answers a search without a network call.
//! 3. Otherwise the provider is asked once, within its time budget.
//! 4. Any provider failure falls back to offline data. Fallback results are
//!    never cached, so the next search retries the network.
//!
//! Public operations never fail: the worst case is the offline dataset.

use tracing::{debug, warn};

use crate::bias::build_biased_query;
use crate::cache::{ClearOutcome, ResolutionCache};
use crate::config::{Settings, SettingsSource};
use crate::domain::{Coordinates, INDIA, Place, PlaceCategory, Region, RouteEstimate, TravelMode};
use crate::offline::OfflineSource;
use crate::provider::PlaceGateway;
use crate::rank::rank_candidates;

/// Orchestrates live resolution with cached and offline fallbacks.
pub struct ResolutionEngine<G> {
    gateway: G,
    cache: ResolutionCache,
    offline: OfflineSource,
    settings: SettingsSource,
    region: Region,
}

impl<G: PlaceGateway> ResolutionEngine<G> {
    /// Create an engine for India.
    pub fn new(
        gateway: G,
        cache: ResolutionCache,
        offline: OfflineSource,
        settings: impl Into<SettingsSource>,
    ) -> Self {
        Self {
            gateway,
            cache,
            offline,
            settings: settings.into(),
            region: INDIA,
        }
    }

    /// The settings currently in effect.
    pub async fn settings(&self) -> Settings {
        self.settings.current().await
    }

    /// Search for places matching a free-text query.
    ///
    /// A blank query lists the default offline cities.
    pub async fn search(&self, query: &str) -> Vec<Place> {
        let query = query.trim();

        if query.is_empty() {
            return self.offline.fallback_search("");
        }

        if self.settings().await.offline_mode {
            debug!(query, "offline mode, skipping geocoder");
            return self.offline.fallback_search(query);
        }

        if let Some(cached) = self.cache.get(query).await {
            debug!(query, results = cached.len(), "cache hit");
            return cached.as_ref().clone();
        }

        let biased = build_biased_query(query, &self.region);
        debug!(query, biased = %biased, "cache miss, asking geocoder");

        match self.gateway.search_places(&biased).await {
            Ok(candidates) => {
                let places = rank_candidates(candidates);
                self.cache.put(query, places.clone()).await;
                places
            }
            Err(e) => {
                warn!(query, error = %e, "geocoder unavailable, using offline gazetteer");
                self.offline.fallback_search(query)
            }
        }
    }

    /// Places of a category around a point.
    ///
    /// Always generated offline; no live nearby provider is wired in.
    pub fn nearby_places(&self, center: Coordinates, category: &str) -> Vec<Place> {
        self.offline.fallback_nearby_places(center, category)
    }

    /// Estimate a route between two points.
    ///
    /// `None` means the provider positively found no route; that answer is
    /// passed through rather than replaced with an estimate.
    pub async fn route(
        &self,
        start: Coordinates,
        end: Coordinates,
        mode: TravelMode,
    ) -> Option<RouteEstimate> {
        if self.settings().await.offline_mode {
            debug!(%start, %end, %mode, "offline mode, estimating route");
            return Some(self.offline.fallback_route(start, end, mode));
        }

        match self.gateway.get_route(start, end, mode).await {
            Ok(route) => route,
            Err(e) => {
                warn!(%start, %end, %mode, error = %e, "router unavailable, estimating route");
                Some(self.offline.fallback_route(start, end, mode))
            }
        }
    }

    /// Forget every cached search, in memory and on disk.
    pub async fn clear_cache(&self) -> ClearOutcome {
        self.cache.clear().await
    }

    /// Categories supported by [`ResolutionEngine::nearby_places`].
    pub fn categories(&self) -> &'static [PlaceCategory] {
        PlaceCategory::ALL
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
