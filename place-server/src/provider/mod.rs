//! Live geocoding and routing providers.
//!
//! [`PlaceGateway`] is the seam the resolution engine talks to;
//! [`ProviderClient`] implements it over HTTP against a Nominatim-style
//! geocoder and an OSRM-style router.
//!
//! This is the only layer that produces [`ProviderUnavailable`]. Timeouts,
//! transport failures, bad statuses and malformed payloads all collapse into
//! it because the recovery is the same for each: use offline data.

mod client;
mod convert;
mod error;
mod types;

use std::future::Future;

use crate::domain::{Coordinates, RouteEstimate, TravelMode};

pub use client::{ProviderClient, ProviderConfig};
pub use convert::{Candidate, ConversionError, clean_display_name};
pub use error::ProviderUnavailable;
pub use types::{GeocodeAddress, GeocodeItem, LineString, RouteItem, RouteResponse};

/// Source of live search and routing answers.
///
/// Each call makes at most one outbound request and either answers within
/// its time budget or fails with [`ProviderUnavailable`].
pub trait PlaceGateway: Send + Sync {
    /// Search for places matching an already region-biased query.
    fn search_places(
        &self,
        biased_query: &str,
    ) -> impl Future<Output = Result<Vec<Candidate>, ProviderUnavailable>> + Send;

    /// Route between two points. `Ok(None)` means the provider found no route.
    fn get_route(
        &self,
        start: Coordinates,
        end: Coordinates,
        mode: TravelMode,
    ) -> impl Future<Output = Result<Option<RouteEstimate>, ProviderUnavailable>> + Send;
}
