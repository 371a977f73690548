//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Place, PlaceCategory, RouteEstimate};

/// Free-text place search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Query text
    #[serde(default)]
    pub q: String,
}

/// Places of a category around a point.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub lat: f64,
    pub lng: f64,
    /// Category id (see `/api/categories`)
    pub category: String,
}

/// Route between two points.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
    /// "driving" (default), "walking" or "cycling"
    pub mode: Option<String>,
}

/// Response carrying places.
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// Response carrying an optional route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// `null` when no route exists between the points
    pub route: Option<RouteEstimate>,
}

/// Category list.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [PlaceCategory],
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
