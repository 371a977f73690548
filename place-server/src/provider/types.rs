//! Wire types for the geocoding and routing providers.
//!
//! The geocoder speaks the Nominatim `/search` JSON format and the router
//! speaks the OSRM `/route/v1` format. Only the fields we use are modelled.

use serde::Deserialize;

/// One item of a geocoder search response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeItem {
    /// Full comma-separated address chain
    pub display_name: String,
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Fine-grained type (e.g. "restaurant", "city")
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Coarse class (e.g. "amenity", "place")
    #[serde(default)]
    pub class: Option<String>,
    /// Structured address, present when `addressdetails=1`
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
}

/// Address components of a geocoder item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
}

impl GeocodeAddress {
    /// City, or the nearest equivalent for smaller settlements.
    pub fn locality(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

/// Routing response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// "Ok", "NoRoute", ...
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteItem>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteItem {
    /// Metres
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    pub geometry: LineString,
}

/// GeoJSON LineString, `[lng, lat]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<[f64; 2]>,
}
