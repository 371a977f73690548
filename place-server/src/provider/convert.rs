//! Conversion from provider DTOs to domain types.
//!
//! Geocoder items become region-tagged candidates; routing responses become
//! route estimates. Any item that can't be converted fails the whole
//! response, so callers never see a partially garbage result.

use crate::domain::{
    Coordinates, DEFAULT_KIND, DomainError, Place, Region, RouteEstimate, TravelMode,
};

use super::types::{GeocodeAddress, GeocodeItem, RouteResponse};

/// Display names with more segments than this are shortened.
const MAX_NAME_SEGMENTS: usize = 3;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// `lat`/`lon` string is not a number
    #[error("invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// Numbers parsed but don't form valid coordinates
    #[error(transparent)]
    InvalidCoordinates(#[from] DomainError),

    /// Route distance or duration is negative or not finite
    #[error("invalid route {0}")]
    InvalidRoute(&'static str),
}

/// A geocoder result tagged with whether it lies inside the target region.
///
/// The tag only lives until ranking; it is not part of [`Place`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub place: Place,
    pub in_region: bool,
}

/// Convert a full geocoder response.
pub fn convert_geocode_items(
    items: &[GeocodeItem],
    region: &Region,
) -> Result<Vec<Candidate>, ConversionError> {
    items.iter().map(|item| convert_geocode_item(item, region)).collect()
}

/// Convert a single geocoder item.
pub fn convert_geocode_item(
    item: &GeocodeItem,
    region: &Region,
) -> Result<Candidate, ConversionError> {
    let lat = parse_degrees("lat", &item.lat)?;
    let lng = parse_degrees("lon", &item.lon)?;
    let coordinates = Coordinates::new(lat, lng)?;

    let kind = item
        .item_type
        .as_deref()
        .or(item.class.as_deref())
        .filter(|k| !k.trim().is_empty())
        .unwrap_or(DEFAULT_KIND);

    let in_region = region.bounds.contains(coordinates);
    let name = clean_display_name(&item.display_name, item.address.as_ref());
    let description = describe(kind, item.address.as_ref(), in_region, region);

    Ok(Candidate {
        place: Place::new(name, coordinates, kind).with_description(description),
        in_region,
    })
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, ConversionError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Shorten long address chains to `"<primary>, <region>"`.
///
/// The region part is the address locality, else the state, else the
/// second segment of the chain.
pub fn clean_display_name(display_name: &str, address: Option<&GeocodeAddress>) -> String {
    let segments: Vec<&str> = display_name
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() <= MAX_NAME_SEGMENTS {
        return segments.join(", ");
    }

    let primary = segments[0];
    let area = address
        .and_then(|a| a.locality().or(a.state.as_deref()))
        .filter(|a| *a != primary)
        .unwrap_or(segments[1]);

    format!("{primary}, {area}")
}

/// One-line description from address components, or from kind and region.
fn describe(
    kind: &str,
    address: Option<&GeocodeAddress>,
    in_region: bool,
    region: &Region,
) -> String {
    let parts: Vec<&str> = address
        .map(|a| [a.locality(), a.state.as_deref()].into_iter().flatten().collect())
        .unwrap_or_default();

    if !parts.is_empty() {
        return parts.join(", ");
    }

    let label = humanize(kind);
    if in_region {
        format!("{label} in {}", region.name)
    } else {
        label
    }
}

/// "fast_food" -> "Fast food"
fn humanize(kind: &str) -> String {
    let spaced = kind.trim().replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a routing response. No routes means `Ok(None)`.
pub fn convert_route(
    response: &RouteResponse,
    mode: TravelMode,
) -> Result<Option<RouteEstimate>, ConversionError> {
    let Some(route) = response.routes.first() else {
        return Ok(None);
    };

    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(ConversionError::InvalidRoute("distance"));
    }
    if !route.duration.is_finite() || route.duration < 0.0 {
        return Err(ConversionError::InvalidRoute("duration"));
    }

    Ok(Some(RouteEstimate {
        distance_km: route.distance / 1000.0,
        duration_minutes: (route.duration / 60.0).round() as u32,
        geometry: route.geometry.coordinates.clone(),
        mode,
    }))
}
