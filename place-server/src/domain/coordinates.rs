//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A validated (latitude, longitude) pair in degrees.
///
/// Both components are finite, latitude lies in `[-90, 90]` and longitude in
/// `[-180, 180]`. Deserialization goes through the same validation.
///
/// # Examples
///
/// ```
/// use place_server::domain::Coordinates;
///
/// let mumbai = Coordinates::new(19.076, 72.8777).unwrap();
/// assert_eq!(mumbai.lng_lat(), [72.8777, 19.076]);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.lat, raw.lng)
    }
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidCoordinates { lat, lng, reason };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid("must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("longitude out of range"));
        }

        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns the point in `[lng, lat]` order, as used by path geometries.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Shift by the given deltas, clamping to the valid range.
    ///
    /// Non-finite deltas leave the corresponding axis unchanged.
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        let shift = |value: f64, delta: f64, limit: f64| {
            if delta.is_finite() {
                (value + delta).clamp(-limit, limit)
            } else {
                value
            }
        };

        Self {
            lat: shift(self.lat, d_lat, 90.0),
            lng: shift(self.lng, d_lng, 180.0),
        }
    }

    /// Arithmetic midpoint of two points (not the great-circle midpoint).
    pub fn midpoint(&self, other: &Coordinates) -> Self {
        Self {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}
