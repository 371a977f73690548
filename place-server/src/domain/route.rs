//! Route estimate types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// How the route is travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelMode {
    /// Lower-case name, also used as the routing profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
        }
    }

    /// Average speed assumed by the offline estimate, in km/h.
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            TravelMode::Driving => 40.0,
            TravelMode::Walking => 4.0,
            TravelMode::Cycling => 12.0,
        }
    }

    /// Multiplier applied to offline durations to account for congestion.
    pub fn traffic_factor(&self) -> f64 {
        match self {
            TravelMode::Driving => 1.3,
            TravelMode::Walking | TravelMode::Cycling => 1.0,
        }
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "cycling" => Ok(TravelMode::Cycling),
            _ => Err(DomainError::UnknownTravelMode(s.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated distance and duration between two points.
///
/// `geometry` is an ordered path of `[lng, lat]` pairs. Estimates are
/// produced fresh for every request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub geometry: Vec<[f64; 2]>,
    pub mode: TravelMode,
}
