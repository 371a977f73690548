//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from provider and IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude/longitude not finite or outside the valid degree range
    #[error("invalid coordinates ({lat}, {lng}): {reason}")]
    InvalidCoordinates {
        lat: f64,
        lng: f64,
        reason: &'static str,
    },

    /// Travel mode string not one of driving, walking or cycling
    #[error("unknown travel mode: {0}")]
    UnknownTravelMode(String),
}
