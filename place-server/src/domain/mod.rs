//! Domain types for the place resolver.
//!
//! This module contains the core domain model types that represent
//! validated location data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod category;
mod coordinates;
mod error;
mod place;
mod region;
mod route;

pub use category::PlaceCategory;
pub use coordinates::Coordinates;
pub use error::DomainError;
pub use place::{DEFAULT_KIND, Place};
pub use region::{INDIA, Region, RegionBounds};
pub use route::{RouteEstimate, TravelMode};
