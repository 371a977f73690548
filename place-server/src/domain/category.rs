//! Nearby-search categories.
//!
//! Purely descriptive metadata handed to the presentation layer; rendering
//! decides how to show it.

use serde::Serialize;

/// A supported nearby-search category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaceCategory {
    /// Stable identifier, used as the `kind` of generated places.
    pub id: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl PlaceCategory {
    /// All categories, in display order.
    pub const ALL: &'static [PlaceCategory] = &[
        PlaceCategory::new("restaurant", "Restaurants", "🍽️"),
        PlaceCategory::new("cafe", "Cafes", "☕"),
        PlaceCategory::new("hotel", "Hotels", "🏨"),
        PlaceCategory::new("attraction", "Attractions", "🏛️"),
        PlaceCategory::new("shopping", "Shopping", "🛍️"),
        PlaceCategory::new("hospital", "Hospitals", "🏥"),
        PlaceCategory::new("pharmacy", "Pharmacies", "💊"),
        PlaceCategory::new("atm", "ATMs", "🏧"),
        PlaceCategory::new("transport", "Transport", "🚉"),
        PlaceCategory::new("park", "Parks", "🌳"),
        PlaceCategory::new("temple", "Temples", "🛕"),
        PlaceCategory::new("market", "Markets", "🧺"),
    ];

    const fn new(id: &'static str, display_name: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            display_name,
            icon,
        }
    }

    /// Look up a category by id, ignoring case and surrounding whitespace.
    pub fn find(id: &str) -> Option<&'static PlaceCategory> {
        let id = id.trim();
        Self::ALL.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }
}
