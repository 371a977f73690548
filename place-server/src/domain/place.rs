//! Resolved place type.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Category label used when a source gives none.
pub const DEFAULT_KIND: &str = "place";

/// A resolved point of interest.
///
/// Places are values: fields are private and only set at construction, so a
/// `Place` never changes after it has been built. Enrichment fields
/// (`address`, `rating`, `category`) are only populated for generated nearby
/// places, never for geocoder results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlace")]
pub struct Place {
    name: String,
    coordinates: Coordinates,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Wire form of a [`Place`], before the kind is normalized.
#[derive(Deserialize)]
struct RawPlace {
    name: String,
    coordinates: Coordinates,
    #[serde(default)]
    kind: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    category: Option<String>,
}

impl From<RawPlace> for Place {
    fn from(raw: RawPlace) -> Self {
        Place {
            description: raw.description,
            address: raw.address,
            rating: raw.rating,
            category: raw.category,
            ..Place::new(raw.name, raw.coordinates, raw.kind)
        }
    }
}

impl Place {
    /// Create a place. A blank `kind` is replaced with [`DEFAULT_KIND`].
    pub fn new(name: impl Into<String>, coordinates: Coordinates, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let kind = if kind.trim().is_empty() {
            DEFAULT_KIND.to_string()
        } else {
            kind
        };

        Self {
            name: name.into(),
            coordinates,
            kind,
            description: None,
            address: None,
            rating: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
