//! Curated gazetteer of major Indian cities.

use crate::domain::{Coordinates, Place};

/// A city in the offline gazetteer.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub description: &'static str,
}

impl City {
    const fn new(name: &'static str, lat: f64, lng: f64, description: &'static str) -> Self {
        Self {
            name,
            lat,
            lng,
            description,
        }
    }

    /// Convert to a place. Returns `None` only if the table holds bad coordinates.
    pub fn to_place(&self) -> Option<Place> {
        let coordinates = Coordinates::new(self.lat, self.lng).ok()?;
        Some(Place::new(self.name, coordinates, "city").with_description(self.description))
    }
}

/// Cities in declared order. Order matters: empty and no-match searches
/// return a prefix of this list.
pub const CITIES: &[City] = &[
    City::new("Mumbai", 19.0760, 72.8777, "Financial capital of India and home of Bollywood"),
    City::new("Delhi", 28.6139, 77.2090, "National capital with Mughal monuments and busy bazaars"),
    City::new("Bangalore", 12.9716, 77.5946, "Garden city and hub of the Indian tech industry"),
    City::new("Chennai", 13.0827, 80.2707, "Gateway to South India on the Coromandel Coast"),
    City::new("Kolkata", 22.5726, 88.3639, "City of Joy and cultural capital of the east"),
    City::new("Hyderabad", 17.3850, 78.4867, "City of pearls, famous for biryani and the Charminar"),
    City::new("Pune", 18.5204, 73.8567, "Cultural capital of Maharashtra and education hub"),
    City::new("Jaipur", 26.9124, 75.7873, "The Pink City, capital of Rajasthan"),
    City::new("Ahmedabad", 23.0225, 72.5714, "Heritage city on the banks of the Sabarmati"),
    City::new("Goa", 15.2993, 74.1240, "Beach paradise with Portuguese heritage"),
    City::new("Kochi", 9.9312, 76.2673, "Queen of the Arabian Sea and old spice port"),
    City::new("Varanasi", 25.3176, 82.9739, "Spiritual city of ghats on the Ganges"),
];
