//! Target region definition.

use super::Coordinates;

/// Axis-aligned lat/lng rectangle. Containment is inclusive on all edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl RegionBounds {
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat())
            && (self.min_lng..=self.max_lng).contains(&point.lng())
    }
}

/// The region results are biased toward.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Display name, appended to queries as a qualifier.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code passed to the geocoder.
    pub country_code: &'static str,
    pub bounds: RegionBounds,
    /// Lower-cased city names that already anchor a query to the region.
    pub known_cities: &'static [&'static str],
}

/// India, the region this server is built for.
pub const INDIA: Region = Region {
    name: "India",
    country_code: "in",
    bounds: RegionBounds {
        min_lat: 6.5,
        max_lat: 35.7,
        min_lng: 68.1,
        max_lng: 97.4,
    },
    known_cities: &[
        "mumbai",
        "bombay",
        "delhi",
        "new delhi",
        "bangalore",
        "bengaluru",
        "chennai",
        "madras",
        "kolkata",
        "calcutta",
        "hyderabad",
        "pune",
        "ahmedabad",
        "jaipur",
        "goa",
        "kochi",
        "cochin",
        "varanasi",
        "lucknow",
        "agra",
        "chandigarh",
        "surat",
        "indore",
        "bhopal",
        "nagpur",
        "mysore",
        "udaipur",
        "amritsar",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn india_contains_major_cities() {
        assert!(INDIA.bounds.contains(at(19.076, 72.8777))); // Mumbai
        assert!(INDIA.bounds.contains(at(28.6139, 77.209))); // Delhi
        assert!(INDIA.bounds.contains(at(8.5241, 76.9366))); // Thiruvananthapuram
    }

    #[test]
    fn india_excludes_elsewhere() {
        assert!(!INDIA.bounds.contains(at(51.5074, -0.1278))); // London
        assert!(!INDIA.bounds.contains(at(0.0, 0.0)));
        assert!(!INDIA.bounds.contains(at(-33.8688, 151.2093))); // Sydney
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(INDIA.bounds.contains(at(6.5, 68.1)));
        assert!(INDIA.bounds.contains(at(35.7, 97.4)));
    }

    #[test]
    fn known_cities_are_lowercase() {
        for city in INDIA.known_cities {
            assert_eq!(*city, city.to_lowercase());
        }
    }
}
