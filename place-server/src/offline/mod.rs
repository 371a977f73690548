//! Offline fallback data.
//!
//! Deterministic, network-free answers used whenever the live provider is
//! unavailable or offline mode is on: a small gazetteer of major Indian
//! cities, generated nearby places, and a straight-line route estimate.
//!
//! Coordinate jitter and ratings are cosmetic. They come from a seedable
//! generator so tests can pin them down; production seeds from entropy.

mod cities;
mod geometry;
mod nearby;

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::{Coordinates, DEFAULT_KIND, Place, PlaceCategory, RouteEstimate, TravelMode};

pub use cities::{CITIES, City};
pub use geometry::haversine_km;

/// Maximum results from a gazetteer search.
const MAX_SEARCH_RESULTS: usize = 8;

/// Results returned when nothing in the gazetteer matches.
const NO_MATCH_RESULTS: usize = 4;

/// Places generated per nearby search.
const NEARBY_COUNT: usize = 8;

/// Maximum jitter per axis, in degrees.
const JITTER_DEG: f64 = 0.005;

/// Offline data source.
pub struct OfflineSource {
    rng: Mutex<StdRng>,
}

impl Default for OfflineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineSource {
    /// Create a source seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a source with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run `f` with the generator. A poisoned lock is still usable: the
    /// generator has no invariants a panic could break.
    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }

    fn jitter(&self, point: Coordinates) -> Coordinates {
        self.with_rng(|rng| {
            point.offset(
                rng.gen_range(-JITTER_DEG..=JITTER_DEG),
                rng.gen_range(-JITTER_DEG..=JITTER_DEG),
            )
        })
    }

    /// Search the gazetteer.
    ///
    /// Cities whose name contains the query come first, then cities whose
    /// description contains it, capped at 8. An empty query lists the first
    /// 8 cities; a query matching nothing yields the first 4.
    pub fn fallback_search(&self, query: &str) -> Vec<Place> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return places(CITIES.iter().take(MAX_SEARCH_RESULTS));
        }

        let (exact, rest): (Vec<&City>, Vec<&City>) = CITIES
            .iter()
            .partition(|c| c.name.to_lowercase().contains(&query));
        let partial = rest
            .into_iter()
            .filter(|c| c.description.to_lowercase().contains(&query));

        let matched = places(exact.into_iter().chain(partial).take(MAX_SEARCH_RESULTS));
        if matched.is_empty() {
            return places(CITIES.iter().take(NO_MATCH_RESULTS));
        }
        matched
    }

    /// Generate 8 plausible places of a category around a point.
    ///
    /// Unknown categories get a generic "Local Place" template.
    pub fn fallback_nearby_places(&self, center: Coordinates, category: &str) -> Vec<Place> {
        let known = PlaceCategory::find(category);
        let template = nearby::template_for(known.map_or("", |c| c.id));
        let kind = known.map_or(DEFAULT_KIND, |c| c.id);
        let label = known.map_or("Other", |c| c.display_name);

        (0..NEARBY_COUNT)
            .map(|i| {
                let name = template.names[i % template.names.len()];
                let description = template.descriptions[i % template.descriptions.len()];
                let coordinates = self.jitter(center);
                let (address, rating) = self.with_rng(|rng| (synth_address(rng), synth_rating(rng)));

                Place::new(name, coordinates, kind)
                    .with_description(description)
                    .with_address(address)
                    .with_rating(rating)
                    .with_category(label)
            })
            .collect()
    }

    /// Straight-line route estimate.
    ///
    /// Distance is the haversine distance; duration assumes an average speed
    /// per mode (with a congestion factor for driving). The geometry is
    /// start, a jittered midpoint and end.
    pub fn fallback_route(
        &self,
        start: Coordinates,
        end: Coordinates,
        mode: TravelMode,
    ) -> RouteEstimate {
        let distance_km = haversine_km(start, end);
        let minutes = distance_km / mode.average_speed_kmh() * 60.0 * mode.traffic_factor();
        let midpoint = self.jitter(start.midpoint(&end));

        RouteEstimate {
            distance_km,
            duration_minutes: minutes.round() as u32,
            geometry: vec![start.lng_lat(), midpoint.lng_lat(), end.lng_lat()],
            mode,
        }
    }
}

fn places<'a>(cities: impl IntoIterator<Item = &'a City>) -> Vec<Place> {
    cities.into_iter().filter_map(City::to_place).collect()
}

fn synth_address(rng: &mut StdRng) -> String {
    let number: u16 = rng.gen_range(1..=250);
    let street = nearby::STREETS.choose(rng).copied().unwrap_or("Main Road");
    let area = nearby::AREAS.choose(rng).copied().unwrap_or("City Centre");
    format!("{number}, {street}, {area}")
}

/// Rating in [3.0, 5.0], one decimal place.
fn synth_rating(rng: &mut StdRng) -> f32 {
    let raw: f64 = rng.gen_range(3.0..=5.0);
    ((raw * 10.0).round() / 10.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(Place::name).collect()
    }

    #[test]
    fn empty_query_lists_first_eight_in_order() {
        let source = OfflineSource::with_seed(1);
        let expected: Vec<&str> = CITIES.iter().take(8).map(|c| c.name).collect();

        assert_eq!(names(&source.fallback_search("")), expected);
        assert_eq!(names(&source.fallback_search("   ")), expected);
    }

    #[test]
    fn exact_name_match_first() {
        let source = OfflineSource::with_seed(1);
        let results = source.fallback_search("mumbai");
        assert_eq!(results[0].name(), "Mumbai");
        assert_eq!(results[0].kind(), "city");

        let results = source.fallback_search("MUMBAI");
        assert_eq!(results[0].name(), "Mumbai");
    }

    #[test]
    fn name_matches_precede_description_matches() {
        let source = OfflineSource::with_seed(1);
        // "pune" names Pune; nothing else mentions it.
        // "capital" appears only in descriptions.
        let results = source.fallback_search("capital");
        assert_eq!(
            names(&results),
            vec!["Mumbai", "Delhi", "Kolkata", "Pune", "Jaipur"]
        );

        // "del": Delhi by name ahead of Chennai ("Coromandel") by description.
        assert_eq!(names(&source.fallback_search("del")), vec!["Delhi", "Chennai"]);
    }

    #[test]
    fn city_in_both_sets_appears_once() {
        let source = OfflineSource::with_seed(1);
        // "goa" is Goa's name; no description repeats it.
        let results = source.fallback_search("Goa");
        assert_eq!(names(&results), vec!["Goa"]);

        // "a" matches most names; anything matched by name isn't repeated.
        let results = source.fallback_search("a");
        let mut seen = names(&results);
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert!(total <= 8);
    }

    #[test]
    fn no_match_returns_first_four() {
        let source = OfflineSource::with_seed(1);
        assert_eq!(
            names(&source.fallback_search("zzzz")),
            vec!["Mumbai", "Delhi", "Bangalore", "Chennai"]
        );
    }

    #[test]
    fn nearby_generates_eight_cycled_places() {
        let source = OfflineSource::with_seed(7);
        let center = at(19.0760, 72.8777);
        let places = source.fallback_nearby_places(center, "restaurant");
        let template = nearby::template_for("restaurant");

        assert_eq!(places.len(), 8);
        for (i, place) in places.iter().enumerate() {
            assert_eq!(place.name(), template.names[i % template.names.len()]);
            assert_eq!(
                place.description(),
                Some(template.descriptions[i % template.descriptions.len()])
            );
            assert_eq!(place.kind(), "restaurant");
            assert_eq!(place.category(), Some("Restaurants"));
        }
    }

    #[test]
    fn nearby_jitter_rating_and_address_in_range() {
        let source = OfflineSource::new();
        let center = at(12.9716, 77.5946);

        for place in source.fallback_nearby_places(center, "temple") {
            let c = place.coordinates();
            assert!((c.lat() - center.lat()).abs() <= JITTER_DEG + 1e-9);
            assert!((c.lng() - center.lng()).abs() <= JITTER_DEG + 1e-9);

            let rating = place.rating().unwrap();
            assert!((3.0..=5.0).contains(&rating), "rating {rating}");
            assert_eq!((rating * 10.0).round() / 10.0, rating);

            let address = place.address().unwrap();
            assert_eq!(address.split(", ").count(), 3, "address {address}");
        }
    }

    #[test]
    fn nearby_unknown_category_is_generic() {
        let source = OfflineSource::with_seed(3);
        let places = source.fallback_nearby_places(at(26.9, 75.8), "spaceport");

        assert_eq!(places.len(), 8);
        assert!(places.iter().all(|p| p.name() == "Local Place"));
        assert!(places.iter().all(|p| p.description() == Some("Point of Interest")));
        assert!(places.iter().all(|p| p.kind() == DEFAULT_KIND));
    }

    #[test]
    fn nearby_near_pole_stays_valid() {
        let source = OfflineSource::new();
        for place in source.fallback_nearby_places(at(90.0, 180.0), "park") {
            assert!(place.coordinates().lat() <= 90.0);
            assert!(place.coordinates().lng() <= 180.0);
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let a = OfflineSource::with_seed(42).fallback_nearby_places(at(19.0, 72.8), "cafe");
        let b = OfflineSource::with_seed(42).fallback_nearby_places(at(19.0, 72.8), "cafe");
        assert_eq!(a, b);
    }

    #[test]
    fn route_duration_by_mode() {
        let source = OfflineSource::with_seed(1);
        let start = at(0.0, 0.0);
        let end = at(0.0, 1.0);
        let distance = haversine_km(start, end);

        let driving = source.fallback_route(start, end, TravelMode::Driving);
        assert_eq!(
            driving.duration_minutes,
            (distance / 40.0 * 60.0 * 1.3).round() as u32
        );
        assert_eq!(driving.duration_minutes, 217);
        assert_eq!(driving.distance_km, distance);
        assert_eq!(driving.geometry.len(), 3);

        let walking = source.fallback_route(start, end, TravelMode::Walking);
        assert_eq!(walking.duration_minutes, (distance / 4.0 * 60.0).round() as u32);

        let cycling = source.fallback_route(start, end, TravelMode::Cycling);
        assert_eq!(cycling.duration_minutes, (distance / 12.0 * 60.0).round() as u32);
        assert_eq!(cycling.mode, TravelMode::Cycling);
    }

    #[test]
    fn route_geometry_is_start_mid_end() {
        let source = OfflineSource::new();
        let start = at(18.922, 72.8347);
        let end = at(19.076, 72.8777);
        let route = source.fallback_route(start, end, TravelMode::Walking);

        assert_eq!(route.geometry[0], [72.8347, 18.922]);
        assert_eq!(route.geometry[2], [72.8777, 19.076]);

        let [mid_lng, mid_lat] = route.geometry[1];
        assert!((mid_lng - (72.8347 + 72.8777) / 2.0).abs() <= JITTER_DEG + 1e-9);
        assert!((mid_lat - (18.922 + 19.076) / 2.0).abs() <= JITTER_DEG + 1e-9);
    }

    #[test]
    fn zero_length_route() {
        let source = OfflineSource::new();
        let p = at(25.3176, 82.9739);
        let route = source.fallback_route(p, p, TravelMode::Driving);
        assert_eq!(route.distance_km, 0.0);
        assert_eq!(route.duration_minutes, 0);
    }
}
