//! Region biasing for free-text queries.
//!
//! A general-purpose geocoder ranks matches worldwide; appending the region
//! name steers it toward local results. Queries that already mention a known
//! city or the country are left alone.

use crate::domain::Region;

/// Queries at or below this many characters are never qualified.
const MIN_BIASED_LEN: usize = 2;

/// Append `", <region>"` unless the query is already anchored to the region.
///
/// # Examples
///
/// ```
/// use place_server::bias::build_biased_query;
/// use place_server::domain::INDIA;
///
/// assert_eq!(build_biased_query("Gateway of India", &INDIA), "Gateway of India");
/// assert_eq!(build_biased_query("Marine Drive Mumbai", &INDIA), "Marine Drive Mumbai");
/// assert_eq!(build_biased_query("Red Fort", &INDIA), "Red Fort, India");
/// assert_eq!(build_biased_query("MG", &INDIA), "MG");
/// ```
pub fn build_biased_query(query: &str, region: &Region) -> String {
    let lower = query.to_lowercase();

    let names_city = region.known_cities.iter().any(|city| lower.contains(city));
    let names_country = lower.contains(&region.name.to_lowercase());
    let too_short = query.chars().count() <= MIN_BIASED_LEN;

    if names_city || names_country || too_short {
        query.to_string()
    } else {
        format!("{query}, {}", region.name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::INDIA;
    use proptest::prelude::*;

    fn known_city() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(INDIA.known_cities)
    }

    proptest! {
        /// A query containing a known city, in any case, is returned unchanged
        #[test]
        fn city_queries_unchanged(
            prefix in "[a-z ]{0,10}",
            city in known_city(),
            suffix in "[a-z ]{0,10}",
            upper in any::<bool>(),
        ) {
            let city = if upper { city.to_uppercase() } else { city.to_string() };
            let q = format!("{prefix}{city}{suffix}");
            prop_assert_eq!(build_biased_query(&q, &INDIA), q);
        }

        /// Digit-only queries carry no region marker, so longer ones get qualified
        #[test]
        fn unmarked_queries_qualified(q in "[0-9]{3,12}") {
            prop_assert_eq!(build_biased_query(&q, &INDIA), format!("{q}, India"));
        }
    }
}
