//! Geocoding and routing HTTP client.
//!
//! Every call runs under a hard time budget. When the budget runs out the
//! in-flight request future is dropped, which closes its connection, and the
//! call reports [`ProviderUnavailable::Timeout`]. There are no retries; the
//! caller decides what to fall back to.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::domain::{Coordinates, INDIA, Region, RouteEstimate, TravelMode};

use super::PlaceGateway;
use super::convert::{Candidate, convert_geocode_items, convert_route};
use super::error::ProviderUnavailable;
use super::types::{GeocodeItem, RouteResponse};

/// Default geocoder (Nominatim).
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default router (OSRM).
const DEFAULT_ROUTER_URL: &str = "https://router.project-osrm.org";

/// Budget for a geocoder search.
const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Budget for a route request.
const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(4);

/// Geocoder result limit.
const DEFAULT_RESULT_LIMIT: u8 = 10;

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the geocoder
    pub geocoder_url: String,
    /// Base URL of the router
    pub router_url: String,
    /// Time budget for `search_places`
    pub search_timeout: Duration,
    /// Time budget for `get_route`
    pub route_timeout: Duration,
    /// Results requested from the geocoder
    pub result_limit: u8,
    /// `accept-language` sent to the geocoder
    pub language: String,
    /// User agent (public Nominatim rejects anonymous clients)
    pub user_agent: String,
    /// Region searches are restricted to
    pub region: Region,
}

impl ProviderConfig {
    /// Set a custom geocoder base URL (for testing).
    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    /// Set a custom router base URL (for testing).
    pub fn with_router_url(mut self, url: impl Into<String>) -> Self {
        self.router_url = url.into();
        self
    }

    /// Set the search time budget.
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Set the route time budget.
    pub fn with_route_timeout(mut self, timeout: Duration) -> Self {
        self.route_timeout = timeout;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            router_url: DEFAULT_ROUTER_URL.to_string(),
            search_timeout: DEFAULT_SEARCH_TIMEOUT,
            route_timeout: DEFAULT_ROUTE_TIMEOUT,
            result_limit: DEFAULT_RESULT_LIMIT,
            language: "en".to_string(),
            user_agent: concat!("place-server/", env!("CARGO_PKG_VERSION")).to_string(),
            region: INDIA,
        }
    }
}

/// Live geocoding and routing client.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderUnavailable> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.route_timeout.max(config.search_timeout))
            .build()?;

        Ok(Self { http, config })
    }

    /// Send a request and read the full body within `budget`.
    async fn fetch(
        &self,
        request: reqwest::RequestBuilder,
        budget: Duration,
    ) -> Result<(StatusCode, String), ProviderUnavailable> {
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        match tokio::time::timeout(budget, exchange).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ProviderUnavailable::Timeout(budget)),
        }
    }
}

impl PlaceGateway for ProviderClient {
    async fn search_places(&self, biased_query: &str) -> Result<Vec<Candidate>, ProviderUnavailable> {
        let url = format!("{}/search", self.config.geocoder_url.trim_end_matches('/'));
        let limit = self.config.result_limit.to_string();

        let request = self.http.get(&url).query(&[
            ("q", biased_query),
            ("format", "json"),
            ("limit", limit.as_str()),
            ("addressdetails", "1"),
            ("countrycodes", self.config.region.country_code),
            ("accept-language", self.config.language.as_str()),
        ]);

        let (status, body) = self.fetch(request, self.config.search_timeout).await?;

        if !status.is_success() {
            return Err(ProviderUnavailable::Status {
                status: status.as_u16(),
                body,
            });
        }

        let items: Vec<GeocodeItem> =
            serde_json::from_str(&body).map_err(|e| ProviderUnavailable::malformed(e, &body))?;

        let candidates = convert_geocode_items(&items, &self.config.region)
            .map_err(|e| ProviderUnavailable::malformed(e, &body))?;

        debug!(query = biased_query, results = candidates.len(), "geocoder answered");
        Ok(candidates)
    }

    async fn get_route(
        &self,
        start: Coordinates,
        end: Coordinates,
        mode: TravelMode,
    ) -> Result<Option<RouteEstimate>, ProviderUnavailable> {
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.config.router_url.trim_end_matches('/'),
            mode.as_str(),
            start.lng(),
            start.lat(),
            end.lng(),
            end.lat()
        );

        let request = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")]);

        let (status, body) = self.fetch(request, self.config.route_timeout).await?;

        // OSRM answers "no route between these points" with a 400.
        let parsed = serde_json::from_str::<RouteResponse>(&body);
        if !status.is_success() {
            if let Ok(resp) = &parsed
                && resp.code.as_deref() == Some("NoRoute")
            {
                return Ok(None);
            }
            return Err(ProviderUnavailable::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response = parsed.map_err(|e| ProviderUnavailable::malformed(e, &body))?;
        convert_route(&response, mode).map_err(|e| ProviderUnavailable::malformed(e, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProviderClient {
        let config = ProviderConfig::default()
            .with_geocoder_url(server.uri())
            .with_router_url(server.uri())
            .with_search_timeout(Duration::from_millis(300))
            .with_route_timeout(Duration::from_millis(300));
        ProviderClient::new(config).unwrap()
    }

    fn at(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert_eq!(config.router_url, DEFAULT_ROUTER_URL);
        assert_eq!(config.search_timeout, Duration::from_secs(2));
        assert_eq!(config.route_timeout, Duration::from_secs(4));
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.language, "en");
        assert_eq!(config.region.country_code, "in");
    }

    #[test]
    fn config_builder() {
        let config = ProviderConfig::default()
            .with_geocoder_url("http://localhost:8080")
            .with_router_url("http://localhost:5000")
            .with_search_timeout(Duration::from_millis(100))
            .with_route_timeout(Duration::from_millis(200));

        assert_eq!(config.geocoder_url, "http://localhost:8080");
        assert_eq!(config.router_url, "http://localhost:5000");
        assert_eq!(config.search_timeout, Duration::from_millis(100));
        assert_eq!(config.route_timeout, Duration::from_millis(200));
    }

    #[tokio::test]
    async fn search_sends_region_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Red Fort, India"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "10"))
            .and(query_param("addressdetails", "1"))
            .and(query_param("countrycodes", "in"))
            .and(query_param("accept-language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"display_name": "Red Fort, Netaji Subhash Marg, Chandni Chowk, Delhi, India",
                     "lat": "28.6562", "lon": "77.2410", "class": "tourism", "type": "attraction",
                     "address": {"city": "Delhi", "state": "Delhi"}}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let candidates = client_for(&server).search_places("Red Fort, India").await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].in_region);
        assert_eq!(candidates[0].place.name(), "Red Fort, Delhi");
        assert_eq!(candidates[0].place.kind(), "attraction");
    }

    #[tokio::test]
    async fn search_timeout_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("[]")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).search_places("anything").await;
        assert!(matches!(result, Err(ProviderUnavailable::Timeout(_))));
    }

    #[tokio::test]
    async fn search_non_array_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error": "nope"}"#))
            .mount(&server)
            .await;

        let result = client_for(&server).search_places("anything").await;
        assert!(matches!(result, Err(ProviderUnavailable::Malformed { .. })));
    }

    #[tokio::test]
    async fn search_bad_item_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"display_name": "Ok", "lat": "19.0", "lon": "72.8"},
                    {"display_name": "Bad", "lat": "far away", "lon": "72.8"}]"#,
            ))
            .mount(&server)
            .await;

        let result = client_for(&server).search_places("anything").await;
        assert!(matches!(result, Err(ProviderUnavailable::Malformed { .. })));
    }

    #[tokio::test]
    async fn search_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let result = client_for(&server).search_places("anything").await;
        assert!(matches!(
            result,
            Err(ProviderUnavailable::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn search_connection_refused_is_transport() {
        // Nothing listens on port 1.
        let config = ProviderConfig::default().with_geocoder_url("http://127.0.0.1:1");
        let client = ProviderClient::new(config).unwrap();

        let result = client.search_places("anything").await;
        assert!(matches!(result, Err(ProviderUnavailable::Transport(_))));
    }

    #[tokio::test]
    async fn route_parses_first_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/walking/72.8347,18.922;72.8777,19.076"))
            .and(query_param("geometries", "geojson"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"code": "Ok", "routes": [{"distance": 18000.0, "duration": 13500.0,
                    "geometry": {"type": "LineString", "coordinates": [[72.8347, 18.922], [72.8777, 19.076]]}}]}"#,
            ))
            .mount(&server)
            .await;

        let route = client_for(&server)
            .get_route(at(18.922, 72.8347), at(19.076, 72.8777), TravelMode::Walking)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(route.distance_km, 18.0);
        assert_eq!(route.duration_minutes, 225);
        assert_eq!(route.mode, TravelMode::Walking);
        assert_eq!(route.geometry, vec![[72.8347, 18.922], [72.8777, 19.076]]);
    }

    #[tokio::test]
    async fn route_zero_routes_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code": "Ok", "routes": []}"#))
            .mount(&server)
            .await;

        let route = client_for(&server)
            .get_route(at(18.9, 72.8), at(19.0, 72.9), TravelMode::Driving)
            .await
            .unwrap();
        assert!(route.is_none());
    }

    #[tokio::test]
    async fn route_no_route_code_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
            ))
            .mount(&server)
            .await;

        let route = client_for(&server)
            .get_route(at(18.9, 72.8), at(6.9, 79.8), TravelMode::Driving)
            .await
            .unwrap();
        assert!(route.is_none());
    }

    #[tokio::test]
    async fn route_timeout_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/route/v1/.*"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .get_route(at(18.9, 72.8), at(19.0, 72.9), TravelMode::Cycling)
            .await;
        assert!(matches!(result, Err(ProviderUnavailable::Timeout(_))));
    }

    #[tokio::test]
    async fn route_garbage_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/route/v1/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .get_route(at(18.9, 72.8), at(19.0, 72.9), TravelMode::Driving)
            .await;
        assert!(matches!(result, Err(ProviderUnavailable::Malformed { .. })));
    }
}
