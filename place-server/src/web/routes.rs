//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::cache::ClearOutcome;
use crate::config::Settings;
use crate::domain::{Coordinates, DomainError, TravelMode};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", get(search))
        .route("/api/nearby", get(nearby))
        .route("/api/route", get(route))
        .route("/api/cache/clear", post(clear_cache))
        .route("/api/categories", get(categories))
        .route("/api/settings", get(settings))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search places by free text.
async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<PlacesResponse> {
    let places = state.engine.search(&req.q).await;
    Json(PlacesResponse { places })
}

/// Places of a category around a point.
async fn nearby(
    State(state): State<AppState>,
    query: Result<Query<NearbyRequest>, QueryRejection>,
) -> Result<Json<PlacesResponse>, AppError> {
    let Query(req) = query?;
    let center = Coordinates::new(req.lat, req.lng)?;
    let places = state.engine.nearby_places(center, &req.category);
    Ok(Json(PlacesResponse { places }))
}

/// Route between two points.
async fn route(
    State(state): State<AppState>,
    query: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Json<RouteResult>, AppError> {
    let Query(req) = query?;
    let start = Coordinates::new(req.from_lat, req.from_lng)?;
    let end = Coordinates::new(req.to_lat, req.to_lng)?;
    let mode = match req.mode.as_deref() {
        Some(mode) => mode.parse()?,
        None => TravelMode::default(),
    };

    let route = state.engine.route(start, end, mode).await;
    Ok(Json(RouteResult { route }))
}

/// Clear cached searches. Problems are reported, not raised.
async fn clear_cache(State(state): State<AppState>) -> Json<ClearOutcome> {
    Json(state.engine.clear_cache().await)
}

/// Static category list.
async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.engine.categories(),
    })
}

/// Read-only settings.
async fn settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.engine.settings().await)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
