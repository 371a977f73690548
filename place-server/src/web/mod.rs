//! Web layer for the place resolver.
//!
//! Thin JSON endpoints over the resolution engine. Rendering is the
//! client's job; this layer only emits typed places and routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
