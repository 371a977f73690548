//! Place resolution server.
//!
//! Turns free-text queries into typed places and point pairs into route
//! estimates, biased towards one country. Live answers come from an
//! OpenStreetMap-style geocoder and an OSRM-style router; when those are
//! slow, down, or switched off, a deterministic offline gazetteer answers
//! instead so callers always get a usable result.

pub mod bias;
pub mod cache;
pub mod config;
pub mod domain;
pub mod engine;
pub mod offline;
pub mod provider;
pub mod rank;
pub mod web;
