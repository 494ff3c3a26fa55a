//! API Module
//!
//! HTTP access to the catalog API, routed through the response cache.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
