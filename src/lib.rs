//! Pokedex - An interactive catalog browser
//!
//! Browses PokeAPI location areas, catches Pokemon into a local collection,
//! and keeps recent API responses in a TTL cache swept in the background.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::ReplContext;
