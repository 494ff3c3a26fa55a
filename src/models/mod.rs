//! Response models for the catalog API
//!
//! Serde DTOs for the PokeAPI payloads the REPL decodes. Only the fields the
//! commands use are declared; everything else in a payload is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
