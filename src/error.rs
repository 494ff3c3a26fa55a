//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the network, decode and configuration layers.
///
/// The response cache itself never fails; every variant here comes from
/// the code around it.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("failed to fetch: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// The payload was fetched but could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
