//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the REPL is open.
//!
//! # Tasks
//! - TTL Sweep: Removes expired response cache entries once per TTL

mod sweep;

pub use sweep::spawn_sweep_task;
