//! Startup configuration and application wiring.

pub mod app;
pub mod config;

pub use app::*;
pub use config::*;
