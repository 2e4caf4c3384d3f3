//! # Reserva Config
//!
//! Configuration management for the Reserva data-access layer.
//! Supports layered configuration from files, environment variables,
//! and runtime refresh.

mod app_config;
mod loader;
mod logging;

pub use app_config::*;
pub use loader::*;
pub use logging::*;
