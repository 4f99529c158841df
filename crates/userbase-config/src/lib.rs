//! # Userbase Config
//!
//! Configuration management for Userbase.
//! Supports layered configuration from built-in defaults, TOML files and
//! environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
