//! # Userbase REST
//!
//! REST API layer using Axum for Userbase.
//! Provides HTTP endpoints for user records and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
