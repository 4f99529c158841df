//! # Userbase Server Library
//!
//! Wiring and startup utilities for the Userbase server binary.

pub mod app;
pub mod startup;
