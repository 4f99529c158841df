//! Domain entities for Userbase.

pub mod entities;

pub use entities::*;
