//! # Userbase Service
//!
//! Business logic service layer for Userbase.
//! Holds the five user record operations and their request/response DTOs.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
