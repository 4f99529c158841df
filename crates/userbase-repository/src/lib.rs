//! # Userbase Repository
//!
//! Data access for the user store:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! PgUserRepository              (SQLx / PostgreSQL)
//!   ↓  Arc<DatabasePool>
//! PostgreSQL
//! ```
//!
//! Every read filters out soft-deleted rows. The table layout lives in
//! `sql/schema.sql`.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
