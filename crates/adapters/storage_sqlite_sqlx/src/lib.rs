//! # catalog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `catalog-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows — an explicit column-to-field
//!   mapping, built at startup, with no reflection anywhere
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for the port trait) and `catalog-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod pool;
pub mod product_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
