//! # catalog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - [`ports::ProductRepository`] — upsert, lookup by id, exact-match
//!     lookup by name, delete by id
//! - Provide the use-case layer:
//!   - [`services::product_service::ProductService`] — create, get, search,
//!     update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `catalog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
