//! # catalog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API under `/products`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! The route table is assembled explicitly at startup in [`router::build`] —
//! there is no annotation scanning or runtime discovery of handlers.
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for the port trait and service) and
//! `catalog-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
