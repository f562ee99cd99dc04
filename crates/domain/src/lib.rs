//! # catalog-domain
//!
//! Pure domain model for the catalog service.
//!
//! ## Responsibilities
//! - Foundational types: the typed product identifier and error conventions
//! - Define the **Product** record and its invariants
//! - Contain all invariant enforcement (name/description bounds, price sign)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod product;
