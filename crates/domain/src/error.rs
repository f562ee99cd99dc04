//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatalogError`]
//! via `#[from]` or an explicit `From` impl. The HTTP adapter maps the three
//! variants onto status codes in one place.

/// Top-level error type shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A record was looked up by id and does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed. The source error is adapter-specific.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// `name` must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// `name` exceeds [`crate::product::MAX_NAME_LEN`] characters.
    #[error("name must be at most {} characters", crate::product::MAX_NAME_LEN)]
    NameTooLong,

    /// `description` exceeds [`crate::product::MAX_DESCRIPTION_LEN`] characters.
    #[error(
        "description must be at most {} characters",
        crate::product::MAX_DESCRIPTION_LEN
    )]
    DescriptionTooLong,

    /// `price` is negative.
    #[error("price must not be negative")]
    NegativePrice,

    /// A textual id could not be parsed as a product identifier.
    #[error("malformed product id")]
    InvalidId,
}

/// A lookup by id matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// The kind of record that was looked up.
    pub entity: &'static str,
    /// The id that matched nothing.
    pub id: String,
}
