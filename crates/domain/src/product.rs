//! Product — the catalog record exposed over the HTTP API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ValidationError};
use crate::id::ProductId;

/// Maximum length of `name`, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of `description`, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// A single catalog record.
///
/// `price` is an exact decimal, never a binary float. It serializes as a
/// decimal string (`"3500.00"`) and deserializes from either a JSON number
/// or a string, keeping scale intact end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when `name` is empty or too long,
    /// `description` is too long, or `price` is negative.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong.into());
        }
        if self
            .description
            .as_ref()
            .is_some_and(|description| description.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(ValidationError::DescriptionTooLong.into());
        }
        if self.price.is_sign_negative() {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Product`].
///
/// When no id is supplied, `build` assigns a fresh random one. This is how
/// create paths mint identifiers; update paths set the id explicitly.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Product, CatalogError> {
        let product = Product {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            price: self.price.unwrap_or_default(),
        };
        product.validate()?;
        Ok(product)
    }
}
