//! Product service — use-cases for managing catalog records.

use catalog_domain::error::{CatalogError, NotFoundError};
use catalog_domain::id::ProductId;
use catalog_domain::product::Product;

use crate::ports::ProductRepository;

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new product after validating domain invariants.
    ///
    /// The product's id is expected to be freshly assigned by the caller;
    /// the store treats the write as an upsert either way.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail, or a storage
    /// error propagated from the repository.
    pub async fn create_product(&self, product: Product) -> Result<Product, CatalogError> {
        product.validate()?;
        tracing::debug!(id = %product.id, name = %product.name, "creating product");
        self.repo.save(product).await
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Product",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all products whose name matches exactly.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn search_by_name(&self, name: String) -> Result<Vec<Product>, CatalogError> {
        self.repo.find_by_name(name).await
    }

    /// Replace an existing product in full.
    ///
    /// Writes to an id that does not exist are rejected rather than silently
    /// inserted, so an update can never create a row.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail,
    /// [`CatalogError::NotFound`] when no product with the given id exists,
    /// or a storage error from the repository.
    pub async fn update_product(&self, product: Product) -> Result<Product, CatalogError> {
        product.validate()?;
        if self.repo.find_by_id(product.id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Product",
                id: product.id.to_string(),
            }
            .into());
        }
        tracing::debug!(id = %product.id, "replacing product");
        self.repo.save(product).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the id matches nothing (the
    /// store's contract — deleting twice errors on the second call), or a
    /// storage error from the repository.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        tracing::debug!(id = %id, "deleting product");
        self.repo.delete_by_id(id).await
    }
}
