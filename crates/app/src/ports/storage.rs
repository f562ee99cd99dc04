//! Storage port — the record store trait for product persistence.

use std::future::Future;

use catalog_domain::error::CatalogError;
use catalog_domain::id::ProductId;
use catalog_domain::product::Product;

/// Repository for persisting and querying [`Product`]s.
///
/// The contract is deliberately small: an upsert, two lookups, and a delete.
/// `save` does not distinguish insert from replace; callers that need to
/// reject writes to absent rows check existence first.
pub trait ProductRepository {
    /// Insert the product when its id is absent from storage, replace the
    /// full row when it is present.
    fn save(&self, product: Product) -> impl Future<Output = Result<Product, CatalogError>> + Send;

    /// Get a product by its unique identifier. Absence is `None`, never an
    /// error.
    fn find_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, CatalogError>> + Send;

    /// Get all products whose name matches exactly (case-sensitive,
    /// full-string equality). Returns an empty vec when nothing matches, in
    /// no guaranteed order.
    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// Remove the row. Fails with [`CatalogError::NotFound`] when no row has
    /// that id — the only error condition the store defines beyond storage
    /// faults.
    fn delete_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;
}
