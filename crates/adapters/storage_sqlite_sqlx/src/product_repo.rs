//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;
use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use catalog_app::ports::ProductRepository;
use catalog_domain::error::{CatalogError, NotFoundError};
use catalog_domain::id::ProductId;
use catalog_domain::product::Product;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Product`]s.
struct Wrapper(Product);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Product> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: Option<String> = row.try_get("description")?;
        let price: String = row.try_get("price")?;

        let id = ProductId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let price = Decimal::from_str(&price).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Product {
            id,
            name,
            description,
            price,
        }))
    }
}

const UPSERT: &str = "INSERT INTO products (id, name, description, price) VALUES (?, ?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name, description = excluded.description, \
     price = excluded.price";
const SELECT_BY_ID: &str = "SELECT * FROM products WHERE id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM products WHERE name = ?";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?";

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn save(&self, product: Product) -> impl Future<Output = Result<Product, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(product.id.to_string())
                .bind(&product.name)
                .bind(product.description.as_deref())
                .bind(product.price.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(product)
        }
    }

    fn find_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Product",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(())
        }
    }
}
