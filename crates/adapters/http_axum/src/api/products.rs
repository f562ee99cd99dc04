//! JSON REST handlers for products.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use catalog_app::ports::ProductRepository;
use catalog_domain::error::{CatalogError, ValidationError};
use catalog_domain::id::ProductId;
use catalog_domain::product::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a product.
///
/// There is deliberately no `id` field: on create the server assigns one, and
/// on update the path segment wins. Any id the caller sends in the body is
/// ignored.
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Query parameters for the list endpoint. `name` is required; requests
/// without it are rejected by the extractor before the handler runs.
#[derive(Deserialize)]
pub struct ListQuery {
    pub name: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<ProductId, ApiError> {
    ProductId::from_str(id).map_err(|_| ApiError::from(CatalogError::from(ValidationError::InvalidId)))
}

/// `POST /products`
///
/// Assigns a fresh random id and echoes the stored record back, id included.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<ProductRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let mut builder = Product::builder().name(req.name).price(req.price);
    if let Some(description) = req.description {
        builder = builder.description(description);
    }

    let product = builder.build()?;
    let created = state.product_service.create_product(product).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /products/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `GET /products?name=X`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let products = state.product_service.search_by_name(query.name).await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `PUT /products/{id}`
///
/// Full replace. The path id overrides whatever the body carries; a miss is
/// 404, never a silent insert.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;

    let mut builder = Product::builder()
        .id(product_id)
        .name(req.name)
        .price(req.price);
    if let Some(description) = req.description {
        builder = builder.description(description);
    }

    let product = builder.build()?;
    state.product_service.update_product(product).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /products/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(&id)?;
    state.product_service.delete_product(product_id).await?;
    Ok(DeleteResponse::NoContent)
}
