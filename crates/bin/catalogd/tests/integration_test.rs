//! End-to-end smoke tests for the full catalogd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repository, real service, real axum router) and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use catalog_adapter_http_axum::router;
use catalog_adapter_http_axum::state::AppState;
use catalog_adapter_storage_sqlite_sqlx::{Config, SqliteProductRepository};
use catalog_app::services::product_service::ProductService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let product_repo = SqliteProductRepository::new(db.pool().clone());
    let state = AppState::new(ProductService::new(product_repo));

    router::build(state)
}

async fn read_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn post_product(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_product_and_assign_id() {
    let resp = app()
        .await
        .oneshot(post_product(
            r#"{"name":"Notebook","description":"Dell Inspiron 15","price":"3500.00"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "Notebook");
    assert_eq!(body["description"], "Dell Inspiron 15");
    assert_eq!(body["price"], "3500.00");
}

#[tokio::test]
async fn should_ignore_caller_sent_id_on_create() {
    let resp = app()
        .await
        .oneshot(post_product(
            r#"{"id":"11111111-1111-1111-1111-111111111111","name":"Mouse","price":"49.90"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_ne!(body["id"], "11111111-1111-1111-1111-111111111111");
}

#[tokio::test]
async fn should_accept_price_sent_as_json_number() {
    let resp = app()
        .await
        .oneshot(post_product(r#"{"name":"Mouse","price":49.9}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["price"], "49.9");
}

#[tokio::test]
async fn should_reject_create_with_empty_name() {
    let resp = app()
        .await
        .oneshot(post_product(r#"{"name":"","price":"1.00"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_create_with_negative_price() {
    let resp = app()
        .await
        .oneshot(post_product(r#"{"name":"Mouse","price":"-1.00"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_get_identical_record_after_create() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post_product(
            r#"{"name":"Notebook","description":"Dell Inspiron 15","price":"3500.00"}"#,
        ))
        .await
        .unwrap();
    let created = read_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = read_json(resp).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_return_not_found_when_getting_unknown_id() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/products/00000000-0000-4000-8000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn should_return_bad_request_when_id_is_malformed() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/products/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// List by name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_exact_name_matches_only() {
    let app = app().await;

    for body in [
        r#"{"name":"Notebook","description":"Dell Inspiron 15","price":"3500.00"}"#,
        r#"{"name":"Notebook","description":"Lenovo ThinkPad","price":"4100.00"}"#,
        r#"{"name":"Mouse","price":"49.90"}"#,
    ] {
        let resp = app.clone().oneshot(post_product(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/products?name=Notebook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|product| product["name"] == "Notebook"));
}

#[tokio::test]
async fn should_return_empty_array_when_no_name_matches() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/products?name=Keyboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_return_bad_request_when_name_query_missing() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_replace_all_fields_on_update() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post_product(
            r#"{"name":"Notebook","description":"Dell Inspiron 15","price":"3500.00"}"#,
        ))
        .await
        .unwrap();
    let created = read_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/products/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"Notebook Pro","price":"4200.50"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // No merge of old and new: description is gone, not carried over.
    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let fetched = read_json(resp).await;
    assert_eq!(fetched["id"].as_str().unwrap(), id);
    assert_eq!(fetched["name"], "Notebook Pro");
    assert_eq!(fetched["description"], serde_json::Value::Null);
    assert_eq!(fetched["price"], "4200.50");
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_id() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/products/00000000-0000-4000-8000-000000000000")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"Ghost","price":"1.00"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_error_on_second_delete_of_same_id() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post_product(r#"{"name":"Mouse","price":"49.90"}"#))
        .await
        .unwrap();
    let created = read_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_product_crud_cycle() {
    let app = app().await;

    // Create
    let resp = app
        .clone()
        .oneshot(post_product(
            r#"{"name":"Notebook","description":"Dell Inspiron 15","price":"3500.00"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Get
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Update
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/products/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Notebook","description":"Dell Inspiron 16","price":"3999.00"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Get reflects the update
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let fetched = read_json(resp).await;
    assert_eq!(fetched["description"], "Dell Inspiron 16");
    assert_eq!(fetched["price"], "3999.00");

    // Delete
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone — no orphaned state
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/products?name=Notebook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = read_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
