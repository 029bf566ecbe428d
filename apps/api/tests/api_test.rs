//! HTTP tests for the Stockroom API.
//!
//! Each test builds the full router over a fresh in-memory database and
//! drives it with `oneshot`, checking status codes and JSON bodies.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

use stockroom_api::error::INTERNAL_ERROR_MESSAGE;
use stockroom_api::{app, AppState};
use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig};

// =============================================================================
// Helpers
// =============================================================================

async fn setup() -> (Database, Router) {
    setup_with(false).await
}

async fn setup_with(expose_storage_errors: bool) -> (Database, Router) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let router = app(AppState::new(db.clone(), expose_storage_errors));
    (db, router)
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn product_with_stock(db: &Database, name: &str, stock: i64) -> i64 {
    let product = db
        .products()
        .create(&NewProduct::new(name, Some(10.0)))
        .await
        .unwrap();

    sqlx::query("UPDATE products SET stock = ?1 WHERE id = ?2")
        .bind(stock)
        .bind(product.id)
        .execute(db.pool())
        .await
        .unwrap();

    product.id
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_list_products_empty() {
    let (_, router) = setup().await;

    let (status, body) = send(&router, "GET", "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "products": [], "count": 0 }));
}

#[tokio::test]
async fn test_create_product_returns_201() {
    let (_, router) = setup().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/products",
        Some(json!({ "name": "Yerba mate", "price": 12.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["product"]["name"], json!("Yerba mate"));
    assert_eq!(body["product"]["price"], json!(12.5));
    assert!(body["product"]["id"].as_i64().unwrap() > 0);

    let (_, list) = send(&router, "GET", "/api/v1/products", None).await;
    assert_eq!(list["count"], json!(1));
    assert_eq!(list["products"][0]["stock"], json!(0));
}

#[tokio::test]
async fn test_create_product_without_name_is_400() {
    let (_, router) = setup().await;

    let (status, body) = send(&router, "POST", "/api/v1/products", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "ok": false, "message": "El campo Nombre del producto es obligatorio" })
    );
}

#[tokio::test]
async fn test_create_product_with_malformed_json_is_400() {
    let (_, router) = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send_request(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_collection_accepts_trailing_slash() {
    let (_, router) = setup().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/products/",
        Some(json!({ "name": "Galletas" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["name"], json!("Galletas"));

    let (status, body) = send(&router, "GET", "/api/v1/products/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["products"][0]["name"], json!("Galletas"));
}

#[tokio::test]
async fn test_list_returns_ten_most_recent() {
    let (db, router) = setup().await;
    for i in 0..12 {
        db.products()
            .create(&NewProduct::new(format!("Producto {i}"), None))
            .await
            .unwrap();
    }

    let (status, body) = send(&router, "GET", "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(10));
    assert_eq!(body["products"][0]["name"], json!("Producto 11"));
}

#[tokio::test]
async fn test_delete_product_is_idempotent() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Arroz", 3).await;
    let uri = format!("/api/v1/products/{id}");

    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    assert_eq!(db.products().get_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_product_with_bad_id_is_400() {
    let (_, router) = setup().await;

    let (status, body) = send(&router, "DELETE", "/api/v1/products/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
}

// =============================================================================
// Movements
// =============================================================================

#[tokio::test]
async fn test_sale_movement_returns_201() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Harina", 5).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Venta", "quantity": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], json!(true));
    let movement = &body["movement"];
    assert_eq!(movement["product_id"], json!(id));
    assert_eq!(movement["type"], json!("Venta"));
    assert_eq!(movement["quantity"], json!(3));
    assert_eq!(movement["new_stock"], json!(2));
    assert!(movement["id"].as_i64().unwrap() > 0);

    let product = db.products().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(product.stock, 2);
}

#[tokio::test]
async fn test_purchase_with_string_quantity() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Azúcar", 0).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Compra", "quantity": "7" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["movement"]["new_stock"], json!(7));
}

#[tokio::test]
async fn test_insufficient_stock_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Leche", 2).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Venta", "quantity": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "ok": false, "message": "Stock insuficiente" }));

    let product = db.products().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(product.stock, 2);
    assert_eq!(db.movements().count_for_product(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_movement_missing_fields_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Sal", 1).await;
    let uri = format!("/api/v1/products/movement/{id}");

    for body in [json!({}), json!({ "type": "Compra" }), json!({ "type": "", "quantity": 1 })] {
        let (status, response) = send(&router, "POST", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], json!("Faltan datos requeridos"));
    }

    // No body at all
    let (status, response) = send(&router, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], json!("Faltan datos requeridos"));
}

#[tokio::test]
async fn test_movement_bad_quantity_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Fideos", 4).await;
    let uri = format!("/api/v1/products/movement/{id}");

    for quantity in [json!(0), json!(-3), json!("tres")] {
        let (status, response) = send(
            &router,
            "POST",
            &uri,
            Some(json!({ "type": "Compra", "quantity": quantity })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["message"],
            json!("La cantidad debe ser un número positivo")
        );
    }
}

#[tokio::test]
async fn test_movement_unknown_type_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Aceite", 4).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Devolución", "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Tipo de movimiento inválido"));
}

#[tokio::test]
async fn test_movement_non_string_type_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Aceite", 4).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": 1, "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "ok": false, "message": "Tipo de movimiento inválido" }));

    // Product lookup still comes first
    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/products/movement/999",
        Some(json!({ "type": 1, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Producto no encontrado"));
}

#[tokio::test]
async fn test_movement_padded_type_is_400() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Aceite", 4).await;

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": " Compra ", "quantity": 2 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Tipo de movimiento inválido"));
    assert_eq!(db.movements().count_for_product(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_movement_unknown_product_is_404() {
    let (_, router) = setup().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/products/movement/999",
        Some(json!({ "type": "Compra", "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "ok": false, "message": "Producto no encontrado" }));
}

#[tokio::test]
async fn test_movement_non_numeric_product_is_404() {
    let (_, router) = setup().await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/v1/products/movement/abc",
        Some(json!({ "type": "Compra", "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Producto no encontrado"));
}

#[tokio::test]
async fn test_delete_movement_keeps_stock() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Café", 0).await;

    let (_, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Compra", "quantity": 4 })),
    )
    .await;
    let movement_id = body["movement"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/products/movement/{movement_id}");

    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    // Second delete still succeeds
    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let product = db.products().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(product.stock, 4);
}

#[tokio::test]
async fn test_delete_movement_with_bad_id_is_400() {
    let (_, router) = setup().await;

    let (status, body) = send(&router, "DELETE", "/api/v1/products/movement/x1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
}

// =============================================================================
// Storage failures and health
// =============================================================================

#[tokio::test]
async fn test_storage_failure_is_generic_500() {
    let (db, router) = setup().await;
    db.close().await;

    let (status, body) = send(&router, "GET", "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "ok": false, "error": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_storage_failure_exposed_when_enabled() {
    let (db, router) = setup_with(true).await;
    db.close().await;

    let (status, body) = send(&router, "GET", "/api/v1/products", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with(INTERNAL_ERROR_MESSAGE));
    assert!(error.len() > INTERNAL_ERROR_MESSAGE.len());
}

#[tokio::test]
async fn test_failed_stock_update_is_500_and_rolled_back() {
    let (db, router) = setup().await;
    let id = product_with_stock(&db, "Manteca", 5).await;

    sqlx::query(
        "CREATE TRIGGER fail_stock_update BEFORE UPDATE OF stock ON products \
         BEGIN SELECT RAISE(ABORT, 'injected stock failure'); END;",
    )
    .execute(db.pool())
    .await
    .unwrap();

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/v1/products/movement/{id}"),
        Some(json!({ "type": "Venta", "quantity": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(INTERNAL_ERROR_MESSAGE));
    assert_eq!(db.movements().count_for_product(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (_, router) = setup().await;

    for (method, uri) in [("GET", "/api/v1/nothing"), ("POST", "/"), ("GET", "/api/v1/products/1/extra")] {
        let (status, body) = send(&router, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({ "ok": false, "message": "Ruta no encontrada" }));
    }
}

#[tokio::test]
async fn test_health() {
    let (db, router) = setup().await;

    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "database": "up" }));

    db.close().await;

    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "ok": false, "database": "down" }));
}
