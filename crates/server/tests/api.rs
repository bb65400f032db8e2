use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use service::memory::MemoryStore;
use service::registry::Services;

fn app_with(store: Arc<MemoryStore>) -> Router {
    routes::build_router(Services::new(store), tower_http::cors::CorsLayer::very_permissive())
}

fn app() -> Router {
    app_with(Arc::new(MemoryStore::seeded()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

fn warehouse(code: &str) -> Value {
    json!({
        "warehouse_code": code,
        "address": "Av. Corrientes 1234",
        "telephone": "+54 11 5555 0000",
        "minimum_capacity": 100,
        "minimum_temperature": -18.0
    })
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn locality_and_seller_report_flow() {
    let app = app();
    let (status, body) =
        send(&app, "POST", "/api/v1/localities", Some(json!({"locality_name": "Godoy Cruz", "province_name": "Mendoza"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["province_id"], 4);
    let loc_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, "POST", "/api/v1/localities", Some(json!({"locality_name": "X", "province_name": "Nowhereville"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "province_not_found");

    let seller = json!({"cid": 77, "company_name": "Acme", "address": "Calle 1", "telephone": "555", "locality_id": loc_id});
    let (status, _) = send(&app, "POST", "/api/v1/sellers", Some(seller.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, "POST", "/api/v1/sellers", Some(seller)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "already_exists");

    let (status, body) = send(&app, "GET", &format!("/api/v1/localities/report-sellers?id={loc_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"parent_id": loc_id, "parent_name": "Godoy Cruz", "count": 1}));

    let (status, body) = send(&app, "GET", "/api/v1/localities/report-carriers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["count"], 0);

    let (status, body) = send(&app, "GET", "/api/v1/localities/report-sellers?id=999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "parent_not_found");
}

#[tokio::test]
async fn warehouse_crud_statuses() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/v1/warehouses", Some(warehouse("WH-1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "PATCH", &format!("/api/v1/warehouses/{id}"), Some(json!({"telephone": "123"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["telephone"], "123");
    assert_eq!(body["data"]["warehouse_code"], "WH-1");

    let (status, body) = send(&app, "PATCH", &format!("/api/v1/warehouses/{id}"), Some(json!({"locality_id": 55}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "reference_not_found");

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/warehouses/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, "GET", &format!("/api/v1/warehouses/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = send(&app, "GET", "/api/v1/warehouses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn bad_payloads_are_rejected() {
    let app = app();
    let mut blank = warehouse("WH-1");
    blank["address"] = json!(" ");
    let (status, body) = send(&app, "POST", "/api/v1/warehouses", Some(blank)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation");

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/warehouses")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_records_cannot_be_patched() {
    let (status, _) = send(&app(), "PATCH", "/api/v1/product-records/1", Some(json!({"sale_price": 1.0}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn lookups_are_listed() {
    let (status, body) = send(&app(), "GET", "/api/v1/product-types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn storage_outage_is_a_500() {
    let store = Arc::new(MemoryStore::seeded());
    let app = app_with(store.clone());
    store.set_unavailable(true);
    let (status, body) = send(&app, "GET", "/api/v1/buyers", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "storage");
}

#[tokio::test]
async fn writes_are_counted_in_metrics() {
    let app = app();
    send(&app, "POST", "/api/v1/buyers", Some(json!({"card_number_id": "B-1", "first_name": "Ana", "last_name": "Suarez"}))).await;
    let resp = app.clone().oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
    assert!(text.contains("warehouse_api_writes_total"));
    assert!(text.contains(r#"entity="buyer""#));
}
