use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::registry::Services;
use service::report::CountReport;

use crate::metrics;

pub mod buyers;
pub mod carriers;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod lookups;
pub mod product_batches;
pub mod product_records;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok", service: "warehouse_api" })
}

/// `?id=` selects one parent; without it every parent is reported.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    One(CountReport),
    All(Vec<CountReport>),
}

/// Build the full application router: `/health`, `/metrics` and the `/api/v1` resources.
pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    let api = Router::new()
        .nest("/warehouses", warehouses::router())
        .nest("/sections", sections::router())
        .nest("/products", products::router())
        .nest("/product-batches", product_batches::router())
        .nest("/product-records", product_records::router())
        .nest("/sellers", sellers::router())
        .nest("/localities", localities::router())
        .nest("/carriers", carriers::router())
        .nest("/buyers", buyers::router())
        .nest("/employees", employees::router())
        .nest("/inbound-orders", inbound_orders::router())
        .nest("/purchase-orders", purchase_orders::router())
        .merge(lookups::router());

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .nest("/api/v1", api)
        .with_state(services)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
