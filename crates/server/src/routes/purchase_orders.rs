use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::purchase_order;
use service::registry::Services;
use service::purchase_order::{NewPurchaseOrder, PurchaseOrderPatch};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<purchase_order::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.purchase_orders.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<purchase_order::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.purchase_orders.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewPurchaseOrder>,
) -> Result<(StatusCode, Json<DataEnvelope<purchase_order::Model>>), ApiError> {
    let res = s.purchase_orders.create(input).await;
    metrics::observe("purchase_order", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<PurchaseOrderPatch>,
) -> Result<Json<DataEnvelope<purchase_order::Model>>, ApiError> {
    let res = s.purchase_orders.update(id, patch).await;
    metrics::observe("purchase_order", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.purchase_orders.delete(id).await;
    metrics::observe("purchase_order", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
