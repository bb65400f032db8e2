use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::inbound_order;
use service::registry::Services;
use service::inbound_order::{InboundOrderPatch, NewInboundOrder};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<inbound_order::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.inbound_orders.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<inbound_order::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.inbound_orders.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewInboundOrder>,
) -> Result<(StatusCode, Json<DataEnvelope<inbound_order::Model>>), ApiError> {
    let res = s.inbound_orders.create(input).await;
    metrics::observe("inbound_order", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<InboundOrderPatch>,
) -> Result<Json<DataEnvelope<inbound_order::Model>>, ApiError> {
    let res = s.inbound_orders.update(id, patch).await;
    metrics::observe("inbound_order", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.inbound_orders.delete(id).await;
    metrics::observe("inbound_order", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
