use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::warehouse;
use service::registry::Services;
use service::warehouse::{NewWarehouse, WarehousePatch};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<warehouse::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.warehouses.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<warehouse::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.warehouses.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewWarehouse>,
) -> Result<(StatusCode, Json<DataEnvelope<warehouse::Model>>), ApiError> {
    let res = s.warehouses.create(input).await;
    metrics::observe("warehouse", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<WarehousePatch>,
) -> Result<Json<DataEnvelope<warehouse::Model>>, ApiError> {
    let res = s.warehouses.update(id, patch).await;
    metrics::observe("warehouse", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.warehouses.delete(id).await;
    metrics::observe("warehouse", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
