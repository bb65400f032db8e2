//! Product records are append-only: list, read and create.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::product_record;
use service::product_record::NewProductRecord;
use service::registry::Services;

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new().route("/", get(list).post(create)).route("/:id", get(get_one))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<product_record::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.product_records.list().await?)))
}

async fn get_one(
    State(s): State<Services>,
    Path(id): Path<i64>,
) -> Result<Json<DataEnvelope<product_record::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.product_records.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewProductRecord>,
) -> Result<(StatusCode, Json<DataEnvelope<product_record::Model>>), ApiError> {
    let res = s.product_records.create(input).await;
    metrics::observe("product_record", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}
