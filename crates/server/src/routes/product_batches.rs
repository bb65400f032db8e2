use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::product_batch;
use service::registry::Services;
use service::product_batch::{NewProductBatch, ProductBatchPatch};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<product_batch::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.product_batches.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<product_batch::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.product_batches.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewProductBatch>,
) -> Result<(StatusCode, Json<DataEnvelope<product_batch::Model>>), ApiError> {
    let res = s.product_batches.create(input).await;
    metrics::observe("product_batch", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductBatchPatch>,
) -> Result<Json<DataEnvelope<product_batch::Model>>, ApiError> {
    let res = s.product_batches.update(id, patch).await;
    metrics::observe("product_batch", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.product_batches.delete(id).await;
    metrics::observe("product_batch", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
