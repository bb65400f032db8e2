use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::seller;
use service::registry::Services;
use service::seller::{NewSeller, SellerPatch};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<seller::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.sellers.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<seller::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.sellers.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewSeller>,
) -> Result<(StatusCode, Json<DataEnvelope<seller::Model>>), ApiError> {
    let res = s.sellers.create(input).await;
    metrics::observe("seller", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<SellerPatch>,
) -> Result<Json<DataEnvelope<seller::Model>>, ApiError> {
    let res = s.sellers.update(id, patch).await;
    metrics::observe("seller", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.sellers.delete(id).await;
    metrics::observe("seller", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
