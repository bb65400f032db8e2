use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::carrier;
use service::registry::Services;
use service::carrier::{CarrierPatch, NewCarrier};

use crate::errors::ApiError;
use crate::metrics;

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<carrier::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.carriers.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<carrier::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.carriers.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewCarrier>,
) -> Result<(StatusCode, Json<DataEnvelope<carrier::Model>>), ApiError> {
    let res = s.carriers.create(input).await;
    metrics::observe("carrier", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<CarrierPatch>,
) -> Result<Json<DataEnvelope<carrier::Model>>, ApiError> {
    let res = s.carriers.update(id, patch).await;
    metrics::observe("carrier", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.carriers.delete(id).await;
    metrics::observe("carrier", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
