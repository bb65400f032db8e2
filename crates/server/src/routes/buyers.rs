use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::buyer;
use service::registry::Services;
use service::buyer::{BuyerPatch, NewBuyer};

use crate::errors::ApiError;
use crate::metrics;
use crate::routes::{ReportBody, ReportQuery};

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/report-purchase-orders", get(report))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<buyer::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.buyers.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<buyer::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.buyers.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewBuyer>,
) -> Result<(StatusCode, Json<DataEnvelope<buyer::Model>>), ApiError> {
    let res = s.buyers.create(input).await;
    metrics::observe("buyer", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<BuyerPatch>,
) -> Result<Json<DataEnvelope<buyer::Model>>, ApiError> {
    let res = s.buyers.update(id, patch).await;
    metrics::observe("buyer", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.buyers.delete(id).await;
    metrics::observe("buyer", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report(State(s): State<Services>, Query(q): Query<ReportQuery>) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.buyers.report_purchase_orders(id).await?),
        None => ReportBody::All(s.buyers.report_all_purchase_orders().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}
