use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::locality;
use service::locality::{LocalityPatch, NewLocality};
use service::registry::Services;

use crate::errors::ApiError;
use crate::metrics;
use crate::routes::{ReportBody, ReportQuery};

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/report-sellers", get(report_sellers))
        .route("/report-carriers", get(report_carriers))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<locality::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.localities.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<locality::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.localities.get(id).await?)))
}

/// Body names the province (`province_name`); the stored row carries its id.
async fn create(
    State(s): State<Services>,
    Json(input): Json<NewLocality>,
) -> Result<(StatusCode, Json<DataEnvelope<locality::Model>>), ApiError> {
    let res = s.localities.create(input).await;
    metrics::observe("locality", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<LocalityPatch>,
) -> Result<Json<DataEnvelope<locality::Model>>, ApiError> {
    let res = s.localities.update(id, patch).await;
    metrics::observe("locality", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.localities.delete(id).await;
    metrics::observe("locality", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report_sellers(
    State(s): State<Services>,
    Query(q): Query<ReportQuery>,
) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.localities.report_sellers(id).await?),
        None => ReportBody::All(s.localities.report_all_sellers().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}

async fn report_carriers(
    State(s): State<Services>,
    Query(q): Query<ReportQuery>,
) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.localities.report_carriers(id).await?),
        None => ReportBody::All(s.localities.report_all_carriers().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}
