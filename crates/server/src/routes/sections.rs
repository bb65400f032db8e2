use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::section;
use service::registry::Services;
use service::section::{NewSection, SectionPatch};

use crate::errors::ApiError;
use crate::metrics;
use crate::routes::{ReportBody, ReportQuery};

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/report-products", get(report))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<section::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.sections.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<section::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.sections.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewSection>,
) -> Result<(StatusCode, Json<DataEnvelope<section::Model>>), ApiError> {
    let res = s.sections.create(input).await;
    metrics::observe("section", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<SectionPatch>,
) -> Result<Json<DataEnvelope<section::Model>>, ApiError> {
    let res = s.sections.update(id, patch).await;
    metrics::observe("section", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.sections.delete(id).await;
    metrics::observe("section", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report(State(s): State<Services>, Query(q): Query<ReportQuery>) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.sections.report_batches(id).await?),
        None => ReportBody::All(s.sections.report_all_batches().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}
