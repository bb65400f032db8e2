use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::employee;
use service::registry::Services;
use service::employee::{EmployeePatch, NewEmployee};

use crate::errors::ApiError;
use crate::metrics;
use crate::routes::{ReportBody, ReportQuery};

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/report-inbound-orders", get(report))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<employee::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.employees.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<employee::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.employees.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewEmployee>,
) -> Result<(StatusCode, Json<DataEnvelope<employee::Model>>), ApiError> {
    let res = s.employees.create(input).await;
    metrics::observe("employee", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<DataEnvelope<employee::Model>>, ApiError> {
    let res = s.employees.update(id, patch).await;
    metrics::observe("employee", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.employees.delete(id).await;
    metrics::observe("employee", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report(State(s): State<Services>, Query(q): Query<ReportQuery>) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.employees.report_inbound_orders(id).await?),
        None => ReportBody::All(s.employees.report_all_inbound_orders().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}
