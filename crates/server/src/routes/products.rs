use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataEnvelope;
use models::product;
use service::registry::Services;
use service::product::{NewProduct, ProductPatch};

use crate::errors::ApiError;
use crate::metrics;
use crate::routes::{ReportBody, ReportQuery};

pub fn router() -> Router<Services> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/report-records", get(report))
        .route("/:id", get(get_one).patch(update).delete(remove))
}

async fn list(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<product::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.products.list().await?)))
}

async fn get_one(State(s): State<Services>, Path(id): Path<i64>) -> Result<Json<DataEnvelope<product::Model>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.products.get(id).await?)))
}

async fn create(
    State(s): State<Services>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<DataEnvelope<product::Model>>), ApiError> {
    let res = s.products.create(input).await;
    metrics::observe("product", &res);
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(res?))))
}

async fn update(
    State(s): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<DataEnvelope<product::Model>>, ApiError> {
    let res = s.products.update(id, patch).await;
    metrics::observe("product", &res);
    Ok(Json(DataEnvelope::new(res?)))
}

async fn remove(State(s): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let res = s.products.delete(id).await;
    metrics::observe("product", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

async fn report(State(s): State<Services>, Query(q): Query<ReportQuery>) -> Result<Json<DataEnvelope<ReportBody>>, ApiError> {
    let body = match q.id {
        Some(id) => ReportBody::One(s.products.report_records(id).await?),
        None => ReportBody::All(s.products.report_all_records().await?),
    };
    Ok(Json(DataEnvelope::new(body)))
}
