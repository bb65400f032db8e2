use axum::{extract::State, routing::get, Json, Router};
use common::types::DataEnvelope;
use models::{product_type, province};
use service::registry::Services;

use crate::errors::ApiError;

pub fn router() -> Router<Services> {
    Router::new().route("/provinces", get(provinces)).route("/product-types", get(product_types))
}

async fn provinces(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<province::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.provinces.list().await?)))
}

async fn product_types(State(s): State<Services>) -> Result<Json<DataEnvelope<Vec<product_type::Model>>>, ApiError> {
    Ok(Json(DataEnvelope::new(s.product_types.list().await?)))
}
