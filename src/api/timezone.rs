use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::ax_state::AppState;
use crate::models::timezone::TimezoneQuery;

/// 坐标转时区的透传代理
pub async fn timezone_lookup(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimezoneQuery>,
) -> Result<Json<Value>, ApiError> {
    let (lat, lng) = query
        .coordinates()
        .ok_or(ApiError::Validation("Missing lat or lng parameters"))?;

    let body = state.timezone.lookup(lat, lng).await?;
    Ok(Json(body))
}
