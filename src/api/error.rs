use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::infra::route_store::QueryError;
use crate::infra::timezone_client::TimezoneError;

/// 所有接口统一的错误出口，响应体固定为 `{ "error": ... }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Timezone(#[from] TimezoneError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
            ApiError::Query(QueryError::Timeout(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, "Route query timed out")
            }
            ApiError::Query(QueryError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load routes")
            }
            // 上游的非成功状态码原样转发
            ApiError::Timezone(TimezoneError::Upstream(status)) => (*status, "Timezone API error"),
            ApiError::Timezone(TimezoneError::Network(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch timezone data")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, status = %status, "请求处理失败");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
