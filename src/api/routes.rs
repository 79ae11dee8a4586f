use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::ax_state::AppState;
use crate::core::route_search::search_routes;
use crate::models::route::{RouteFilter, RouteFilterParams, RoutesPage};

/// 航线检索页的数据接口
/// 处理流程：解析过滤参数 -> 参数化主查询 -> (可选) 批量代码共享补全
pub async fn route_match(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteFilterParams>,
) -> Result<Json<RoutesPage>, ApiError> {
    let filter = RouteFilter::from(params);
    info!(?filter, "接收到航线检索请求");

    let routes = search_routes(state.routes.as_ref(), &filter, state.db_timeout).await?;
    info!(count = routes.len(), "航线检索完成");

    Ok(Json(RoutesPage { routes }))
}
