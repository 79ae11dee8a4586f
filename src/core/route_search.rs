use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::core::codeshare::{attach_codeshares, distinct_alliances};
use crate::infra::route_store::{QueryError, RouteStore};
use crate::models::route::{RouteFilter, RouteRecord};

/// 航线检索：主查询 + 可选的代码共享补全
///
/// 代码共享只发一次批量联盟查询，不按行逐条查询。
/// 结果保持主查询的顺序。整个过程受 `timeout` 约束。
#[instrument(skip(store), fields(codeshares = filter.codeshares))]
pub async fn search_routes(
    store: &dyn RouteStore,
    filter: &RouteFilter,
    timeout: Duration,
) -> Result<Vec<RouteRecord>, QueryError> {
    tokio::time::timeout(timeout, run(store, filter))
        .await
        .map_err(|_| QueryError::Timeout(timeout))?
}

async fn run(store: &dyn RouteStore, filter: &RouteFilter) -> Result<Vec<RouteRecord>, QueryError> {
    let mut rows = store.fetch_routes(filter).await?;
    info!(rows = rows.len(), "航线主查询完成");

    if !filter.codeshares {
        return Ok(rows);
    }

    let alliances = distinct_alliances(&rows);
    if alliances.is_empty() {
        debug!("结果中没有联盟航司，跳过代码共享查询");
        return Ok(rows);
    }

    let members = store.fetch_alliance_members(&alliances).await?;
    debug!(alliances = alliances.len(), members = members.len(), "联盟成员已加载");
    attach_codeshares(&mut rows, &members);
    Ok(rows)
}
