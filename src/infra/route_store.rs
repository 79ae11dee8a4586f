use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::core::route_query::{self, BindValue, ALLIANCE_MEMBERS_SQL};
use crate::models::route::{AllianceMember, RouteFilter, RouteRecord};

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("route query timed out after {0:?}")]
    Timeout(Duration),
}

/// 航线库的读取接口
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// 主查询：按过滤条件取航线，不含代码共享信息
    async fn fetch_routes(&self, filter: &RouteFilter) -> Result<Vec<RouteRecord>, QueryError>;

    /// 一次取出给定联盟下的全部航司
    async fn fetch_alliance_members(
        &self,
        alliances: &[String],
    ) -> Result<Vec<AllianceMember>, QueryError>;
}

pub struct PgRouteStore {
    pool: PgPool,
}

impl PgRouteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for PgRouteStore {
    async fn fetch_routes(&self, filter: &RouteFilter) -> Result<Vec<RouteRecord>, QueryError> {
        let compiled = route_query::compile(filter);
        debug!(sql = %compiled.sql, binds = compiled.binds.len(), "执行航线查询");

        let mut query = sqlx::query_as::<_, RouteRecord>(&compiled.sql);
        for bind in compiled.binds {
            query = match bind {
                BindValue::Int(v) => query.bind(v),
                BindValue::Text(v) => query.bind(v),
            };
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_alliance_members(
        &self,
        alliances: &[String],
    ) -> Result<Vec<AllianceMember>, QueryError> {
        let members = sqlx::query_as::<_, AllianceMember>(ALLIANCE_MEMBERS_SQL)
            .bind(alliances)
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }
}
