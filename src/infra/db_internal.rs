use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::infra::config::AppConfig;

pub async fn init_db(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_timeout)
        .connect(&config.database_url)
        .await
        .context("Failed to create pool")?;
    info!(max_connections = config.db_max_connections, "航线数据库连接池已建立");
    Ok(pool)
}
