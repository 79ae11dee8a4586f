use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_match::api::create_router;
use route_match::ax_state::AppState;
use route_match::infra::config::AppConfig;
use route_match::infra::db_internal::init_db;
use route_match::infra::route_store::PgRouteStore;
use route_match::infra::timezone_client::TimezoneClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    // 配置在启动时一次性校验，缺少 API key 或数据库地址直接退出
    let config = AppConfig::from_env()?;
    let db = init_db(&config).await?;

    let timezone = TimezoneClient::new(
        &config.timezone_api_url,
        config.timezone_api_key.clone(),
        config.upstream_timeout,
    )?;

    let state = Arc::new(AppState {
        routes: Arc::new(PgRouteStore::new(db)),
        timezone,
        db_timeout: config.db_timeout,
    });

    let app = create_router(state);

    info!("🚀 航线检索服务运行在 http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("收到退出信号，停止服务");
}
