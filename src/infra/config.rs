use anyhow::{bail, Context};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_TIMEZONE_API_URL: &str = "http://api.timezonedb.com";

/// 启动时一次性加载的进程配置，之后只读
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout: Duration,
    pub timezone_api_key: String,
    pub timezone_api_url: String,
    pub upstream_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，缺少必填项时直接报错
    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => {
                // 兼容分散的 POSTGRES_* 变量
                let host = get("POSTGRES_HOST")
                    .context("DATABASE_URL or POSTGRES_HOST must be set")?;
                let user = get("POSTGRES_USER").context("POSTGRES_USER must be set")?;
                let pass = get("POSTGRES_PASS").context("POSTGRES_PASS must be set")?;
                let db = get("POSTGRES_DB").context("POSTGRES_DB must be set")?;
                let port = get("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
                format!("postgres://{user}:{pass}@{host}:{port}/{db}")
            }
        };

        let Some(timezone_api_key) = get("TIMEZONE_API_KEY") else {
            bail!("TIMEZONE_API_KEY must be set");
        };

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let db_timeout = parse_or(get("DB_TIMEOUT_SECS"), 10, "DB_TIMEOUT_SECS")?;
        let upstream_timeout = parse_or(get("UPSTREAM_TIMEOUT_SECS"), 10, "UPSTREAM_TIMEOUT_SECS")?;

        Ok(Self {
            database_url,
            db_max_connections: parse_or(get("DB_MAX_CONNECTIONS"), 5, "DB_MAX_CONNECTIONS")?,
            db_timeout: Duration::from_secs(db_timeout),
            timezone_api_key,
            timezone_api_url: get("TIMEZONE_API_URL")
                .unwrap_or_else(|| DEFAULT_TIMEZONE_API_URL.to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout),
            bind_addr,
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T, key: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
{
    match raw {
        Some(v) => v.parse().ok().with_context(|| format!("{key} has invalid value {v:?}")),
        None => Ok(default),
    }
}
