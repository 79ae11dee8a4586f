//! 外部坐标转时区服务的 HTTP 客户端

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

const LOOKUP_PATH: &str = "/v2.1/get-time-zone";

#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("timezone API responded with {0}")]
    Upstream(StatusCode),

    #[error("timezone API request failed: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct TimezoneClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl TimezoneClient {
    /// API key 在启动时已校验，这里只持有
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, TimezoneError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// 按坐标查询时区，上游的 JSON 原样返回
    #[instrument(level = "info", skip(self))]
    pub async fn lookup(&self, lat: &str, lng: &str) -> Result<Value, TimezoneError> {
        let url = format!("{}{}", self.base_url, LOOKUP_PATH);
        let start_time = std::time::Instant::now();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("format", "json"),
                ("by", "position"),
                ("lat", lat),
                ("lng", lng),
            ])
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "时区服务请求失败"))?;

        let status = response.status();
        info!(
            status = %status,
            duration_ms = start_time.elapsed().as_millis(),
            "时区服务已响应"
        );

        if !status.is_success() {
            warn!(status = %status, "时区服务返回非成功状态");
            return Err(TimezoneError::Upstream(status));
        }

        let body = response
            .json::<Value>()
            .await
            .inspect_err(|e| error!(error = %e, "时区服务响应不是合法 JSON"))?;
        Ok(body)
    }
}
