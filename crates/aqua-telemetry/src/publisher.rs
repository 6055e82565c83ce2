use crate::payload::build_envelope;
use aqua_config::{BrokerConfig, BrokerRoute};
use aqua_core::{AquaError, Result};
use aqua_types::{CompensatedReading, Profile};
use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

pub const ORIGIN_HEADER: &str = "X-M2M-Origin";

/// oneM2M contentInstance 资源类型 (ty=4)
pub const CONTENT_TYPE_CIN: &str = "application/json;ty=4";

/// 向 oneM2M broker 提交 contentInstance
///
/// 每次调用恰好一个 POST。broker 返回的状态码原样交回调用方，
/// 非 2xx 不重试；只有连接建立失败（请求未发出）才按退避重试，
/// 超时后不再重发，避免重复写入。
#[derive(Clone)]
pub struct TelemetryPublisher {
    client: reqwest::Client,
    config: BrokerConfig,
}

impl TelemetryPublisher {
    pub fn new(config: BrokerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AquaError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: BrokerConfig) -> Self {
        Self { client, config }
    }

    fn route(&self, profile: Profile) -> &BrokerRoute {
        if profile.is_water_quality() {
            &self.config.water_quality
        } else {
            &self.config.simple
        }
    }

    /// `<base_url>/<path>/<node_name>/Data`
    pub fn endpoint(&self, profile: Profile, node_name: &str) -> String {
        format!(
            "{}/{}/{}/Data",
            self.config.base_url.trim_end_matches('/'),
            self.route(profile).path.trim_matches('/'),
            node_name
        )
    }

    /// 提交一条读数，返回 broker 状态码
    pub async fn publish(
        &self,
        profile: Profile,
        node_name: &str,
        reading: &CompensatedReading,
        version: &str,
    ) -> Result<u16> {
        let envelope = build_envelope(profile, node_name, reading, version);
        let body = serde_json::to_string(&envelope)?;
        let url = self.endpoint(profile, node_name);
        let origin = &self.route(profile).origin;

        tracing::debug!(%profile, node_name, url = %url, con = %envelope.cin.con, "Posting content instance");

        let response = self.send_with_retry(&url, origin, body).await?;
        let status = response.status();

        if status.is_success() {
            tracing::info!(%profile, node_name, status = status.as_u16(), "Broker accepted reading");
        } else {
            tracing::warn!(
                %profile,
                node_name,
                status = status.as_u16(),
                "Broker rejected payload"
            );
        }

        Ok(status.as_u16())
    }

    async fn send_with_retry(
        &self,
        url: &str,
        origin: &str,
        body: String,
    ) -> Result<reqwest::Response> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let result = self
                .client
                .post(url)
                .header(ORIGIN_HEADER, origin)
                .header(CONTENT_TYPE, CONTENT_TYPE_CIN)
                .body(body.clone())
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(e) if e.is_connect() && attempt < max_attempts => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        "broker connect failed (attempt {}/{}): {}; retrying in {:?}",
                        attempt,
                        max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) if e.is_timeout() => {
                    tracing::error!(url, "broker timed out: {}", e);
                    return Err(AquaError::BrokerTimeout(format!("{}: {}", url, e)));
                }
                Err(e) => {
                    tracing::error!(url, attempts = attempt, "broker unreachable: {}", e);
                    return Err(AquaError::BrokerUnreachable(format!("{}: {}", url, e)));
                }
            }
        }
    }

    /// 指数退避 + [0, base] 随机抖动
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.config.retry_base_delay_ms;
        let exp = base.saturating_mul(1u64 << (attempt - 1).min(10));
        let jitter = if base > 0 {
            rand::thread_rng().gen_range(0..=base)
        } else {
            0
        };
        Duration::from_millis(exp.saturating_add(jitter))
    }
}
