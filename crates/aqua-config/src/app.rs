use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub broker: BrokerConfig,
    #[serde(default)]
    pub versions: VersionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_expiration_minutes")]
    pub token_expiration_minutes: i64,
    /// 启动时若不存在则写入的用户
    #[serde(default)]
    pub bootstrap_user: Option<BootstrapUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BootstrapUser {
    pub username: String,
    /// bcrypt 哈希，不接受明文
    pub password_hash: String,
}

/// oneM2M broker 连接配置
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerConfig {
    #[serde(default = "default_broker_base_url")]
    pub base_url: String,
    /// 单次 POST 超时
    #[serde(default = "default_broker_timeout_ms")]
    pub timeout_ms: u64,
    /// 连接失败时的总尝试次数（含首次）
    #[serde(default = "default_broker_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_broker_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_simple_route")]
    pub simple: BrokerRoute,
    #[serde(default = "default_water_quality_route")]
    pub water_quality: BrokerRoute,
}

/// 路由路径与 X-M2M-Origin，按部署区分
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BrokerRoute {
    pub path: String,
    pub origin: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VersionsConfig {
    /// 节点版本表文件（TOML 或 JSON）；未配置时全部为 "Unknown"
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

// 默认值函数
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://coeff-dt.db?mode=rwc".to_string()
}

pub const DEFAULT_JWT_SECRET: &str = "default-secret-change-in-production";

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_expiration_minutes() -> i64 {
    30
}

fn default_broker_base_url() -> String {
    "http://127.0.0.1:8080/~/in-cse/in-name".to_string()
}

fn default_broker_timeout_ms() -> u64 {
    10_000
}

fn default_broker_max_attempts() -> u32 {
    3
}

fn default_broker_retry_base_delay_ms() -> u64 {
    200
}

fn default_simple_route() -> BrokerRoute {
    BrokerRoute {
        path: "AE-CM".to_string(),
        origin: "admin:admin".to_string(),
    }
}

fn default_water_quality_route() -> BrokerRoute {
    BrokerRoute {
        path: "AE-WM-WD".to_string(),
        origin: "admin:admin".to_string(),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_expiration_minutes: default_token_expiration_minutes(),
            bootstrap_user: None,
        }
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            base_url: default_broker_base_url(),
            timeout_ms: default_broker_timeout_ms(),
            max_attempts: default_broker_max_attempts(),
            retry_base_delay_ms: default_broker_retry_base_delay_ms(),
            simple: default_simple_route(),
            water_quality: default_water_quality_route(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AuthConfig {
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
