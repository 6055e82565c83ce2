use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum AquaError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// 已存储的系数行无法解析为三个实数
    #[error("Malformed coefficients for {node}: {reason}")]
    MalformedCoefficients { node: String, reason: String },

    /// 请求未能到达 broker（连接失败等）
    #[error("Broker unreachable: {0}")]
    BrokerUnreachable(String),

    #[error("Broker timed out: {0}")]
    BrokerTimeout(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AquaError>;

impl From<anyhow::Error> for AquaError {
    fn from(err: anyhow::Error) -> Self {
        AquaError::Internal(err.to_string())
    }
}

impl AquaError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AquaError::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AquaError::NotFound(msg.into())
    }
}
