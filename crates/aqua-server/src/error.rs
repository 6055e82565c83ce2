use aqua_core::AquaError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 凭证缺失或无效
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// broker 不可达
    BadGateway(String),
    /// broker 超时
    GatewayTimeout(String),
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            ApiError::GatewayTimeout(msg) => write!(f, "Gateway timeout: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }
        (status, body).into_response()
    }
}

impl From<AquaError> for ApiError {
    fn from(err: AquaError) -> Self {
        match err {
            AquaError::Auth(msg) => ApiError::Unauthorized(msg),
            AquaError::NotFound(msg) => ApiError::NotFound(msg),
            AquaError::InvalidInput(msg) => ApiError::BadRequest(msg),
            AquaError::AlreadyExists(msg) => ApiError::Conflict(msg),
            AquaError::BrokerUnreachable(msg) => ApiError::BadGateway(msg),
            AquaError::BrokerTimeout(msg) => ApiError::GatewayTimeout(msg),
            err @ (AquaError::MalformedCoefficients { .. }
            | AquaError::Database(_)
            | AquaError::Serialization(_)
            | AquaError::Io(_)
            | AquaError::Config(_)
            | AquaError::Internal(_)) => ApiError::InternalError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
