use crate::{
    error::{ApiError, Result},
    models::{TokenRequest, TokenResponse},
    state::AppState,
};
use aqua_middleware::verify_password;
use axum::{extract::State, Form, Json};
use tracing::{info, warn};

const LOGIN_FAILED: &str = "Incorrect username or password";

/// 用户名密码换取 bearer token
pub async fn issue_token(
    State(state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .filter(|user| user.is_active);

    let Some(user) = user else {
        warn!(username = %req.username, "Login failed: unknown or inactive user");
        return Err(ApiError::Unauthorized(LOGIN_FAILED.to_string()));
    };

    // bcrypt 是 CPU 密集操作，放到阻塞线程池
    let hashed = user.hashed_password.clone();
    let password = req.password;
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hashed))
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    if !verified {
        warn!(username = %user.username, "Login failed: wrong password");
        return Err(ApiError::Unauthorized(LOGIN_FAILED.to_string()));
    }

    let access_token = state
        .jwt
        .generate_token(&user.username)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    info!(username = %user.username, "Token issued");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: state.jwt.expires_in_secs(),
    }))
}
