use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::JwtAuth;

fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
    )
        .into_response()
}

/// 受保护路由的认证层；通过后把 `Claims` 放入 request extensions
pub async fn jwt_middleware(
    State(jwt_auth): State<Arc<JwtAuth>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = {
        let token = bearer_token(&req).ok_or_else(unauthorized)?;
        jwt_auth.verify_token(token).map_err(|e| {
            tracing::debug!(path = %req.uri().path(), "Rejected bearer token: {}", e);
            unauthorized()
        })?
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
