use crate::{handlers, state::AppState};
use aqua_middleware::jwt_middleware;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    // 需要 bearer token 的路由
    let protected = Router::new()
        // 系数管理
        .route(
            "/coefficients",
            post(handlers::create_coefficient).get(handlers::list_coefficients),
        )
        .route(
            "/coefficients/",
            post(handlers::create_coefficient).get(handlers::list_coefficients),
        )
        .route(
            "/coefficients/:model_name",
            get(handlers::get_coefficient)
                .put(handlers::update_coefficient)
                .delete(handlers::delete_coefficient),
        )
        // 读数上报
        .route("/telemetry/simple/:node_name", post(handlers::submit_simple))
        .route(
            "/telemetry/water-quality/v1/:node_name",
            post(handlers::submit_water_quality_v1),
        )
        .route(
            "/telemetry/water-quality/v2/:node_name",
            post(handlers::submit_water_quality_v2),
        )
        .route_layer(middleware::from_fn_with_state(
            state.jwt.clone(),
            jwt_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/token", post(handlers::issue_token))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
