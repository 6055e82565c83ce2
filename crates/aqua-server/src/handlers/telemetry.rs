use crate::{error::Result, pipeline, state::AppState};
use aqua_middleware::Claims;
use aqua_types::{Profile, RawReading};
use axum::{
    extract::{Path, State},
    Extension, Json,
};

/// 响应体为 broker 返回的状态码
pub async fn submit_simple(
    State(state): State<AppState>,
    Path(node_name): Path<String>,
    Extension(claims): Extension<Claims>,
    Json(reading): Json<RawReading>,
) -> Result<Json<u16>> {
    submit(state, Profile::Simple, node_name, claims, reading).await
}

pub async fn submit_water_quality_v1(
    State(state): State<AppState>,
    Path(node_name): Path<String>,
    Extension(claims): Extension<Claims>,
    Json(reading): Json<RawReading>,
) -> Result<Json<u16>> {
    submit(state, Profile::WaterQualityV1, node_name, claims, reading).await
}

pub async fn submit_water_quality_v2(
    State(state): State<AppState>,
    Path(node_name): Path<String>,
    Extension(claims): Extension<Claims>,
    Json(reading): Json<RawReading>,
) -> Result<Json<u16>> {
    submit(state, Profile::WaterQualityV2, node_name, claims, reading).await
}

async fn submit(
    state: AppState,
    profile: Profile,
    node_name: String,
    claims: Claims,
    reading: RawReading,
) -> Result<Json<u16>> {
    tracing::debug!(%profile, node_name = %node_name, principal = %claims.sub, "Reading submitted");
    let status = pipeline::submit(&state, profile, &node_name, &reading).await?;
    Ok(Json(status))
}
