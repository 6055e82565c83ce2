use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

/// 新建系数行
pub async fn create_coefficient(
    State(state): State<AppState>,
    Json(req): Json<CreateCoefficientRequest>,
) -> Result<(StatusCode, Json<CoefficientResponse>)> {
    let row = state
        .coefficients
        .create(&req.model_name, &req.coefficients)
        .await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// 分页列出
pub async fn list_coefficients(
    State(state): State<AppState>,
    Query(query): Query<ListCoefficientsQuery>,
) -> Result<Json<Vec<CoefficientResponse>>> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(10);
    debug!(skip, limit, "Listing coefficients");

    let rows = state.coefficients.list(skip, limit).await?;
    Ok(Json(rows.into_iter().map(CoefficientResponse::from).collect()))
}

pub async fn get_coefficient(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<CoefficientResponse>> {
    let row = state.coefficients.get(&model_name).await?;
    Ok(Json(row.into()))
}

pub async fn update_coefficient(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
    Json(req): Json<UpdateCoefficientRequest>,
) -> Result<Json<CoefficientResponse>> {
    let row = state
        .coefficients
        .update(&model_name, &req.coefficients)
        .await?;
    Ok(Json(row.into()))
}

/// 删除并返回被删除的行
pub async fn delete_coefficient(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<CoefficientResponse>> {
    let row = state.coefficients.delete(&model_name).await?;
    Ok(Json(row.into()))
}
