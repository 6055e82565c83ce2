use crate::state::AppState;
use aqua_core::{calibration, AquaError, Result};
use aqua_types::{Profile, RawReading};

/// 查系数 -> 标定 -> 解析版本 -> 提交 broker
pub async fn submit(
    state: &AppState,
    profile: Profile,
    node_name: &str,
    reading: &RawReading,
) -> Result<u16> {
    let coefficients = state.store.lookup(node_name).await?.ok_or_else(|| {
        AquaError::not_found(format!("no calibration coefficients for node '{}'", node_name))
    })?;

    let compensated = calibration::compute(profile, reading, &coefficients)?;
    tracing::debug!(
        %profile,
        node_name,
        compensated_tds = compensated.compensated_tds,
        "Reading calibrated"
    );

    let version = state.versions.lookup(node_name);
    state
        .publisher
        .publish(profile, node_name, &compensated, version)
        .await
}
