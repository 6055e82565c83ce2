//! 温度补偿与 TDS 标定
//!
//! TDS 传感器的电导随温度线性漂移，先把电压归一到 25°C 参考点，
//! 再代入节点的三次经验拟合：
//!
//! ```text
//! compensated_voltage = v / (1.0 + 0.02 * (t - 25))
//! tds(v)              = c0 * v^3 - c1 * v^2 + (c2 * v * 0.5)
//! ```
//!
//! 拟合式的符号与 0.5 系数来自标定，不能化简。

use crate::error::{AquaError, Result};
use aqua_types::{Coefficients, CompensatedReading, Profile, RawReading};
use serde_json::Value;

/// 补偿参考温度 (°C)
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// 每摄氏度的电导漂移率
pub const TEMPERATURE_COEFFICIENT: f64 = 0.02;

/// 把原始电压归一到参考温度
pub fn compensate_voltage(raw_voltage: f64, temperature: f64) -> f64 {
    raw_voltage / (1.0 + TEMPERATURE_COEFFICIENT * (temperature - REFERENCE_TEMPERATURE))
}

/// 三次经验拟合
pub fn tds(coefficients: &Coefficients, voltage: f64) -> f64 {
    (coefficients.c0 * voltage.powf(3.0)) - (coefficients.c1 * voltage.powf(2.0))
        + (coefficients.c2 * voltage * 0.5)
}

/// 读取必填数值字段：接受 JSON 数字或数字字符串
pub fn numeric_field(reading: &RawReading, field: &str) -> Result<f64> {
    let value = reading
        .get(field)
        .ok_or_else(|| AquaError::invalid_input(format!("missing field '{}'", field)))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(AquaError::invalid_input(format!(
            "field '{}' is not a finite number: {}",
            field, value
        ))),
    }
}

/// 以当前 Unix 秒为时间戳计算
pub fn compute(
    profile: Profile,
    reading: &RawReading,
    coefficients: &Coefficients,
) -> Result<CompensatedReading> {
    compute_at(profile, reading, coefficients, chrono::Utc::now().timestamp())
}

pub fn compute_at(
    profile: Profile,
    reading: &RawReading,
    coefficients: &Coefficients,
    epoch_time: i64,
) -> Result<CompensatedReading> {
    // 先校验全部必填字段，错误信息只报第一个缺失项
    let mut fields = [0.0f64; 4];
    for (slot, name) in fields.iter_mut().zip(profile.required_fields()) {
        *slot = numeric_field(reading, name)?;
    }
    let (raw_voltage, temperature) = (fields[0], fields[1]);

    let reading = match profile {
        // 该剖面历史上不做补偿，电压原样代入
        Profile::Simple => CompensatedReading {
            epoch_time,
            temperature,
            raw_voltage,
            uncompensated_tds: None,
            compensated_tds: finite("compensated_tds", tds(coefficients, raw_voltage))?,
            turbidity: None,
            ph: None,
        },
        Profile::WaterQualityV1 | Profile::WaterQualityV2 => {
            let compensated_voltage = compensate_voltage(raw_voltage, temperature);
            if !compensated_voltage.is_finite() {
                return Err(AquaError::invalid_input(format!(
                    "temperature {} is at the compensation singular point",
                    temperature
                )));
            }

            let (ph, turbidity) = if profile == Profile::WaterQualityV2 {
                (Some(fields[2]), Some(fields[3]))
            } else {
                (None, None)
            };

            CompensatedReading {
                epoch_time,
                temperature,
                raw_voltage,
                uncompensated_tds: Some(finite(
                    "uncompensated_tds",
                    tds(coefficients, raw_voltage),
                )?),
                compensated_tds: finite("compensated_tds", tds(coefficients, compensated_voltage))?,
                turbidity,
                ph,
            }
        }
    };

    Ok(reading)
}

fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AquaError::invalid_input(format!(
            "{} overflowed for the given reading",
            name
        )))
    }
}
