use crate::content::{render_list, ContentValue};
use aqua_types::{CompensatedReading, Profile, TelemetryEnvelope};

/// 水质剖面的应用标签
pub const APPLICATION_LABEL: &str = "AE-WM-WD";

/// 版本标签前缀
pub const VERSION_LABEL_PREFIX: &str = "WM-WD-";

/// 各剖面固定的数值顺序
pub fn content_values(profile: Profile, reading: &CompensatedReading) -> Vec<ContentValue> {
    let mut values = vec![
        ContentValue::Int(reading.epoch_time),
        ContentValue::Real(reading.temperature),
        ContentValue::Real(reading.raw_voltage),
    ];

    if profile.is_water_quality() {
        if let Some(uncompensated) = reading.uncompensated_tds {
            values.push(ContentValue::Real(uncompensated));
        }
    }
    values.push(ContentValue::Real(reading.compensated_tds));

    if profile == Profile::WaterQualityV2 {
        values.extend(reading.turbidity.map(ContentValue::Real));
        values.extend(reading.ph.map(ContentValue::Real));
    }

    values
}

pub fn labels(node_name: &str, version: &str) -> Vec<String> {
    vec![
        APPLICATION_LABEL.to_string(),
        node_name.to_string(),
        version.to_string(),
        format!("{}{}", VERSION_LABEL_PREFIX, version),
    ]
}

/// 组装 `m2m:cin`；Simple 不带 lbl
pub fn build_envelope(
    profile: Profile,
    node_name: &str,
    reading: &CompensatedReading,
    version: &str,
) -> TelemetryEnvelope {
    let con = render_list(&content_values(profile, reading));
    let lbl = profile
        .is_water_quality()
        .then(|| labels(node_name, version));
    TelemetryEnvelope::new(con, lbl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reading() -> CompensatedReading {
        CompensatedReading {
            epoch_time: 1_700_000_000,
            temperature: 25.0,
            raw_voltage: 10.0,
            uncompensated_tds: Some(815.0),
            compensated_tds: 815.0,
            turbidity: Some(3.5),
            ph: Some(7.2),
        }
    }

    #[test]
    fn test_simple_envelope_has_no_labels() {
        let mut r = reading();
        r.uncompensated_tds = None;
        r.turbidity = None;
        r.ph = None;

        let env = build_envelope(Profile::Simple, "N1", &r, "V1");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"m2m:cin": {"con": "[1700000000, 25.0, 10.0, 815.0]"}})
        );
    }

    #[test]
    fn test_v1_content_order() {
        let mut r = reading();
        r.turbidity = None;
        r.ph = None;

        let env = build_envelope(Profile::WaterQualityV1, "N1", &r, "V3.2");
        assert_eq!(env.cin.con, "[1700000000, 25.0, 10.0, 815.0, 815.0]");
        assert_eq!(
            env.cin.lbl.unwrap(),
            vec!["AE-WM-WD", "N1", "V3.2", "WM-WD-V3.2"]
        );
    }

    #[test]
    fn test_v2_unknown_version_labels() {
        let env = build_envelope(Profile::WaterQualityV2, "N1", &reading(), "Unknown");
        assert_eq!(
            env.cin.con,
            "[1700000000, 25.0, 10.0, 815.0, 815.0, 3.5, 7.2]"
        );
        assert_eq!(
            env.cin.lbl.unwrap(),
            vec!["AE-WM-WD", "N1", "Unknown", "WM-WD-Unknown"]
        );
    }
}
