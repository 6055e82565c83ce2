use serde::{Deserialize, Serialize};
use std::fmt;

/// 上报剖面（由接收请求的路由决定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// 单值上报，不做温度补偿
    Simple,
    /// 水质 v1：同时给出补偿前后的 TDS
    WaterQualityV1,
    /// 水质 v2：在 v1 基础上透传 ph / turbidity
    WaterQualityV2,
}

impl Profile {
    /// 该剖面要求的原始字段
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Profile::Simple | Profile::WaterQualityV1 => &["voltage", "temperature"],
            Profile::WaterQualityV2 => &["voltage", "temperature", "ph", "turbidity"],
        }
    }

    /// 是否对电压做温度补偿
    pub fn compensates(&self) -> bool {
        !matches!(self, Profile::Simple)
    }

    /// 水质剖面在 broker 侧带标签
    pub fn is_water_quality(&self) -> bool {
        matches!(self, Profile::WaterQualityV1 | Profile::WaterQualityV2)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Simple => "simple",
            Profile::WaterQualityV1 => "water_quality_v1",
            Profile::WaterQualityV2 => "water_quality_v2",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
