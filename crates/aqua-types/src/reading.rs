use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 节点标定系数 (c0, c1, c2)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Coefficients {
    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }
}

/// 与存储格式一致："c0,c1,c2"
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.c0, self.c1, self.c2)
    }
}

/// 原始上报数据，字段名到数值（数字或数字字符串）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawReading(pub HashMap<String, serde_json::Value>);

impl RawReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

impl From<HashMap<String, serde_json::Value>> for RawReading {
    fn from(fields: HashMap<String, serde_json::Value>) -> Self {
        Self(fields)
    }
}

/// 补偿后的读数，每次请求新建，发布后丢弃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensatedReading {
    /// Unix 秒
    pub epoch_time: i64,
    pub temperature: f64,
    pub raw_voltage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncompensated_tds: Option<f64>,
    pub compensated_tds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
}
