use serde::{Deserialize, Serialize};

/// oneM2M contentInstance 外层包装：`{"m2m:cin": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEnvelope {
    #[serde(rename = "m2m:cin")]
    pub cin: ContentInstance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentInstance {
    /// 标签列表，Simple 剖面不发送
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lbl: Option<Vec<String>>,
    /// 数值列表的文本形式（字符串，不是 JSON 数组）
    pub con: String,
}

impl TelemetryEnvelope {
    pub fn new(con: String, lbl: Option<Vec<String>>) -> Self {
        Self {
            cin: ContentInstance { lbl, con },
        }
    }
}
