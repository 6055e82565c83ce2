use crate::error::{AquaError, Result};
use std::collections::HashMap;
use std::path::Path;

/// 未登记节点的版本号
pub const UNKNOWN_VERSION: &str = "Unknown";

/// 节点名 -> 固件版本，启动时从文件加载，运行期只读
#[derive(Debug, Clone, Default)]
pub struct NodeVersionMap {
    versions: HashMap<String, String>,
}

impl NodeVersionMap {
    pub fn new(versions: HashMap<String, String>) -> Self {
        Self { versions }
    }

    /// 从扁平表文件加载：`.json` 按 JSON 解析，其余按 TOML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let versions: HashMap<String, String> = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content).map_err(|e| {
                AquaError::Config(format!("Invalid version map {}: {}", path.display(), e))
            })?
        };

        tracing::info!(path = %path.display(), nodes = versions.len(), "Node version map loaded");
        Ok(Self { versions })
    }

    pub fn lookup(&self, node_name: &str) -> &str {
        self.versions
            .get(node_name)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_VERSION)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_unmapped_node_is_unknown() {
        let map = NodeVersionMap::default();
        assert_eq!(map.lookup("N1"), UNKNOWN_VERSION);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.toml");
        fs::write(&path, "\"WM-WD-KH98-00\" = \"V3.2\"\nNode_B = \"V1.0\"\n").unwrap();

        let map = NodeVersionMap::load(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup("WM-WD-KH98-00"), "V3.2");
        // 节点名大小写敏感
        assert_eq!(map.lookup("node_b"), UNKNOWN_VERSION);
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.json");
        fs::write(&path, r#"{"N1": "V2.0"}"#).unwrap();

        let map = NodeVersionMap::load(&path).unwrap();
        assert_eq!(map.lookup("N1"), "V2.0");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(NodeVersionMap::load(dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_non_string_versions_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.toml");
        fs::write(&path, "N1 = 3\n").unwrap();
        assert!(matches!(NodeVersionMap::load(&path), Err(AquaError::Config(_))));
    }
}
