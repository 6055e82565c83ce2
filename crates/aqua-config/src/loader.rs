use anyhow::{anyhow, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

use crate::AppConfig;

/// 环境变量前缀，例如 `AQUA__BROKER__BASE_URL`
pub const ENV_PREFIX: &str = "AQUA";

/// 配置加载器：TOML 文件 + 环境变量覆盖
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 加载配置；文件不存在时只用默认值与环境变量
    pub fn load(&self) -> Result<AppConfig> {
        let mut builder = Config::builder();

        if self.path.exists() {
            builder = builder.add_source(File::new(
                self.path
                    .to_str()
                    .ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        Self::validate(&app_config)?;
        Ok(app_config)
    }

    pub fn validate(config: &AppConfig) -> Result<()> {
        if config.broker.base_url.trim().is_empty() {
            return Err(anyhow!("broker.base_url must not be empty"));
        }
        if config.broker.timeout_ms == 0 {
            return Err(anyhow!("broker.timeout_ms must be greater than 0"));
        }
        if config.broker.max_attempts == 0 {
            return Err(anyhow!("broker.max_attempts must be greater than 0"));
        }
        if config.auth.jwt_secret.is_empty() {
            return Err(anyhow!("auth.jwt_secret must not be empty"));
        }
        if config.auth.token_expiration_minutes <= 0 {
            return Err(anyhow!("auth.token_expiration_minutes must be greater than 0"));
        }
        Ok(())
    }
}
