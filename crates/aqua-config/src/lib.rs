pub mod app;
pub mod loader;

pub use app::{
    AppConfig, AuthConfig, BootstrapUser, BrokerConfig, BrokerRoute, DatabaseConfig,
    LogFormat, LoggingConfig, ServerConfig, VersionsConfig,
};
pub use loader::ConfigLoader;
