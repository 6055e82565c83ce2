use aqua_config::AppConfig;
use aqua_core::{
    setup_schema, CoefficientStore, DbCoefficientStore, NodeVersionMap, UserRepository,
};
use aqua_middleware::JwtAuth;
use aqua_telemetry::TelemetryPublisher;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// API 应用状态，运行期全部只读
#[derive(Clone)]
pub struct AppState {
    /// 系数表 CRUD
    pub coefficients: DbCoefficientStore,
    /// 标定流程使用的系数查询
    pub store: Arc<dyn CoefficientStore>,
    pub users: UserRepository,
    pub versions: Arc<NodeVersionMap>,
    pub publisher: Arc<TelemetryPublisher>,
    pub jwt: Arc<JwtAuth>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        versions: NodeVersionMap,
        publisher: TelemetryPublisher,
        jwt: JwtAuth,
    ) -> Self {
        let coefficients = DbCoefficientStore::new(db.clone());
        Self {
            store: Arc::new(coefficients.clone()),
            coefficients,
            users: UserRepository::new(db),
            versions: Arc::new(versions),
            publisher: Arc::new(publisher),
            jwt: Arc::new(jwt),
        }
    }
}

/// 按配置连接数据库、建表、加载版本表并组装状态
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = Database::connect(config.database.url.as_str()).await?;
    setup_schema(&db).await?;

    let users = UserRepository::new(db.clone());
    if let Some(bootstrap) = &config.auth.bootstrap_user {
        users
            .ensure_user(&bootstrap.username, &bootstrap.password_hash)
            .await?;
    }

    let versions = match &config.versions.file {
        Some(path) => NodeVersionMap::load(path)?,
        None => {
            tracing::warn!("No node version file configured; all nodes report version Unknown");
            NodeVersionMap::default()
        }
    };

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the built-in default; set it before deploying");
    }

    let publisher = TelemetryPublisher::new(config.broker.clone())?;
    let jwt = JwtAuth::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_minutes,
    );

    Ok(AppState::new(db, versions, publisher, jwt))
}
