use crate::entity::{model_coefficients, users};
use crate::error::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};

/// 按实体定义建表（已存在则跳过）
pub async fn setup_schema(db: &DatabaseConnection) -> Result<()> {
    create_table(db, model_coefficients::Entity).await?;
    create_table(db, users::Entity).await?;
    tracing::info!("Database schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
