use crate::entity::users;
use crate::error::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// 用户表只读访问（登录校验用），外加启动时的引导用户写入
#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(user)
    }

    /// 用户不存在时写入；已存在则原样返回，不覆盖密码
    pub async fn ensure_user(&self, username: &str, hashed_password: &str) -> Result<users::Model> {
        if let Some(user) = self.find_by_username(username).await? {
            return Ok(user);
        }

        let user = users::ActiveModel {
            username: Set(username.to_string()),
            hashed_password: Set(hashed_password.to_string()),
            is_active: Set(true),
            ..Default::default()
        };
        let user = user.insert(&self.db).await?;
        tracing::info!(username = %user.username, "Bootstrap user created");
        Ok(user)
    }
}
