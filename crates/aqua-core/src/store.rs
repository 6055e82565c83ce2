use crate::entity::model_coefficients;
use crate::error::{AquaError, Result};
use aqua_types::Coefficients;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

/// 系数查询接口，标定流程只读不写
#[async_trait]
pub trait CoefficientStore: Send + Sync {
    /// 按节点名精确查找；不存在时返回 `Ok(None)`，不给默认值
    async fn lookup(&self, node_name: &str) -> Result<Option<Coefficients>>;
}

/// 解析 "c0,c1,c2"，必须恰好三个实数
pub fn parse_coefficients(raw: &str) -> std::result::Result<Coefficients, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected exactly 3 comma-separated coefficients, got {}",
            parts.len()
        ));
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("'{}' is not a real number", part))?;
        if !v.is_finite() {
            return Err(format!("'{}' is not a finite number", part));
        }
        *slot = v;
    }

    Ok(Coefficients::new(values[0], values[1], values[2]))
}

/// 基于 sea-orm 的系数表，同时提供 CRUD
#[derive(Clone)]
pub struct DbCoefficientStore {
    db: DatabaseConnection,
}

impl DbCoefficientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, model_name: &str) -> Result<Option<model_coefficients::Model>> {
        let row = model_coefficients::Entity::find()
            .filter(model_coefficients::Column::ModelName.eq(model_name))
            .one(&self.db)
            .await?;
        Ok(row)
    }

    /// 新建系数行，同名已存在时报 AlreadyExists
    pub async fn create(
        &self,
        model_name: &str,
        coefficients: &str,
    ) -> Result<model_coefficients::Model> {
        parse_coefficients(coefficients).map_err(AquaError::InvalidInput)?;

        if self.find(model_name).await?.is_some() {
            return Err(AquaError::AlreadyExists(format!(
                "coefficients for model '{}'",
                model_name
            )));
        }

        let row = model_coefficients::ActiveModel {
            model_name: Set(model_name.to_string()),
            coefficients: Set(coefficients.trim().to_string()),
            ..Default::default()
        };
        let model = row.insert(&self.db).await?;
        tracing::info!(model_name = %model.model_name, "Coefficients created");
        Ok(model)
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<model_coefficients::Model>> {
        let rows = model_coefficients::Entity::find()
            .order_by_asc(model_coefficients::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, model_name: &str) -> Result<model_coefficients::Model> {
        self.find(model_name)
            .await?
            .ok_or_else(|| AquaError::not_found(format!("model '{}'", model_name)))
    }

    pub async fn update(
        &self,
        model_name: &str,
        coefficients: &str,
    ) -> Result<model_coefficients::Model> {
        parse_coefficients(coefficients).map_err(AquaError::InvalidInput)?;

        let existing = self.get(model_name).await?;
        let mut row: model_coefficients::ActiveModel = existing.into();
        row.coefficients = Set(coefficients.trim().to_string());
        let model = row.update(&self.db).await?;
        tracing::info!(model_name = %model.model_name, "Coefficients updated");
        Ok(model)
    }

    /// 删除并返回被删除的行
    pub async fn delete(&self, model_name: &str) -> Result<model_coefficients::Model> {
        let existing = self.get(model_name).await?;
        model_coefficients::Entity::delete_by_id(existing.id)
            .exec(&self.db)
            .await?;
        tracing::info!(model_name = %existing.model_name, "Coefficients deleted");
        Ok(existing)
    }
}

#[async_trait]
impl CoefficientStore for DbCoefficientStore {
    async fn lookup(&self, node_name: &str) -> Result<Option<Coefficients>> {
        let Some(row) = self.find(node_name).await? else {
            return Ok(None);
        };

        parse_coefficients(&row.coefficients)
            .map(Some)
            .map_err(|reason| AquaError::MalformedCoefficients {
                node: node_name.to_string(),
                reason,
            })
    }
}
