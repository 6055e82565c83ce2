use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "model_coefficients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 节点名（与上报路由中的 node_name 精确匹配）
    #[sea_orm(unique)]
    pub model_name: String,
    /// "c0,c1,c2"
    pub coefficients: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
