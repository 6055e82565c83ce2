use aqua_core::entity::model_coefficients;
use serde::{Deserialize, Serialize};

/// 登录表单（application/x-www-form-urlencoded）
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCoefficientRequest {
    pub model_name: String,
    pub coefficients: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCoefficientRequest {
    pub coefficients: String,
}

#[derive(Debug, Deserialize)]
pub struct ListCoefficientsQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoefficientResponse {
    pub id: i32,
    pub model_name: String,
    pub coefficients: String,
}

impl From<model_coefficients::Model> for CoefficientResponse {
    fn from(model: model_coefficients::Model) -> Self {
        Self {
            id: model.id,
            model_name: model.model_name,
            coefficients: model.coefficients,
        }
    }
}
