pub mod auth;

pub use auth::{hash_password, jwt_middleware, verify_password, Claims, JwtAuth};
