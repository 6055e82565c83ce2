pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtAuth};
pub use middleware::jwt_middleware;
pub use password::{hash_password, verify_password};
