pub mod auth;
pub mod coefficients;
pub mod telemetry;

pub use auth::*;
pub use coefficients::*;
pub use telemetry::*;
