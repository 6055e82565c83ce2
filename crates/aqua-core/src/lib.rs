pub mod calibration;
pub mod entity;
pub mod error;
pub mod schema;
pub mod store;
pub mod users;
pub mod versions;

pub use calibration::{compensate_voltage, compute, compute_at, tds};
pub use error::{AquaError, Result};
pub use schema::setup_schema;
pub use store::{parse_coefficients, CoefficientStore, DbCoefficientStore};
pub use users::UserRepository;
pub use versions::{NodeVersionMap, UNKNOWN_VERSION};
