pub mod model_coefficients;
pub mod users;

pub mod prelude {
    pub use super::model_coefficients::Entity as ModelCoefficients;
    pub use super::users::Entity as Users;
}
