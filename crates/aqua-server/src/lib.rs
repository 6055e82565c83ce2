pub mod api;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod state;

pub use api::create_router;
pub use error::{ApiError, Result};
pub use state::{build_state, AppState};
