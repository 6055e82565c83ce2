pub mod content;
pub mod payload;
pub mod publisher;

pub use content::{render_list, render_real, ContentValue};
pub use payload::{build_envelope, content_values, labels};
pub use publisher::{TelemetryPublisher, CONTENT_TYPE_CIN, ORIGIN_HEADER};
