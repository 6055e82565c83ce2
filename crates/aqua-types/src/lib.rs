pub mod envelope;
pub mod profile;
pub mod reading;

pub use envelope::{ContentInstance, TelemetryEnvelope};
pub use profile::Profile;
pub use reading::{Coefficients, CompensatedReading, RawReading};
