pub mod config;
pub mod telemetry;

pub use config::{IdStrategy, WorkspaceConfig};
pub use telemetry::init_tracing;
