//! Run configuration, fetch coordination and reporting.

pub mod config;
pub mod loader;
pub mod report;
pub mod telemetry;

pub use config::*;
pub use loader::*;
pub use report::*;
pub use telemetry::*;
