//! Logging facilities for Horizon Checklist.
//!
//! Horizon Checklist uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_checklist=debug"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Models log mutations at `trace`/`debug` level with structured fields
//! (`index`, `size`, `checked`). Failed operations are returned to the caller
//! and never logged.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_checklist_core::signal";
    /// Check-list model target.
    pub const MODEL: &str = "horizon_checklist::model";
    /// Check-list controller target.
    pub const WIDGET: &str = "horizon_checklist::widget";
}
