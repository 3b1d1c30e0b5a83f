//! Core systems for Horizon Checklist.
//!
//! This crate provides the foundational pieces shared by the checklist model
//! and the controllers that consume it:
//!
//! - **Signal/Slot System**: Ordered, synchronous, type-safe notifications
//! - **Logging**: `tracing` targets and span names for every subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_checklist_core::Signal;
//!
//! // Create a signal that notifies when a row range changes
//! let rows_changed = Signal::<(usize, usize)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = rows_changed.connect(|(first, last)| {
//!     println!("Rows {}..={} changed", first, last);
//! });
//!
//! // Emit the signal
//! rows_changed.emit((0, 2));
//!
//! // Disconnect when done
//! rows_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
