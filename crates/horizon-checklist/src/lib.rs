//! Horizon Checklist - checkable list models with change notifications.
//!
//! This crate holds the logic behind a checkable list view: an ordered
//! list of values, a checked flag per value, and signals that tell observers
//! what changed. Drawing the list is left to whatever view consumes it.
//!
//! - [`model`]: [`CheckListModel`](model::CheckListModel), its items and
//!   its list data signals
//! - [`widget`]: [`CheckList`](widget::CheckList), the headless controller
//!   a view drives
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_checklist::prelude::*;
//!
//! let model = Arc::new(CheckListModel::new());
//! for i in 0..3 {
//!     model.add_item(format!("Item {i}"))?;
//! }
//!
//! let list = CheckList::new(model.clone());
//! list.handle_click(Some(2))?;
//!
//! assert_eq!(model.checked_items(), vec!["Item 2".to_string()]);
//! # Ok::<(), CheckListError>(())
//! ```

pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{CheckListError, Result};
pub use horizon_checklist_core::{ConnectionId, Signal, logging};
