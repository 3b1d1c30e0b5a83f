//! Model/View types for checkable lists.
//!
//! This module separates checklist data from any display logic:
//!
//! - `CheckableItem`: A value paired with its checked flag
//! - `CheckListModel`: Ordered items with mutation and query operations
//! - `ListDataSignals`: Signals for change notifications
//! - `ListDataListener`: Listener-object form of the same notifications
//!
//! # Example
//!
//! ```
//! use horizon_checklist::model::CheckListModel;
//!
//! let model = CheckListModel::new();
//! model.add_item("Buy groceries".to_string()).unwrap();
//! model.add_item("Walk dog".to_string()).unwrap();
//!
//! // Connect to change notifications
//! model.signals().interval_added.connect(|(first, last)| {
//!     println!("Rows {}..={} added", first, last);
//! });
//!
//! model.toggle_item(1).unwrap();
//! assert_eq!(model.checked_items(), vec!["Walk dog".to_string()]);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌────────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │ CheckListModel │────>│ ListDataSignals │────>│  CheckList  │
//! └────────────────┘     └─────────────────┘     └─────────────┘
//!         ^                                             │
//!         └──────── check / toggle / re-query ──────────┘
//! ```

mod check_list_model;
mod item;
mod signals;

pub use check_list_model::{CheckListModel, DuplicatePolicy, ValueEq};
pub use item::CheckableItem;
pub use signals::{ListDataConnection, ListDataListener, ListDataSignals};
