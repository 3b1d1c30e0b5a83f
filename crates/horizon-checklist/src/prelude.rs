//! Convenient re-exports for checklist users.
//!
//! ```
//! use horizon_checklist::prelude::*;
//! ```

pub use crate::error::CheckListError;
pub use crate::model::{
    CheckListModel, CheckableItem, DuplicatePolicy, ListDataConnection, ListDataListener,
    ListDataSignals,
};
pub use crate::widget::CheckList;
pub use horizon_checklist_core::{ConnectionId, Signal};
