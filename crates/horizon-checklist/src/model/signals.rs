//! Change notifications for check list models.
//!
//! Models expose their notifications as a [`ListDataSignals`] bundle. Each
//! signal carries an inclusive `(first, last)` row range into the model as it
//! stands after the mutation. The range is advisory: observers re-query the
//! model for the current values and checked flags.
//!
//! Two ways to observe a model:
//!
//! - connect closures to the individual signals, or
//! - implement [`ListDataListener`] and attach it with
//!   [`CheckListModel::connect_list_data`](super::CheckListModel::connect_list_data),
//!   which wires one listener object to all three signals and hands back a
//!   [`ListDataConnection`] for detaching it later.

use std::sync::Arc;

use horizon_checklist_core::{ConnectionId, Signal};

/// Observer of structural and content changes in a list model.
///
/// All methods default to doing nothing, so implementors only override the
/// notifications they care about.
pub trait ListDataListener: Send + Sync {
    /// Rows `first..=last` may display different data.
    fn contents_changed(&self, _first: usize, _last: usize) {}

    /// Rows `first..=last` were inserted.
    fn interval_added(&self, _first: usize, _last: usize) {}

    /// Rows `first..=last` were removed.
    fn interval_removed(&self, _first: usize, _last: usize) {}
}

/// Collection of signals emitted by check list models.
///
/// # Signal Usage
///
/// - **Flag or value changes**: `contents_changed`
/// - **Rows appended**: `contents_changed` followed by `interval_added`
/// - **Rows removed**: `contents_changed` followed by `interval_removed`
pub struct ListDataSignals {
    /// Emitted when the data of existing rows changes.
    /// Args: (first row, last row)
    pub contents_changed: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub interval_added: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row)
    pub interval_removed: Signal<(usize, usize)>,
}

impl Default for ListDataSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ListDataSignals {
    /// Creates a new set of list data signals.
    pub fn new() -> Self {
        Self {
            contents_changed: Signal::new(),
            interval_added: Signal::new(),
            interval_removed: Signal::new(),
        }
    }

    /// Emits `contents_changed` for a single row.
    pub fn emit_contents_changed_single(&self, row: usize) {
        self.contents_changed.emit((row, row));
    }

    /// Emits the notifications for rows `first..=last` that were just inserted.
    pub fn emit_rows_added(&self, first: usize, last: usize) {
        self.contents_changed.emit((first, last));
        self.interval_added.emit((first, last));
    }

    /// Emits the notifications for rows `first..=last` that were just removed.
    pub fn emit_rows_removed(&self, first: usize, last: usize) {
        self.contents_changed.emit((first, last));
        self.interval_removed.emit((first, last));
    }

    /// Wires `listener` to all three signals.
    pub fn connect_listener(&self, listener: Arc<dyn ListDataListener>) -> ListDataConnection {
        let contents = listener.clone();
        let added = listener.clone();
        let removed = listener;

        ListDataConnection {
            contents_changed: self
                .contents_changed
                .connect(move |&(first, last)| contents.contents_changed(first, last)),
            interval_added: self
                .interval_added
                .connect(move |&(first, last)| added.interval_added(first, last)),
            interval_removed: self
                .interval_removed
                .connect(move |&(first, last)| removed.interval_removed(first, last)),
        }
    }

    /// Detaches a listener previously wired with [`connect_listener`](Self::connect_listener).
    ///
    /// Returns `true` if the listener was still attached.
    pub fn disconnect_listener(&self, connection: &ListDataConnection) -> bool {
        let contents = self.contents_changed.disconnect(connection.contents_changed);
        let added = self.interval_added.disconnect(connection.interval_added);
        let removed = self.interval_removed.disconnect(connection.interval_removed);
        contents || added || removed
    }

    /// Returns `true` if any part of `connection` is still attached.
    pub fn is_listener_connected(&self, connection: &ListDataConnection) -> bool {
        self.contents_changed.is_connected(connection.contents_changed)
            || self.interval_added.is_connected(connection.interval_added)
            || self.interval_removed.is_connected(connection.interval_removed)
    }
}

/// Registration of a [`ListDataListener`] on a [`ListDataSignals`] bundle.
///
/// Holding this value does not keep the listener attached or detached; pass it
/// back to the model to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDataConnection {
    contents_changed: ConnectionId,
    interval_added: ConnectionId,
    interval_removed: ConnectionId,
}
