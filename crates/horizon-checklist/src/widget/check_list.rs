//! Headless check list controller.
//!
//! [`CheckList`] is everything a checkable list view needs apart from
//! painting: it owns the current model slot, swaps models, turns a resolved
//! click into a toggle, and publishes a selection-changed signal. Rendering
//! and hit-testing stay with the view, which calls [`CheckList::handle_click`]
//! with the row under the pointer.
//!
//! # Selection-changed semantics
//!
//! `selection_changed` carries `Some(value)` when an item was checked or
//! toggled through the controller and `None` when the change was structural
//! (items added or removed, model swapped) or came from the model directly.
//! A toggle made through the controller therefore produces a `None` (from the
//! model's `contents_changed`) followed by `Some(value)`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_checklist::model::CheckListModel;
//! use horizon_checklist::widget::CheckList;
//!
//! let model = Arc::new(CheckListModel::from_values(["a", "b", "c"]));
//! let list = CheckList::new(model.clone());
//!
//! list.selection_changed().connect(|value| {
//!     println!("selection changed: {:?}", value);
//! });
//!
//! // The view resolved a click to row 1.
//! assert_eq!(list.handle_click(Some(1)), Ok(Some("b")));
//! assert_eq!(model.checked_items(), vec!["b"]);
//! ```

use std::any::{Any, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use horizon_checklist_core::Signal;
use horizon_checklist_core::logging::targets;

use crate::error::{CheckListError, Result};
use crate::model::{CheckListModel, ListDataConnection, ListDataListener};

/// Forwards every list data notification as `selection_changed(None)`.
struct SelectionForwarder<V> {
    selection_changed: Arc<Signal<Option<V>>>,
}

impl<V: Send + Sync + 'static> ListDataListener for SelectionForwarder<V> {
    fn contents_changed(&self, _first: usize, _last: usize) {
        self.selection_changed.emit(None);
    }

    fn interval_added(&self, _first: usize, _last: usize) {
        self.selection_changed.emit(None);
    }

    fn interval_removed(&self, _first: usize, _last: usize) {
        self.selection_changed.emit(None);
    }
}

/// The attached model and the registration of our forwarder on it.
struct Binding<V> {
    model: Arc<CheckListModel<V>>,
    connection: ListDataConnection,
}

/// A checkable list controller bound to one [`CheckListModel`] at a time.
pub struct CheckList<V: Clone + Send + Sync + 'static> {
    binding: Mutex<Binding<V>>,
    forwarder: Arc<SelectionForwarder<V>>,
    selection_changed: Arc<Signal<Option<V>>>,
    enabled: AtomicBool,
}

impl<V: Clone + Send + Sync + 'static> CheckList<V> {
    /// Creates a controller and attaches it to `model`.
    pub fn new(model: Arc<CheckListModel<V>>) -> Self {
        let selection_changed = Arc::new(Signal::new());
        let forwarder = Arc::new(SelectionForwarder {
            selection_changed: selection_changed.clone(),
        });
        let connection = model.connect_list_data(forwarder.clone());

        Self {
            binding: Mutex::new(Binding { model, connection }),
            forwarder,
            selection_changed,
            enabled: AtomicBool::new(true),
        }
    }

    /// Signal emitted with the value most recently checked or toggled, or
    /// `None` after a structural change.
    pub fn selection_changed(&self) -> &Signal<Option<V>> {
        &self.selection_changed
    }

    // =========================================================================
    // Model
    // =========================================================================

    /// Returns the current model.
    pub fn model(&self) -> Arc<CheckListModel<V>> {
        self.binding.lock().model.clone()
    }

    /// Replaces the current model.
    ///
    /// Detaches from the old model, attaches to `model`, then emits a single
    /// `selection_changed(None)` so observers refresh everything.
    pub fn set_model(&self, model: Arc<CheckListModel<V>>) {
        {
            let mut binding = self.binding.lock();
            binding.model.disconnect_list_data(&binding.connection);
            let connection = model.connect_list_data(self.forwarder.clone());
            *binding = Binding { model, connection };
        }

        tracing::debug!(target: targets::WIDGET, "check list model replaced");
        self.selection_changed.emit(None);
    }

    /// Replaces the current model with a type-erased one.
    ///
    /// Fails with [`CheckListError::IncompatibleModel`] unless `model` is a
    /// `CheckListModel<V>`. The current model stays attached on failure.
    pub fn set_model_any(&self, model: Arc<dyn Any + Send + Sync>) -> Result<()> {
        let model = model
            .downcast::<CheckListModel<V>>()
            .map_err(|_| CheckListError::IncompatibleModel {
                expected: type_name::<CheckListModel<V>>(),
            })?;
        self.set_model(model);
        Ok(())
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Handles a click that the view resolved to `row`.
    ///
    /// `None` (the click hit no row) and clicks on a disabled list do nothing
    /// and return `Ok(None)`. Otherwise the row is toggled and its value is
    /// emitted through `selection_changed`.
    pub fn handle_click(&self, row: Option<usize>) -> Result<Option<V>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        let Some(row) = row else {
            return Ok(None);
        };

        let value = self.toggle_item(row)?;
        Ok(Some(value))
    }

    /// Toggles the item at `index` and emits its value.
    pub fn toggle_item(&self, index: usize) -> Result<V> {
        let value = self.model().toggle_item(index)?;
        self.selection_changed.emit(Some(value.clone()));
        Ok(value)
    }

    /// Checks the item at `index` and emits its value.
    pub fn check_item(&self, index: usize) -> Result<V> {
        let value = self.model().check_item(index)?;
        self.selection_changed.emit(Some(value.clone()));
        Ok(value)
    }

    /// Checks the first item equal to `value` and emits the lookup result.
    ///
    /// When nothing matches, `selection_changed(None)` is still emitted.
    pub fn check_value(&self, value: &V) -> Option<V> {
        let checked = self.model().check_value(value);
        self.selection_changed.emit(checked.clone());
        checked
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the value at `index` in the current model.
    pub fn item(&self, index: usize) -> Result<V> {
        self.model().element_at(index)
    }

    /// Returns `true` if the item at `index` is checked.
    pub fn is_checked(&self, index: usize) -> Result<bool> {
        self.model().is_checked(index)
    }

    /// Returns the checked values of the current model, in list order.
    pub fn checked_items(&self) -> Vec<V> {
        self.model().checked_items()
    }

    /// Enables or disables click handling.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Returns `true` if clicks are handled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl<V: Clone + Send + Sync + 'static> Drop for CheckList<V> {
    fn drop(&mut self) {
        let binding = self.binding.get_mut();
        binding.model.disconnect_list_data(&binding.connection);
    }
}

static_assertions::assert_impl_all!(CheckList<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    type Received = Arc<Mutex<Vec<Option<&'static str>>>>;

    fn setup() -> (Arc<CheckListModel<&'static str>>, CheckList<&'static str>, Received) {
        let model = Arc::new(CheckListModel::from_values(["a", "b", "c"]));
        let list = CheckList::new(model.clone());
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        list.selection_changed()
            .connect(move |value| recv.lock().push(*value));

        (model, list, received)
    }

    #[test]
    fn test_click_toggles_row() {
        let (model, list, received) = setup();

        assert_eq!(list.handle_click(Some(1)), Ok(Some("b")));
        assert_eq!(model.is_checked(1), Ok(true));
        assert_eq!(*received.lock(), vec![None, Some("b")]);

        assert_eq!(list.handle_click(Some(1)), Ok(Some("b")));
        assert_eq!(list.is_checked(1), Ok(false));
    }

    #[test]
    fn test_click_outside_rows_is_ignored() {
        let (model, list, received) = setup();

        assert_eq!(list.handle_click(None), Ok(None));
        assert!(model.checked_items().is_empty());
        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_disabled_list_ignores_clicks() {
        let (model, list, received) = setup();
        list.set_enabled(false);

        assert_eq!(list.handle_click(Some(0)), Ok(None));
        assert_eq!(model.is_checked(0), Ok(false));
        assert!(received.lock().is_empty());

        list.set_enabled(true);
        assert_eq!(list.handle_click(Some(0)), Ok(Some("a")));
    }

    #[test]
    fn test_click_out_of_range_fails() {
        let (_model, list, received) = setup();

        assert_eq!(
            list.handle_click(Some(3)),
            Err(CheckListError::out_of_range(3, 3))
        );
        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_model_changes_forward_none() {
        let (model, _list, received) = setup();

        model.add_item("d").unwrap();
        model.clear();
        assert_eq!(*received.lock(), vec![None; 4]);
    }

    #[test]
    fn test_clearing_empty_model_refreshes() {
        let model = Arc::new(CheckListModel::<&'static str>::new());
        let list = CheckList::new(model.clone());
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        list.selection_changed()
            .connect(move |value| recv.lock().push(*value));

        model.clear();
        assert_eq!(*received.lock(), vec![None, None]);
    }

    #[test]
    fn test_check_value_emits_lookup_result() {
        let (_model, list, received) = setup();

        assert_eq!(list.check_value(&"c"), Some("c"));
        assert_eq!(list.check_value(&"z"), None);
        assert_eq!(*received.lock(), vec![None, Some("c"), None]);
        assert_eq!(list.checked_items(), vec!["c"]);
    }

    #[test]
    fn test_set_model_rebinds_listener() {
        let (old_model, list, received) = setup();
        let new_model = Arc::new(CheckListModel::from_values(["x", "y"]));

        list.set_model(new_model.clone());
        assert_eq!(*received.lock(), vec![None]);
        assert!(Arc::ptr_eq(&list.model(), &new_model));
        assert_eq!(list.item(1), Ok("y"));

        // The old model no longer reaches the controller.
        old_model.toggle_item(0).unwrap();
        assert_eq!(received.lock().len(), 1);
        assert_eq!(old_model.signals().contents_changed.connection_count(), 0);

        new_model.toggle_item(0).unwrap();
        assert_eq!(received.lock().len(), 2);
    }

    #[test]
    fn test_set_model_any_rejects_wrong_type() {
        let (model, list, received) = setup();
        let wrong: Arc<dyn Any + Send + Sync> = Arc::new(CheckListModel::from_values([1, 2, 3]));

        let err = list.set_model_any(wrong).unwrap_err();
        assert!(matches!(err, CheckListError::IncompatibleModel { .. }));
        assert!(Arc::ptr_eq(&list.model(), &model));
        assert!(received.lock().is_empty());

        let right: Arc<dyn Any + Send + Sync> = Arc::new(CheckListModel::from_values(["q"]));
        assert_eq!(list.set_model_any(right), Ok(()));
        assert_eq!(list.item(0), Ok("q"));
    }

    #[test]
    fn test_drop_detaches_listener() {
        let (model, list, _received) = setup();
        assert_eq!(model.signals().interval_added.connection_count(), 1);

        drop(list);
        assert_eq!(model.signals().contents_changed.connection_count(), 0);
        assert_eq!(model.signals().interval_added.connection_count(), 0);
        assert_eq!(model.signals().interval_removed.connection_count(), 0);
    }
}
