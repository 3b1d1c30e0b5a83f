//! Check list model implementation.
//!
//! `CheckListModel<V>` stores an ordered list of values, each with a checked
//! flag, and reports every mutation through [`ListDataSignals`]. Value lookups
//! go through an explicit equality function, `PartialEq` by default or a
//! closure supplied at construction.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use horizon_checklist_core::logging::targets;

use super::item::CheckableItem;
use super::signals::{ListDataConnection, ListDataListener, ListDataSignals};
use crate::error::{CheckListError, Result};

/// Type alias for a value equality function.
pub type ValueEq<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// What [`CheckListModel::add_item`] does with a value equal to one already
/// in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Append anyway. Value lookups resolve to the first match.
    #[default]
    Allow,
    /// Refuse with [`CheckListError::DuplicateValue`].
    Reject,
}

/// An ordered list of values with a per-value checked flag.
///
/// Mutations take `&self` and the model is `Send + Sync`, so it is normally
/// shared as `Arc<CheckListModel<V>>` between its owner and the views
/// observing it. No lock is held while signals are emitted, so slots are free
/// to query or mutate the model.
///
/// Values are cloned out of the model. Wrap large or shared values in `Arc`.
///
/// # Example
///
/// ```
/// use horizon_checklist::model::CheckListModel;
///
/// let model = CheckListModel::from_values(["a", "b", "c"]);
///
/// model.signals().contents_changed.connect(|(first, last)| {
///     println!("rows {}..={} changed", first, last);
/// });
///
/// assert_eq!(model.toggle_item(1), Ok("b"));
/// assert_eq!(model.is_checked(1), Ok(true));
/// assert_eq!(model.checked_items(), vec!["b"]);
///
/// assert_eq!(model.check_value(&"z"), None);
/// ```
pub struct CheckListModel<V> {
    items: RwLock<Vec<CheckableItem<V>>>,
    equality: ValueEq<V>,
    duplicates: DuplicatePolicy,
    signals: ListDataSignals,
}

impl<V: PartialEq + Clone + Send + Sync + 'static> CheckListModel<V> {
    /// Creates an empty model using `PartialEq` for value lookups.
    pub fn new() -> Self {
        Self::from_values(Vec::new())
    }

    /// Creates a model holding `values` in order, all unchecked.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::with_equality(values, |a: &V, b: &V| a == b)
    }
}

impl<V: PartialEq + Clone + Send + Sync + 'static> Default for CheckListModel<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync + 'static> CheckListModel<V> {
    /// Creates a model holding `values` with a custom equality function.
    ///
    /// `equality` is used by every lookup: [`index_of`](Self::index_of),
    /// [`check_value`](Self::check_value) and duplicate detection.
    pub fn with_equality<I, F>(values: I, equality: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(values.into_iter().map(CheckableItem::new).collect()),
            equality: Arc::new(equality),
            duplicates: DuplicatePolicy::default(),
            signals: ListDataSignals::new(),
        }
    }

    /// Sets how [`add_item`](Self::add_item) treats duplicate values.
    ///
    /// Values passed at construction are not checked.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Returns the duplicate policy.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &ListDataSignals {
        &self.signals
    }

    /// Attaches `listener` to all list data signals.
    pub fn connect_list_data(&self, listener: Arc<dyn ListDataListener>) -> ListDataConnection {
        self.signals.connect_listener(listener)
    }

    /// Detaches a listener attached with [`connect_list_data`](Self::connect_list_data).
    ///
    /// Returns `true` if it was still attached.
    pub fn disconnect_list_data(&self, connection: &ListDataConnection) -> bool {
        self.signals.disconnect_listener(connection)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Appends an unchecked item and returns its index.
    ///
    /// Emits `contents_changed` then `interval_added` for the new row. The row
    /// reported is the position the item was appended at, even when an equal
    /// value already exists earlier in the list.
    pub fn add_item(&self, value: V) -> Result<usize> {
        let index = {
            let mut items = self.items.write();
            if self.duplicates == DuplicatePolicy::Reject
                && let Some(existing) = self.position_in(&items, &value)
            {
                return Err(CheckListError::DuplicateValue { index: existing });
            }
            items.push(CheckableItem::new(value));
            items.len() - 1
        };

        tracing::trace!(target: targets::MODEL, index, "item added");
        self.signals.emit_rows_added(index, index);
        Ok(index)
    }

    /// Checks the item at `index` and returns its value.
    ///
    /// Checking an already checked item still emits `contents_changed`.
    pub fn check_item(&self, index: usize) -> Result<V> {
        self.update_item(index, |item| item.set_checked(true))
    }

    /// Checks the first item equal to `value`.
    ///
    /// Returns `None` without emitting anything when no item matches.
    pub fn check_value(&self, value: &V) -> Option<V> {
        // Lookup and update share one guard so the row cannot change in between.
        let (index, value, checked) = {
            let mut items = self.items.write();
            let index = self.position_in(&items, value)?;
            let (value, checked) =
                Self::update_locked(&mut items, index, |item| item.set_checked(true)).ok()?;
            (index, value, checked)
        };

        self.item_updated(index, checked);
        Some(value)
    }

    /// Flips the checked flag of the item at `index` and returns its value.
    pub fn toggle_item(&self, index: usize) -> Result<V> {
        self.update_item(index, |item| {
            item.toggle();
        })
    }

    /// Removes every item.
    ///
    /// Emits `contents_changed` then `interval_removed` covering all former
    /// rows. Clearing an empty model still notifies, with the pair `(0, 0)`,
    /// so observers refresh after every clear.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.items.write()).len();

        tracing::debug!(target: targets::MODEL, removed, "model cleared");
        self.signals.emit_rows_removed(0, removed.saturating_sub(1));
    }

    fn update_item<F>(&self, index: usize, f: F) -> Result<V>
    where
        F: FnOnce(&mut CheckableItem<V>),
    {
        let (value, checked) = Self::update_locked(&mut self.items.write(), index, f)?;
        self.item_updated(index, checked);
        Ok(value)
    }

    /// Applies `f` to the item at `index` while the caller holds the write lock.
    fn update_locked<F>(items: &mut [CheckableItem<V>], index: usize, f: F) -> Result<(V, bool)>
    where
        F: FnOnce(&mut CheckableItem<V>),
    {
        let size = items.len();
        let item = items
            .get_mut(index)
            .ok_or_else(|| CheckListError::out_of_range(index, size))?;
        f(item);
        Ok((item.value().clone(), item.is_checked()))
    }

    fn item_updated(&self, index: usize, checked: bool) {
        tracing::trace!(target: targets::MODEL, index, checked, "item updated");
        self.signals.emit_contents_changed_single(index);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns the number of items in the model.
    pub fn size(&self) -> usize {
        self.items.read().len()
    }

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the values of all checked items, in list order.
    pub fn checked_items(&self) -> Vec<V> {
        self.items
            .read()
            .iter()
            .filter(|item| item.is_checked())
            .map(|item| item.value().clone())
            .collect()
    }

    /// Returns the number of checked items.
    pub fn checked_count(&self) -> usize {
        self.items
            .read()
            .iter()
            .filter(|item| item.is_checked())
            .count()
    }

    /// Returns `true` if the item at `index` is checked.
    pub fn is_checked(&self, index: usize) -> Result<bool> {
        let items = self.items.read();
        items
            .get(index)
            .map(CheckableItem::is_checked)
            .ok_or_else(|| CheckListError::out_of_range(index, items.len()))
    }

    /// Returns the value at `index`.
    pub fn element_at(&self, index: usize) -> Result<V> {
        let size = self.size();
        self.get(index)
            .ok_or_else(|| CheckListError::out_of_range(index, size))
    }

    /// Returns the value at `index`, or `None` if there is no such row.
    pub fn get(&self, index: usize) -> Option<V> {
        self.items.read().get(index).map(|item| item.value().clone())
    }

    /// Returns a snapshot of the item at `index` (value and checked flag).
    pub fn item_at(&self, index: usize) -> Result<CheckableItem<V>> {
        let items = self.items.read();
        items
            .get(index)
            .cloned()
            .ok_or_else(|| CheckListError::out_of_range(index, items.len()))
    }

    /// Returns the index of the first item equal to `value`.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.position_in(&self.items.read(), value)
    }

    /// Returns `true` if an item equal to `value` exists.
    pub fn contains(&self, value: &V) -> bool {
        self.index_of(value).is_some()
    }

    fn position_in(&self, items: &[CheckableItem<V>], value: &V) -> Option<usize> {
        items
            .iter()
            .position(|item| (self.equality)(item.value(), value))
    }
}

impl<V: fmt::Debug> fmt::Debug for CheckListModel<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckListModel")
            .field("items", &*self.items.read())
            .field("duplicates", &self.duplicates)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(CheckListModel<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn abc() -> CheckListModel<&'static str> {
        CheckListModel::from_values(["a", "b", "c"])
    }

    type Events = Arc<Mutex<Vec<(&'static str, usize, usize)>>>;

    fn record(model: &CheckListModel<&'static str>) -> Events {
        let events = Arc::new(Mutex::new(Vec::new()));

        let recv = events.clone();
        model
            .signals()
            .contents_changed
            .connect(move |&(first, last)| recv.lock().push(("contents", first, last)));
        let recv = events.clone();
        model
            .signals()
            .interval_added
            .connect(move |&(first, last)| recv.lock().push(("added", first, last)));
        let recv = events.clone();
        model
            .signals()
            .interval_removed
            .connect(move |&(first, last)| recv.lock().push(("removed", first, last)));

        events
    }

    #[test]
    fn test_from_values_starts_unchecked() {
        let model = abc();
        assert_eq!(model.size(), 3);
        assert!(!model.is_empty());
        for index in 0..3 {
            assert_eq!(model.is_checked(index), Ok(false));
        }
        assert!(model.checked_items().is_empty());
    }

    #[test]
    fn test_toggle_item() {
        let model = abc();
        let events = record(&model);

        assert_eq!(model.toggle_item(1), Ok("b"));
        assert_eq!(model.is_checked(1), Ok(true));
        assert_eq!(model.checked_items(), vec!["b"]);

        assert_eq!(model.toggle_item(1), Ok("b"));
        assert_eq!(model.is_checked(1), Ok(false));
        assert!(model.checked_items().is_empty());

        assert_eq!(*events.lock(), vec![("contents", 1, 1), ("contents", 1, 1)]);
    }

    #[test]
    fn test_check_item_is_idempotent_but_notifies() {
        let model = abc();
        let events = record(&model);

        assert_eq!(model.check_item(0), Ok("a"));
        assert_eq!(model.check_item(0), Ok("a"));
        assert_eq!(model.is_checked(0), Ok(true));
        assert_eq!(model.checked_count(), 1);
        assert_eq!(events.lock().len(), 2);
    }

    #[test]
    fn test_check_value() {
        let model = abc();
        let events = record(&model);

        assert_eq!(model.check_value(&"c"), Some("c"));
        assert_eq!(model.is_checked(2), Ok(true));

        assert_eq!(model.check_value(&"z"), None);
        assert_eq!(model.checked_items(), vec!["c"]);
        assert_eq!(*events.lock(), vec![("contents", 2, 2)]);
    }

    #[test]
    fn test_out_of_range_fails_without_notifying() {
        let model = abc();
        let events = record(&model);
        let err = CheckListError::out_of_range(3, 3);

        assert_eq!(model.check_item(3), Err(err.clone()));
        assert_eq!(model.toggle_item(3), Err(err.clone()));
        assert_eq!(model.is_checked(3), Err(err.clone()));
        assert_eq!(model.element_at(3), Err(err));
        assert_eq!(model.get(3), None);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_add_item() {
        let model = CheckListModel::new();
        let events = record(&model);

        assert_eq!(model.add_item("d"), Ok(0));
        assert_eq!(model.size(), 1);
        assert_eq!(model.element_at(0), Ok("d"));
        assert_eq!(model.is_checked(0), Ok(false));
        assert_eq!(*events.lock(), vec![("contents", 0, 0), ("added", 0, 0)]);
    }

    #[test]
    fn test_add_duplicate_reports_appended_row() {
        let model = abc();
        let events = record(&model);

        assert_eq!(model.add_item("a"), Ok(3));
        assert_eq!(*events.lock(), vec![("contents", 3, 3), ("added", 3, 3)]);
        // Lookups still resolve to the first match.
        assert_eq!(model.index_of(&"a"), Some(0));
    }

    #[test]
    fn test_reject_duplicates() {
        let model = abc().with_duplicate_policy(DuplicatePolicy::Reject);
        let events = record(&model);

        assert_eq!(
            model.add_item("b"),
            Err(CheckListError::DuplicateValue { index: 1 })
        );
        assert_eq!(model.size(), 3);
        assert!(events.lock().is_empty());

        assert_eq!(model.add_item("d"), Ok(3));
    }

    #[test]
    fn test_clear() {
        let model = abc();
        model.check_item(0).unwrap();
        let events = record(&model);

        model.clear();
        assert_eq!(model.size(), 0);
        assert!(model.checked_items().is_empty());
        assert_eq!(*events.lock(), vec![("contents", 0, 2), ("removed", 0, 2)]);
    }

    #[test]
    fn test_clear_empty_model_still_notifies() {
        let model = CheckListModel::<&'static str>::new();
        let events = record(&model);

        model.clear();
        assert!(model.is_empty());
        assert_eq!(*events.lock(), vec![("contents", 0, 0), ("removed", 0, 0)]);
    }

    #[test]
    fn test_custom_equality() {
        let model = CheckListModel::with_equality(
            vec!["Apple".to_string(), "Banana".to_string()],
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        );

        assert_eq!(model.index_of(&"BANANA".to_string()), Some(1));
        assert_eq!(
            model.check_value(&"apple".to_string()),
            Some("Apple".to_string())
        );
        assert!(model.contains(&"banana".to_string()));
    }

    #[test]
    fn test_slot_can_query_model() {
        let model = Arc::new(abc());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&model);
        let recv = seen.clone();
        model.signals().contents_changed.connect(move |&(first, _)| {
            if let Some(model) = weak.upgrade() {
                recv.lock().push(model.is_checked(first));
            }
        });

        model.toggle_item(2).unwrap();
        assert_eq!(*seen.lock(), vec![Ok(true)]);
    }

    #[test]
    fn test_item_at_snapshot() {
        let model = abc();
        model.toggle_item(1).unwrap();

        let item = model.item_at(1).unwrap();
        assert_eq!(*item.value(), "b");
        assert!(item.is_checked());
        assert!(model.item_at(5).is_err());
    }
}
