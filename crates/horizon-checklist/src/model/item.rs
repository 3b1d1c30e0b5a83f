//! A single checkable entry of a check list.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A value paired with a checked flag.
///
/// Equality and hashing look at the value only. Two items wrapping equal
/// values compare equal regardless of their checked state, so an item can be
/// used as a lookup key for its value. Nullable values are expressed as
/// `Option<T>`: two `None` values are equal, `None` and `Some(_)` are not.
///
/// # Example
///
/// ```
/// use horizon_checklist::model::CheckableItem;
///
/// let mut a = CheckableItem::new("apple");
/// let b = CheckableItem::new("apple");
///
/// a.set_checked(true);
/// assert!(a.is_checked());
/// assert!(!b.is_checked());
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct CheckableItem<V> {
    value: V,
    checked: bool,
}

impl<V> CheckableItem<V> {
    /// Creates an unchecked item wrapping `value`.
    pub fn new(value: V) -> Self {
        Self {
            value,
            checked: false,
        }
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the item and returns the wrapped value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns `true` if the item is checked.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the checked flag.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flips the checked flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl<V: PartialEq> PartialEq for CheckableItem<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for CheckableItem<V> {}

impl<V: Hash> Hash for CheckableItem<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for CheckableItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<V> From<V> for CheckableItem<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}
