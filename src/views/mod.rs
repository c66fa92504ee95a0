//! The container and its derived views.
//!
//! [`ViewSet`] owns a set of unique integers together with three ordered
//! views over it:
//!
//! - **ascending**: every element, strictly ascending
//! - **side-cross**: smallest, largest, second smallest, second largest, ...
//! - **prime**: the elements whose magnitude is prime, strictly ascending
//!
//! The ascending view is the single source of truth. The prime view is kept
//! in step with it on every insertion and removal, and the side-cross view is
//! rebuilt from it in full after every structural change.
//!
//! Views store element values. Values are unique within the set, so a value
//! is a stable handle to its element that survives insertions and removals of
//! other elements.
//!
//! # Examples
//!
//! ```rust
//! use viewset::ViewSet;
//!
//! let mut set = ViewSet::new();
//! for value in [7, 3, 2, 9, 4] {
//!     set.add_element(value);
//! }
//!
//! assert_eq!(set.ascending().values().collect::<Vec<_>>(), vec![2, 3, 4, 7, 9]);
//! assert_eq!(set.side_cross().values().collect::<Vec<_>>(), vec![2, 9, 3, 7, 4]);
//! assert_eq!(set.prime().values().collect::<Vec<_>>(), vec![2, 3, 7]);
//! ```
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `add_element`    | O(n)       |
//! | `remove_element` | O(n)       |
//! | `contains`       | O(1) avg   |
//! | `size`           | O(1)       |
//! | cursor `value`   | O(1)       |
//! | cursor `advance` | O(1)       |

mod kind;
mod side_cross;

pub use kind::{Ascending, Prime, SideCross, View, ViewKind};

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::cursor::{AscendingCursor, Cursor, PrimeCursor, SideCrossCursor};
use crate::error::ViewSetError;
use crate::primality::is_prime;

use side_cross::side_cross_order;

/// Number of elements each view stores inline before spilling to the heap.
pub(crate) const INLINE_CAPACITY: usize = 8;

type ViewBuffer = SmallVec<[i64; INLINE_CAPACITY]>;

#[cfg(feature = "fxhash")]
type ElementSet = rustc_hash::FxHashSet<i64>;

#[cfg(not(feature = "fxhash"))]
type ElementSet = std::collections::HashSet<i64>;

/// Shared state behind a [`ViewSet`] and every cursor bound to it.
///
/// Cursors read through the same cell the container mutates, so every read
/// observes the current views rather than a snapshot.
pub(crate) type SharedState = Rc<RefCell<ViewState>>;

/// The canonical element set and the three views derived from it.
#[derive(Clone, Default)]
pub(crate) struct ViewState {
    elements: ElementSet,
    ascending: ViewBuffer,
    side_cross: ViewBuffer,
    prime: ViewBuffer,
}

impl ViewState {
    fn with_capacity(capacity: usize) -> Self {
        let mut elements = ElementSet::default();
        elements.reserve(capacity);
        Self {
            elements,
            ascending: ViewBuffer::with_capacity(capacity),
            side_cross: ViewBuffer::with_capacity(capacity),
            prime: ViewBuffer::new(),
        }
    }

    /// Returns the current contents of one view.
    pub(crate) fn view(&self, kind: ViewKind) -> &[i64] {
        match kind {
            ViewKind::Ascending => &self.ascending,
            ViewKind::SideCross => &self.side_cross,
            ViewKind::Prime => &self.prime,
        }
    }

    fn insert(&mut self, value: i64) -> bool {
        if !self.elements.insert(value) {
            return false;
        }

        let position = self.ascending.partition_point(|&element| element < value);
        self.ascending.insert(position, value);

        if is_prime(value) {
            let position = self.prime.partition_point(|&element| element < value);
            self.prime.insert(position, value);
        }

        self.rebuild_side_cross();
        true
    }

    fn remove(&mut self, value: i64) -> Result<(), ViewSetError> {
        if !self.elements.remove(&value) {
            return Err(ViewSetError::NotFound { value });
        }

        if let Ok(position) = self.prime.binary_search(&value) {
            self.prime.remove(position);
        }
        if let Ok(position) = self.ascending.binary_search(&value) {
            self.ascending.remove(position);
        }

        self.rebuild_side_cross();
        Ok(())
    }

    fn rebuild_side_cross(&mut self) {
        self.side_cross = side_cross_order(&self.ascending);
        tracing::debug!(length = self.side_cross.len(), "side-cross view rebuilt");
    }

    #[cfg(test)]
    fn invariants_hold(&self) -> bool {
        let ascending_matches_elements = self.ascending.windows(2).all(|pair| pair[0] < pair[1])
            && self.ascending.len() == self.elements.len()
            && self.ascending.iter().all(|value| self.elements.contains(value));

        let expected_prime: Vec<i64> = self
            .ascending
            .iter()
            .copied()
            .filter(|&value| is_prime(value))
            .collect();

        ascending_matches_elements
            && self.prime.as_slice() == expected_prime.as_slice()
            && self.side_cross.as_slice() == side_cross_order(&self.ascending).as_slice()
    }
}

/// A set of unique integers with three synchronized traversal views.
///
/// `ViewSet` is the sole owner of its elements and views. Cursors obtained
/// from it (see [`Cursor`]) hold a shared binding to its state plus an
/// offset, and read the view at every dereference. Mutating the set while
/// cursors are live is allowed: a cursor's offset stays valid positionally,
/// but the value found at that offset is whatever occupies it after the
/// mutation.
///
/// Cloning a `ViewSet` copies its elements into a new, independent
/// container. Cursors of the clone are not comparable with cursors of the
/// original.
///
/// # Examples
///
/// ```rust
/// use viewset::ViewSet;
///
/// let mut set: ViewSet = [7, 3, 2, 9, 4].into_iter().collect();
/// set.remove_element(3).unwrap();
///
/// assert_eq!(set.size(), 4);
/// assert_eq!(set.side_cross().values().collect::<Vec<_>>(), vec![2, 9, 4, 7]);
/// ```
pub struct ViewSet {
    state: SharedState,
}

impl ViewSet {
    /// Creates a new empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::ViewSet;
    ///
    /// let set = ViewSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(ViewState::default())
    }

    /// Creates a new empty container with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_state(ViewState::with_capacity(capacity))
    }

    fn from_state(state: ViewState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was inserted and `false` if it was already
    /// present, in which case nothing changes.
    ///
    /// # Complexity
    ///
    /// O(n): binary search for the insertion points plus a full side-cross
    /// rebuild.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::ViewSet;
    ///
    /// let mut set = ViewSet::new();
    /// assert!(set.add_element(5));
    /// assert!(!set.add_element(5));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn add_element(&mut self, value: i64) -> bool {
        let inserted = self.state.borrow_mut().insert(value);
        if inserted {
            tracing::trace!(value, "element inserted");
        } else {
            tracing::trace!(value, "element already present");
        }
        inserted
    }

    /// Removes `value` from the set.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::NotFound`] if `value` is not in the set. The
    /// lookup happens before any mutation, so the set is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::{ViewSet, ViewSetError};
    ///
    /// let mut set: ViewSet = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.remove_element(2), Ok(()));
    /// assert_eq!(set.remove_element(2), Err(ViewSetError::NotFound { value: 2 }));
    /// ```
    pub fn remove_element(&mut self, value: i64) -> Result<(), ViewSetError> {
        self.state
            .borrow_mut()
            .remove(value)
            .inspect(|_| tracing::trace!(value, "element removed"))
            .inspect_err(|error| tracing::debug!(value, %error, "remove rejected"))
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub fn size(&self) -> usize {
        self.state.borrow().elements.len()
    }

    /// Returns the number of elements in the set. Same as [`ViewSet::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().elements.is_empty()
    }

    /// Returns `true` if `value` is in the set.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.state.borrow().elements.contains(&value)
    }

    /// Returns the current length of one view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::{ViewKind, ViewSet};
    ///
    /// let set: ViewSet = [4, 5, 6, 7].into_iter().collect();
    /// assert_eq!(set.view_len(ViewKind::SideCross), 4);
    /// assert_eq!(set.view_len(ViewKind::Prime), 2);
    /// ```
    #[must_use]
    pub fn view_len(&self, kind: ViewKind) -> usize {
        self.state.borrow().view(kind).len()
    }

    /// Copies one view as it is right now.
    ///
    /// Unlike a cursor walk, the returned vector does not change when the set
    /// is mutated afterwards.
    #[must_use]
    pub fn snapshot(&self, kind: ViewKind) -> Vec<i64> {
        self.state.borrow().view(kind).to_vec()
    }

    /// Returns a cursor at the start of the view selected by `V`.
    #[must_use]
    pub fn cursor<V: View>(&self) -> Cursor<V> {
        Cursor::new(self)
    }

    /// Returns a cursor at the start of the ascending view.
    #[must_use]
    pub fn ascending(&self) -> AscendingCursor {
        self.cursor()
    }

    /// Returns a cursor at the start of the side-cross view.
    #[must_use]
    pub fn side_cross(&self) -> SideCrossCursor {
        self.cursor()
    }

    /// Returns a cursor at the start of the prime view.
    #[must_use]
    pub fn prime(&self) -> PrimeCursor {
        self.cursor()
    }

    pub(crate) const fn shared_state(&self) -> &SharedState {
        &self.state
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ViewSet {
    fn clone(&self) -> Self {
        Self::from_state(self.state.borrow().clone())
    }
}

impl std::fmt::Debug for ViewSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_set()
            .entries(self.state.borrow().ascending.iter())
            .finish()
    }
}

impl PartialEq for ViewSet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
            || self.state.borrow().ascending == other.state.borrow().ascending
    }
}

impl Eq for ViewSet {}

impl FromIterator<i64> for ViewSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for ViewSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.add_element(value);
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ViewSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let state = self.state.borrow();
        let mut sequence = serializer.serialize_seq(Some(state.ascending.len()))?;
        for value in &state.ascending {
            sequence.serialize_element(value)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct ViewSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ViewSetVisitor {
    type Value = ViewSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut set = ViewSet::with_capacity(capacity);
        while let Some(value) = access.next_element::<i64>()? {
            set.add_element(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ViewSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ViewSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn view_of(set: &ViewSet, kind: ViewKind) -> Vec<i64> {
        set.snapshot(kind)
    }

    #[rstest]
    fn test_new_has_empty_views() {
        let set = ViewSet::new();
        for kind in ViewKind::ALL {
            assert_eq!(set.view_len(kind), 0);
        }
        assert!(set.state.borrow().invariants_hold());
    }

    #[rstest]
    fn test_insert_keeps_invariants_across_inline_spill() {
        let mut set = ViewSet::new();
        for value in [15, -3, 8, 2, 11, 0, 7, -13, 4, 9, 1, 6] {
            set.add_element(value);
            assert!(set.state.borrow().invariants_hold(), "after adding {value}");
        }
        assert_eq!(set.size(), 12);
        assert!(set.state.borrow().ascending.spilled());
    }

    #[rstest]
    fn test_remove_keeps_invariants_down_to_empty() {
        let mut set: ViewSet = (-5..=10).collect();
        for value in [3, -5, 10, 0, 7, 2, -1, 4, 1, 5, 6, 8, 9, -2, -3, -4] {
            set.remove_element(value).unwrap();
            assert!(set.state.borrow().invariants_hold(), "after removing {value}");
        }
        assert!(set.is_empty());
        for kind in ViewKind::ALL {
            assert_eq!(set.view_len(kind), 0);
        }
    }

    #[rstest]
    fn test_negative_primes_enter_prime_view() {
        let set: ViewSet = [-7, -4, -2, 0, 1, 3].into_iter().collect();
        assert_eq!(view_of(&set, ViewKind::Prime), vec![-7, -2, 3]);
    }

    #[rstest]
    fn test_remove_missing_leaves_state_untouched() {
        let mut set: ViewSet = [2, 3, 4].into_iter().collect();
        let before = set.state.borrow().clone();

        assert_eq!(
            set.remove_element(5),
            Err(ViewSetError::NotFound { value: 5 })
        );

        let after = set.state.borrow();
        assert_eq!(before.ascending, after.ascending);
        assert_eq!(before.side_cross, after.side_cross);
        assert_eq!(before.prime, after.prime);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original: ViewSet = [1, 2, 3].into_iter().collect();
        let copy = original.clone();
        original.add_element(4);

        assert_eq!(copy.size(), 3);
        assert_eq!(original.size(), 4);
        assert!(!Rc::ptr_eq(&original.state, &copy.state));
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left: ViewSet = [3, 1, 2].into_iter().collect();
        let right: ViewSet = [1, 2, 3, 2].into_iter().collect();
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_debug_lists_ascending_elements() {
        let set: ViewSet = [9, -1, 4].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{-1, 4, 9}");
    }
}
