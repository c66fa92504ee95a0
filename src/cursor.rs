//! Position markers over the views of a [`ViewSet`].
//!
//! A [`Cursor`] is a container binding plus an integer offset into one view.
//! It never owns or copies view data: [`Cursor::value`] reads the bound view
//! at call time, so a cursor held across a mutation observes whatever now
//! occupies its offset.
//!
//! The view is chosen at the type level through a [`View`] selector, with
//! one alias per view:
//!
//! - [`AscendingCursor`] = `Cursor<Ascending>`
//! - [`SideCrossCursor`] = `Cursor<SideCross>`
//! - [`PrimeCursor`] = `Cursor<Prime>`
//!
//! # State
//!
//! A cursor's offset ranges over `0..=len`, where `len` is the bound view's
//! current length. Offset `len` is the end position: it cannot be
//! dereferenced or advanced.
//!
//! ```text
//!      advance          advance                advance
//!   0 ────────► 1 ────────► ... ────────► len (end)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use viewset::{ViewSet, ViewSetError};
//!
//! let set: ViewSet = [7, 3, 2, 9, 4].into_iter().collect();
//!
//! let mut cursor = set.side_cross();
//! let end = cursor.end();
//! let mut visited = Vec::new();
//! while cursor.try_ne(&end)? {
//!     visited.push(cursor.value()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(visited, vec![2, 9, 3, 7, 4]);
//! # Ok::<(), ViewSetError>(())
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::ViewSetError;
use crate::views::{Ascending, Prime, SharedState, SideCross, View, ViewKind, ViewSet};

/// Cursor over the ascending view.
pub type AscendingCursor = Cursor<Ascending>;

/// Cursor over the side-cross view.
pub type SideCrossCursor = Cursor<SideCross>;

/// Cursor over the prime view.
pub type PrimeCursor = Cursor<Prime>;

/// A position in one view of a [`ViewSet`].
///
/// Cursors from the same container can be compared by offset. Comparing
/// cursors from different containers fails with
/// [`ViewSetError::IncomparableCursors`], which is why comparisons are
/// exposed as `try_*` methods instead of `PartialEq`/`PartialOrd`.
///
/// Cloning a cursor keeps its binding and offset.
pub struct Cursor<V: View> {
    state: SharedState,
    offset: usize,
    view: PhantomData<V>,
}

impl<V: View> Cursor<V> {
    /// Creates a cursor at the start of the view, bound to `container`.
    #[must_use]
    pub fn new(container: &ViewSet) -> Self {
        Self::at(container, 0)
    }

    /// Creates a cursor at `offset`, bound to `container`.
    ///
    /// The offset is not checked here. A cursor past the end of its view
    /// fails on [`Cursor::value`] and [`Cursor::advance`].
    #[must_use]
    pub fn at(container: &ViewSet, offset: usize) -> Self {
        Self::bound(Rc::clone(container.shared_state()), offset)
    }

    const fn bound(state: SharedState, offset: usize) -> Self {
        Self {
            state,
            offset,
            view: PhantomData,
        }
    }

    /// Returns the view this cursor reads.
    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        V::KIND
    }

    /// Returns the cursor's offset into its view.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if this cursor is bound to `container`.
    #[must_use]
    pub fn is_bound_to(&self, container: &ViewSet) -> bool {
        Rc::ptr_eq(&self.state, container.shared_state())
    }

    /// Returns a cursor at offset 0 over the same container and view.
    #[must_use]
    pub fn begin(&self) -> Self {
        Self::bound(Rc::clone(&self.state), 0)
    }

    /// Returns a cursor at the view's length as of this call.
    ///
    /// The end position is not tracked afterwards: if the view grows, a
    /// previously obtained end cursor stays at the old length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::ViewSet;
    ///
    /// let mut set: ViewSet = [1, 2].into_iter().collect();
    /// let end = set.ascending().end();
    /// set.add_element(3);
    ///
    /// assert_eq!(end.offset(), 2);
    /// assert_eq!(set.ascending().end().offset(), 3);
    /// ```
    #[must_use]
    pub fn end(&self) -> Self {
        Self::bound(Rc::clone(&self.state), self.view_len())
    }

    /// Returns the value at the cursor's offset, read from the current view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::OutOfRange`] if the offset is at or past the
    /// view's current length.
    pub fn value(&self) -> Result<i64, ViewSetError> {
        let state = self.state.borrow();
        let view = state.view(V::KIND);
        view.get(self.offset)
            .copied()
            .ok_or_else(|| self.out_of_range(view.len()))
    }

    /// Moves the cursor one position forward and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::OutOfRange`] if the cursor is already at or
    /// past the view's current length. The offset does not change on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use viewset::{ViewSet, ViewSetError};
    ///
    /// let set: ViewSet = [5, 6, 7].into_iter().collect();
    /// let mut cursor = set.ascending();
    ///
    /// assert_eq!(cursor.advance()?.advance()?.value()?, 7);
    /// # Ok::<(), ViewSetError>(())
    /// ```
    pub fn advance(&mut self) -> Result<&mut Self, ViewSetError> {
        let length = self.view_len();
        if self.offset >= length {
            return Err(self.out_of_range(length));
        }
        self.offset += 1;
        Ok(self)
    }

    /// Compares the offsets of two cursors over the same container.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ViewSetError> {
        self.ensure_comparable(other)?;
        Ok(self.offset.cmp(&other.offset))
    }

    /// Returns `true` if both cursors are at the same offset.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container.
    pub fn try_eq(&self, other: &Self) -> Result<bool, ViewSetError> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    /// Returns `true` if the cursors are at different offsets.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container.
    pub fn try_ne(&self, other: &Self) -> Result<bool, ViewSetError> {
        self.try_cmp(other).map(Ordering::is_ne)
    }

    /// Returns `true` if this cursor is before `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container.
    pub fn try_lt(&self, other: &Self) -> Result<bool, ViewSetError> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    /// Returns `true` if this cursor is after `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container.
    pub fn try_gt(&self, other: &Self) -> Result<bool, ViewSetError> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    /// Moves this cursor to `other`'s offset.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSetError::IncomparableCursors`] if `other` is bound to a
    /// different container. The cursor is unchanged on error.
    pub fn reposition(&mut self, other: &Self) -> Result<(), ViewSetError> {
        self.ensure_comparable(other)?;
        self.offset = other.offset;
        Ok(())
    }

    /// Returns an iterator over the view starting at this cursor's offset.
    ///
    /// Each step reads the live view. The iterator ends the first time its
    /// offset reaches the view's length and stays ended even if the view
    /// grows afterwards.
    #[must_use]
    pub fn values(&self) -> Values<V> {
        Values::new(self.clone())
    }

    fn view_len(&self) -> usize {
        self.state.borrow().view(V::KIND).len()
    }

    fn ensure_comparable(&self, other: &Self) -> Result<(), ViewSetError> {
        if Rc::ptr_eq(&self.state, &other.state) {
            Ok(())
        } else {
            Err(ViewSetError::IncomparableCursors { view: V::KIND })
        }
    }

    const fn out_of_range(&self, length: usize) -> ViewSetError {
        ViewSetError::OutOfRange {
            view: V::KIND,
            offset: self.offset,
            length,
        }
    }
}

impl<V: View> Clone for Cursor<V> {
    fn clone(&self) -> Self {
        Self::bound(Rc::clone(&self.state), self.offset)
    }
}

impl<V: View> std::fmt::Debug for Cursor<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("view", &V::KIND)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// Iterator over one view of a [`ViewSet`], created by [`Cursor::values`].
///
/// Values are read from the live view one step at a time, so mutations made
/// between steps are visible. Once `next` returns `None` the iterator is
/// fused: later growth of the view is not picked up. Start a new iterator
/// from [`Values::cursor`] to continue past the old end.
pub struct Values<V: View> {
    cursor: Cursor<V>,
    finished: bool,
}

impl<V: View> Values<V> {
    const fn new(cursor: Cursor<V>) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }

    /// Returns the cursor marking the next position to be read.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor<V> {
        &self.cursor
    }
}

impl<V: View> Iterator for Values<V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.cursor.value() {
            Ok(value) => {
                self.cursor.offset += 1;
                Some(value)
            }
            Err(_) => {
                self.finished = true;
                None
            }
        }
    }
}

impl<V: View> std::iter::FusedIterator for Values<V> {}

impl<V: View> std::fmt::Debug for Values<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Values")
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}

impl<V: View> IntoIterator for Cursor<V> {
    type Item = i64;
    type IntoIter = Values<V>;

    fn into_iter(self) -> Self::IntoIter {
        Values::new(self)
    }
}

static_assertions::assert_not_impl_any!(AscendingCursor: Send, Sync);
static_assertions::assert_not_impl_any!(SideCrossCursor: Send, Sync);
static_assertions::assert_not_impl_any!(PrimeCursor: Send, Sync);
static_assertions::assert_not_impl_any!(ViewSet: Send, Sync);
