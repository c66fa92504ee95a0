//! Error types for container mutation and cursor access.
//!
//! Every failure in this crate is a contract violation reported to the
//! caller through [`ViewSetError`]. Nothing is retried or swallowed
//! internally, and a failed operation leaves the container and the cursor
//! exactly as they were.

use crate::views::ViewKind;

/// Represents errors that can occur when mutating a [`ViewSet`](crate::views::ViewSet)
/// or when reading, advancing and comparing a [`Cursor`](crate::cursor::Cursor).
///
/// # Examples
///
/// ```rust
/// use viewset::{ViewSet, ViewSetError};
///
/// let mut set = ViewSet::new();
/// set.add_element(7);
///
/// assert_eq!(set.remove_element(8), Err(ViewSetError::NotFound { value: 8 }));
/// assert_eq!(set.size(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ViewSetError {
    /// The value passed to `remove_element` is not a member of the set.
    #[error("element {value} not found")]
    NotFound {
        /// The value that was looked up.
        value: i64,
    },

    /// A cursor was dereferenced or advanced at or past the end of its view.
    #[error("{view} cursor at offset {offset} is out of range for a view of length {length}")]
    OutOfRange {
        /// The view the cursor is bound to.
        view: ViewKind,
        /// The cursor's offset at the time of the call.
        offset: usize,
        /// The view's length at the time of the call.
        length: usize,
    },

    /// Two cursors bound to different containers were compared or assigned.
    #[error("{view} cursors are bound to different containers and cannot be compared")]
    IncomparableCursors {
        /// The view both cursors are bound to.
        view: ViewKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_not_found_display() {
        let error = ViewSetError::NotFound { value: -3 };
        assert_eq!(format!("{error}"), "element -3 not found");
    }

    #[rstest]
    #[case(ViewKind::Ascending, "ascending cursor at offset 4 is out of range for a view of length 4")]
    #[case(ViewKind::SideCross, "side-cross cursor at offset 4 is out of range for a view of length 4")]
    #[case(ViewKind::Prime, "prime cursor at offset 4 is out of range for a view of length 4")]
    fn test_out_of_range_display(#[case] view: ViewKind, #[case] expected: &str) {
        let error = ViewSetError::OutOfRange {
            view,
            offset: 4,
            length: 4,
        };
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_incomparable_cursors_display() {
        let error = ViewSetError::IncomparableCursors {
            view: ViewKind::Prime,
        };
        assert_eq!(
            format!("{error}"),
            "prime cursors are bound to different containers and cannot be compared"
        );
    }

    #[rstest]
    fn test_error_equality() {
        assert_eq!(
            ViewSetError::NotFound { value: 1 },
            ViewSetError::NotFound { value: 1 }
        );
        assert_ne!(
            ViewSetError::NotFound { value: 1 },
            ViewSetError::NotFound { value: 2 }
        );
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ViewSetError::NotFound { value: 0 });
    }
}
