//! Selectors naming the three derived views.

use std::fmt;

/// Identifies one of the three derived orderings of a [`ViewSet`](super::ViewSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// All elements, strictly ascending.
    Ascending,
    /// Smallest, largest, second smallest, second largest, and so on.
    SideCross,
    /// The prime elements, strictly ascending.
    Prime,
}

impl ViewKind {
    /// Every view kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Ascending, Self::SideCross, Self::Prime];

    /// Returns the human-readable name used in error messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::SideCross => "side-cross",
            Self::Prime => "prime",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level selector binding a [`Cursor`](crate::cursor::Cursor) to one view.
///
/// This trait is sealed; the only implementors are [`Ascending`],
/// [`SideCross`] and [`Prime`].
pub trait View: sealed::Sealed + 'static {
    /// The view this selector reads.
    const KIND: ViewKind;
}

/// Selects the ascending view.
#[derive(Debug)]
pub enum Ascending {}

/// Selects the side-cross view.
#[derive(Debug)]
pub enum SideCross {}

/// Selects the prime view.
#[derive(Debug)]
pub enum Prime {}

impl sealed::Sealed for Ascending {}
impl sealed::Sealed for SideCross {}
impl sealed::Sealed for Prime {}

impl View for Ascending {
    const KIND: ViewKind = ViewKind::Ascending;
}

impl View for SideCross {
    const KIND: ViewKind = ViewKind::SideCross;
}

impl View for Prime {
    const KIND: ViewKind = ViewKind::Prime;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_selectors_map_to_kinds() {
        assert_eq!(Ascending::KIND, ViewKind::Ascending);
        assert_eq!(SideCross::KIND, ViewKind::SideCross);
        assert_eq!(Prime::KIND, ViewKind::Prime);
    }

    #[rstest]
    fn test_display_uses_name() {
        let names: Vec<String> = ViewKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["ascending", "side-cross", "prime"]);
    }
}
