//! # viewset
//!
//! A set of unique integers that keeps three traversal orders in sync with
//! its contents, plus lightweight cursors that walk those orders.
//!
//! ## Overview
//!
//! - **[`ViewSet`]**: owns the elements and three derived views
//!   (ascending, side-cross, prime), and is the only thing that mutates them
//! - **[`Cursor`]**: a container binding plus an offset into one view, with
//!   fallible dereference, pre-increment and comparison
//! - **[`ViewSetError`]**: the contract violations reported by both
//!
//! ## Feature Flags
//!
//! - `fxhash` (default): use `rustc-hash` for the canonical element set
//! - `serde`: serialize a `ViewSet` as its ascending sequence
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use viewset::prelude::*;
//!
//! let mut set = ViewSet::new();
//! for value in [7, 3, 2, 9, 4] {
//!     set.add_element(value);
//! }
//!
//! let mut cursor = set.prime();
//! let end = cursor.end();
//! let mut primes = Vec::new();
//! while cursor.try_ne(&end)? {
//!     primes.push(cursor.value()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(primes, vec![2, 3, 7]);
//! # Ok::<(), ViewSetError>(())
//! ```
//!
//! ## Single-threaded use
//!
//! A `ViewSet` and its cursors share state through `Rc`, so neither is
//! `Send` nor `Sync`. Mutating the set while cursors are live is allowed;
//! cursors then observe positionally stable but semantically shifting
//! values (see [`cursor`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use viewset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::{AscendingCursor, Cursor, PrimeCursor, SideCrossCursor, Values};
    pub use crate::error::ViewSetError;
    pub use crate::views::{Ascending, Prime, SideCross, View, ViewKind, ViewSet};
}

pub mod cursor;
pub mod error;
pub mod primality;
pub mod views;

pub use cursor::{AscendingCursor, Cursor, PrimeCursor, SideCrossCursor, Values};
pub use error::ViewSetError;
pub use views::{Ascending, Prime, SideCross, View, ViewKind, ViewSet};
