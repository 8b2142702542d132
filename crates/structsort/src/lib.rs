//! Structsort - natural ordering for arbitrary Rust values.
//!
//! Structsort sorts slices in place without a caller-supplied comparator.
//! The order is inferred from the structure of the elements:
//!
//! - Integers, floats and text compare by their natural less-than, but only
//!   against values of the same primitive type
//! - Records (structs, tuples) compare field by field
//! - Sequences (vectors, arrays, deques) compare element by element, then by
//!   length
//! - Pointers, `Option` and boxed trait objects are looked through
//!
//! # Quick Start
//!
//! ```rust
//! use structsort::Orderable;
//!
//! #[derive(Debug, PartialEq, Orderable)]
//! struct Point {
//!     x: i32,
//!     y: f64,
//!     z: String,
//! }
//!
//! let mut points = vec![
//!     Point { x: 1, y: 2.0, z: "3".into() },
//!     Point { x: 0, y: 1.0, z: "2".into() },
//!     Point { x: 0, y: 0.0, z: "1".into() },
//! ];
//!
//! structsort::order(&mut points);
//! assert_eq!(points[0].z, "1");
//! assert_eq!(points[2].x, 1);
//!
//! let mut rows = vec![vec![1, 2, 3], vec![0, 5, 6], vec![0, 0, 9]];
//! structsort::order(&mut rows);
//! assert_eq!(rows, vec![vec![0, 0, 9], vec![0, 5, 6], vec![1, 2, 3]]);
//! ```
//!
//! # Ordering Semantics
//!
//! Two compounds with `n` shared components are compared like this:
//!
//! ```text
//! for i in 0..n:
//!     strip indirection from both components
//!     types differ or unorderable   -> next component
//!     scalars differ                -> that is the answer
//!     compounds                     -> recurse, answer if not equal
//! fewer components orders first
//! ```
//!
//! Nothing in this process fails. An element type without a natural order
//! (such as `bool`) leaves the slice untouched, and component pairs that
//! cannot be compared simply decide nothing. The resulting relation is a
//! total preorder: distinct values may compare equal. Values that compare
//! equal keep their relative order, so ordering is idempotent.
//!
//! # Element Types
//!
//! | Type | Class |
//! |------|-------|
//! | `i8`..`i128`, `isize`, `char` | signed |
//! | `u8`..`u128`, `usize` | unsigned |
//! | `f32`, `f64` | float (NaN sorts last) |
//! | `str`, `String`, `Cow<str>` | text |
//! | `#[derive(Orderable)]` structs, tuples | record |
//! | `Vec<T>`, `[T]`, `[T; N]`, `VecDeque<T>` | sequence |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Option<T>` | resolved per value |
//! | `bool`, `()` | unorderable |

extern crate self as structsort;

mod class;
mod config;
mod error;
mod lockstep;
mod normalize;
mod orderer;
mod ordering;
mod traits;
mod value;

// Re-export public API
pub use class::{classify, Class, CompoundKind, ScalarKind};
pub use config::Limits;
pub use error::{OrderError, Result};
pub use normalize::normalize;
pub use orderer::Orderer;
pub use ordering::{compare, compare_shapes, Dir};
pub use structsort_macros::Orderable;
pub use traits::{Compound, Orderable};
pub use value::{Number, Shape};

/// Orders `items` ascending in place, with default limits.
///
/// ```
/// let mut items = vec![3, 1, 2];
/// structsort::order(&mut items);
/// assert_eq!(items, vec![1, 2, 3]);
///
/// let mut flags = vec![true, false, true];
/// structsort::order(&mut flags);
/// assert_eq!(flags, vec![true, false, true]);
/// ```
pub fn order<E: Orderable>(items: &mut [E]) {
    Orderer::new().order(items);
}

/// Orders `items` descending in place, with default limits.
pub fn order_desc<E: Orderable>(items: &mut [E]) {
    Orderer::new().dir(Dir::Desc).order(items);
}

/// Returns `true` if `items` is already in ascending natural order.
pub fn is_ordered<E: Orderable>(items: &[E]) -> bool {
    Orderer::new().is_ordered(items)
}
