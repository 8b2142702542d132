//! Classification of element types.
//!
//! A sequence is classified once per [`order`](crate::order) call from its
//! declared element type. Types whose structure is only known at runtime
//! (pointers and polymorphic containers) declare [`Class::Dynamic`] and are
//! resolved value by value.

use std::fmt;

use crate::normalize::normalize;
use crate::traits::Orderable;
use crate::Limits;

/// Scalar families with a natural less-than.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed integers (`i8` to `i128`, `isize`, `char`).
    Signed,
    /// Unsigned integers (`u8` to `u128`, `usize`).
    Unsigned,
    /// Floating point (`f32`, `f64`).
    Float,
    /// Text (`str`, `String`).
    Text,
}

/// Compound shapes, decomposed into components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundKind {
    /// Named or positional fields (structs, tuples).
    Record,
    /// Positional elements (vectors, arrays, deques).
    Sequence,
}

/// Result of classifying a type or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// No natural order is defined.
    Unorderable,
    /// Directly comparable scalar.
    Scalar(ScalarKind),
    /// Record-like or sequence-like compound.
    Compound(CompoundKind),
    /// Structure depends on the runtime value.
    Dynamic,
}

impl Class {
    /// Returns `true` if values of this class can be ordered at all.
    pub fn is_orderable(self) -> bool {
        !matches!(self, Class::Unorderable)
    }

    /// Returns the display name of this class.
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Unorderable => "unorderable",
            Class::Scalar(ScalarKind::Signed) => "signed",
            Class::Scalar(ScalarKind::Unsigned) => "unsigned",
            Class::Scalar(ScalarKind::Float) => "float",
            Class::Scalar(ScalarKind::Text) => "text",
            Class::Compound(CompoundKind::Record) => "record",
            Class::Compound(CompoundKind::Sequence) => "sequence",
            Class::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the elements of a sequence.
///
/// Statically classified element types are answered from
/// [`Orderable::declared_class`] without touching the values. For
/// [`Class::Dynamic`] element types every value is normalized: the sequence
/// is `Unorderable` only if every element is, otherwise it stays `Dynamic`.
pub fn classify<E: Orderable>(items: &[E], limits: &Limits) -> Class {
    match E::declared_class() {
        Class::Dynamic => {
            let any_orderable = items
                .iter()
                .any(|item| !normalize(item.shape(), limits).is_unorderable());
            if any_orderable {
                Class::Dynamic
            } else {
                Class::Unorderable
            }
        }
        class => class,
    }
}
