//! Runtime shapes exposed by orderable values.
//!
//! The [`Shape`] enum is the tagged view of a value that the comparator walks.
//! Scalars carry their value directly; compounds hand out their components
//! through the [`Compound`] trait; indirection layers point at the value
//! they wrap and are stripped by [`normalize`](crate::normalize).

use std::cmp::Ordering;
use std::fmt;

use crate::class::{Class, CompoundKind, ScalarKind};
use crate::traits::{Compound, Orderable};

/// Structural view of a value, borrowed from the value itself.
///
/// # Example
///
/// ```
/// use structsort::{Number, Orderable, Shape};
///
/// assert!(matches!(7u8.shape(), Shape::Number(Number::U8(7))));
/// assert!(matches!("abc".shape(), Shape::Text("abc")));
/// assert!(matches!(true.shape(), Shape::Unorderable));
/// ```
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// Integer or floating-point value.
    Number(Number),
    /// Text value (borrowed).
    Text(&'a str),
    /// Record-like value: named or positional fields.
    Record(&'a dyn Compound),
    /// Sequence-like value: positional elements.
    Sequence(&'a dyn Compound),
    /// An indirection layer around another orderable value.
    Indirect(&'a dyn Orderable),
    /// No natural order: booleans, absent pointers, unsupported values.
    Unorderable,
}

impl<'a> Shape<'a> {
    /// Returns `true` if this is an `Unorderable` shape.
    pub fn is_unorderable(&self) -> bool {
        matches!(self, Shape::Unorderable)
    }

    /// Returns `true` if this shape is an indirection layer.
    pub fn is_indirect(&self) -> bool {
        matches!(self, Shape::Indirect(_))
    }

    /// Returns `true` for record and sequence shapes.
    pub fn is_compound(&self) -> bool {
        matches!(self, Shape::Record(_) | Shape::Sequence(_))
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Shape::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Shape::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the components of a record or sequence, if present.
    pub fn as_compound(&self) -> Option<&'a dyn Compound> {
        match self {
            Shape::Record(c) | Shape::Sequence(c) => Some(*c),
            _ => None,
        }
    }

    /// Classifies this shape without looking through indirection.
    ///
    /// `Indirect` shapes classify as [`Class::Dynamic`]; normalize first to
    /// learn what they point at.
    pub fn class(&self) -> Class {
        match self {
            Shape::Number(n) => Class::Scalar(n.kind()),
            Shape::Text(_) => Class::Scalar(ScalarKind::Text),
            Shape::Record(_) => Class::Compound(CompoundKind::Record),
            Shape::Sequence(_) => Class::Compound(CompoundKind::Sequence),
            Shape::Indirect(_) => Class::Dynamic,
            Shape::Unorderable => Class::Unorderable,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Shape::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Shape::Record(c) => f
                .debug_struct("Record")
                .field("components", &c.component_count())
                .finish(),
            Shape::Sequence(c) => f
                .debug_struct("Sequence")
                .field("components", &c.component_count())
                .finish(),
            Shape::Indirect(_) => f.write_str("Indirect"),
            Shape::Unorderable => f.write_str("Unorderable"),
        }
    }
}

/// Numeric value, tagged with its concrete primitive type.
///
/// Only values of the same primitive type compare: an `i32` and an `i64`
/// are different concrete types and contribute no ordering information,
/// and neither do an `f32` and an `f64`. `char` orders by code point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
}

impl Number {
    /// Returns the scalar kind of this number.
    pub fn kind(self) -> ScalarKind {
        match self {
            Number::I8(_)
            | Number::I16(_)
            | Number::I32(_)
            | Number::I64(_)
            | Number::I128(_)
            | Number::Isize(_)
            | Number::Char(_) => ScalarKind::Signed,
            Number::U8(_)
            | Number::U16(_)
            | Number::U32(_)
            | Number::U64(_)
            | Number::U128(_)
            | Number::Usize(_) => ScalarKind::Unsigned,
            Number::F32(_) | Number::F64(_) => ScalarKind::Float,
        }
    }

    /// Compares two numbers of the same primitive type.
    ///
    /// Returns `None` when the types differ. Floats follow their natural
    /// order, except that NaN equals NaN and sorts after every other float.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        let ordering = match (self, other) {
            (Number::I8(a), Number::I8(b)) => a.cmp(&b),
            (Number::I16(a), Number::I16(b)) => a.cmp(&b),
            (Number::I32(a), Number::I32(b)) => a.cmp(&b),
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::I128(a), Number::I128(b)) => a.cmp(&b),
            (Number::Isize(a), Number::Isize(b)) => a.cmp(&b),
            (Number::U8(a), Number::U8(b)) => a.cmp(&b),
            (Number::U16(a), Number::U16(b)) => a.cmp(&b),
            (Number::U32(a), Number::U32(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::U128(a), Number::U128(b)) => a.cmp(&b),
            (Number::Usize(a), Number::Usize(b)) => a.cmp(&b),
            (Number::F32(a), Number::F32(b)) => compare_floats(f64::from(a), f64::from(b)),
            (Number::F64(a), Number::F64(b)) => compare_floats(a, b),
            (Number::Char(a), Number::Char(b)) => a.cmp(&b),
            _ => return None,
        };
        Some(ordering)
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Neither is NaN, so partial_cmp is total here.
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// Conversions from primitive types
macro_rules! from_primitive {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }
        )+
    };
}

from_primitive!(
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
);
