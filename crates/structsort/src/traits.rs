//! Structural introspection traits.
//!
//! [`Orderable`] is the seam between a value and the ordering engine: it
//! reports a value's [`Shape`] and, where possible, the class of its type.
//! [`Compound`] gives indexed access to the components of records and
//! sequences. Both are usually derived with `#[derive(Orderable)]`, and are
//! implemented here for scalars, text, standard containers, tuples and
//! pointers.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::class::{Class, CompoundKind, ScalarKind};
use crate::value::{Number, Shape};

/// Trait for types whose values can be placed in a natural order.
///
/// # Derive Usage
///
/// ```
/// use structsort::Orderable;
///
/// #[derive(Orderable)]
/// struct Version {
///     major: u32,
///     minor: u32,
///     #[order(skip)]
///     label: Box<dyn Fn() -> String>,
/// }
/// ```
///
/// # Manual Implementation
///
/// ```
/// use structsort::{Class, Number, Orderable, ScalarKind, Shape};
///
/// struct Celsius(f64);
///
/// impl Orderable for Celsius {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Number(Number::F64(self.0))
///     }
///
///     fn declared_class() -> Class {
///         Class::Scalar(ScalarKind::Float)
///     }
/// }
///
/// let mut temps = vec![Celsius(21.5), Celsius(-3.0)];
/// structsort::order(&mut temps);
/// assert_eq!(temps[0].0, -3.0);
/// ```
pub trait Orderable {
    /// Returns the structural view of this value.
    fn shape(&self) -> Shape<'_>;

    /// Returns the class shared by every value of this type.
    ///
    /// The default, [`Class::Dynamic`], makes the engine inspect each value
    /// instead. Override it whenever the type alone decides the class.
    fn declared_class() -> Class
    where
        Self: Sized,
    {
        Class::Dynamic
    }
}

/// Indexed access to the components of a record or sequence.
pub trait Compound {
    /// Number of fields or elements.
    fn component_count(&self) -> usize;

    /// Shape of the component at `index`.
    ///
    /// Out-of-range indices and components that take no part in ordering
    /// return [`Shape::Unorderable`].
    fn component(&self, index: usize) -> Shape<'_>;

    /// Name of the concrete type, used to tell compounds of different types
    /// apart.
    ///
    /// Compounds only compare against compounds of the same concrete type.
    /// Keep the default unless two types must order as one.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! number_impls {
    ($kind:ident => $($ty:ty),+) => {
        $(
            impl Orderable for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Number(Number::from(*self))
                }

                fn declared_class() -> Class {
                    Class::Scalar(ScalarKind::$kind)
                }
            }
        )+
    };
}

number_impls!(Signed => i8, i16, i32, i64, i128, isize, char);
number_impls!(Unsigned => u8, u16, u32, u64, u128, usize);
number_impls!(Float => f32, f64);

impl Orderable for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Orderable for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self.as_str())
    }

    fn declared_class() -> Class {
        Class::Scalar(ScalarKind::Text)
    }
}

impl Orderable for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self.as_ref())
    }

    fn declared_class() -> Class {
        Class::Scalar(ScalarKind::Text)
    }
}

impl Orderable for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Unorderable
    }

    fn declared_class() -> Class {
        Class::Unorderable
    }
}

impl Orderable for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Unorderable
    }

    fn declared_class() -> Class {
        Class::Unorderable
    }
}

// Sequences

impl<T: Orderable> Compound for [T] {
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> Shape<'_> {
        self.get(index).map_or(Shape::Unorderable, T::shape)
    }
}

impl<T: Orderable> Orderable for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Orderable> Compound for Vec<T> {
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> Shape<'_> {
        self.get(index).map_or(Shape::Unorderable, T::shape)
    }
}

impl<T: Orderable> Orderable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }

    fn declared_class() -> Class {
        Class::Compound(CompoundKind::Sequence)
    }
}

impl<T: Orderable, const N: usize> Compound for [T; N] {
    fn component_count(&self) -> usize {
        N
    }

    fn component(&self, index: usize) -> Shape<'_> {
        self.get(index).map_or(Shape::Unorderable, T::shape)
    }
}

impl<T: Orderable, const N: usize> Orderable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }

    fn declared_class() -> Class {
        Class::Compound(CompoundKind::Sequence)
    }
}

impl<T: Orderable> Compound for VecDeque<T> {
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, index: usize) -> Shape<'_> {
        self.get(index).map_or(Shape::Unorderable, T::shape)
    }
}

impl<T: Orderable> Orderable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }

    fn declared_class() -> Class {
        Class::Compound(CompoundKind::Sequence)
    }
}

// Tuples are positional records.

macro_rules! tuple_impls {
    ($len:expr => $($idx:tt $name:ident)+) => {
        impl<$($name: Orderable),+> Compound for ($($name,)+) {
            fn component_count(&self) -> usize {
                $len
            }

            fn component(&self, index: usize) -> Shape<'_> {
                match index {
                    $($idx => self.$idx.shape(),)+
                    _ => Shape::Unorderable,
                }
            }
        }

        impl<$($name: Orderable),+> Orderable for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Record(self)
            }

            fn declared_class() -> Class {
                Class::Compound(CompoundKind::Record)
            }
        }
    };
}

tuple_impls!(1 => 0 A);
tuple_impls!(2 => 0 A 1 B);
tuple_impls!(3 => 0 A 1 B 2 C);
tuple_impls!(4 => 0 A 1 B 2 C 3 D);
tuple_impls!(5 => 0 A 1 B 2 C 3 D 4 E);
tuple_impls!(6 => 0 A 1 B 2 C 3 D 4 E 5 F);

// Pointers report the shape of their pointee, so their class is only known
// per value.

impl<T: Orderable + ?Sized> Orderable for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Orderable + ?Sized> Orderable for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Orderable + ?Sized> Orderable for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Orderable + ?Sized> Orderable for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// `None` is an absent pointer and has no order.
impl<T: Orderable> Orderable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Indirect(value),
            None => Shape::Unorderable,
        }
    }
}
