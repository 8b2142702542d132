//! Indirection stripping.

use crate::value::Shape;
use crate::Limits;

/// Strips indirection layers until a concrete shape is reached.
///
/// Each [`Shape::Indirect`] layer (an `Option`, a transparent newtype, or any
/// hand-written wrapper) is replaced by the shape of the value it wraps.
/// Smart pointers such as `Box` and `Rc` already report the shape of their
/// pointee. A chain longer than [`Limits::max_indirections`] is treated as
/// [`Shape::Unorderable`].
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use structsort::{normalize, Limits, Number, Orderable, Shape};
///
/// let value = Box::new(Rc::new(Some(3i32)));
/// let shape = normalize(value.shape(), &Limits::default());
/// assert!(matches!(shape, Shape::Number(Number::I32(3))));
/// ```
pub fn normalize<'a>(mut shape: Shape<'a>, limits: &Limits) -> Shape<'a> {
    let mut layers = 0;
    while let Shape::Indirect(inner) = shape {
        if layers >= limits.max_indirections {
            return Shape::Unorderable;
        }
        shape = inner.shape();
        layers += 1;
    }
    shape
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use super::*;
    use crate::{Number, Orderable};

    #[test]
    fn concrete_shapes_pass_through() {
        let limits = Limits::default();
        assert!(matches!(
            normalize(5u8.shape(), &limits),
            Shape::Number(Number::U8(5))
        ));
        assert!(matches!(
            normalize("x".shape(), &limits),
            Shape::Text("x")
        ));
    }

    #[test]
    fn nested_wrappers_are_stripped() {
        let limits = Limits::default();
        let value = Arc::new(Box::new(Rc::new(String::from("deep"))));
        assert!(matches!(
            normalize(value.shape(), &limits),
            Shape::Text("deep")
        ));
    }

    #[test]
    fn absent_pointer_is_unorderable() {
        let value: Option<Box<i32>> = None;
        assert!(normalize(value.shape(), &Limits::default()).is_unorderable());
    }

    #[test]
    fn polymorphic_container_resolves_to_value() {
        let value: Box<dyn Orderable> = Box::new(vec![1i64, 2]);
        let shape = normalize(value.shape(), &Limits::default());
        assert_eq!(shape.as_compound().map(|c| c.component_count()), Some(2));
    }

    #[test]
    fn indirection_ceiling() {
        let limits = Limits {
            max_indirections: 2,
            ..Limits::default()
        };
        let two = Some(Some(1i32));
        assert!(!normalize(two.shape(), &limits).is_unorderable());

        let three = Some(Some(Some(1i32)));
        assert!(normalize(three.shape(), &limits).is_unorderable());
    }
}
