//! Structural comparison of shapes.
//!
//! Compounds are compared lexicographically: corresponding components are
//! walked in order and the first pair that is orderable, of the same kind
//! and unequal decides. Pairs of differing kinds contribute nothing. When
//! every shared component is equal, the compound with fewer components comes
//! first.

use std::cell::Cell;
use std::cmp::Ordering;

use crate::config::Limits;
use crate::normalize::normalize;
use crate::traits::{Compound, Orderable};
use crate::value::Shape;

/// Direction in which [`Orderer`](crate::Orderer) arranges elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Dir {
    /// Turns an ascending comparison into one for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two values under their natural order, with default limits.
///
/// Values of different kinds, and unorderable values, compare `Equal`.
///
/// ```
/// use std::cmp::Ordering;
/// use structsort::compare;
///
/// assert_eq!(compare(&vec![1, 2, 3], &vec![1, 2, 3, 1]), Ordering::Less);
/// assert_eq!(compare(&vec![0, 9, 9], &vec![1, 0, 0]), Ordering::Less);
/// assert_eq!(compare(&1u8, &"one"), Ordering::Equal);
/// ```
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: Orderable + ?Sized,
    B: Orderable + ?Sized,
{
    compare_shapes(a.shape(), b.shape(), &Limits::default()).unwrap_or(Ordering::Equal)
}

/// Compares two shapes.
///
/// Both shapes are normalized first. Returns `None` when the pair carries no
/// ordering information: differing kinds, or an unorderable side.
pub fn compare_shapes(a: Shape<'_>, b: Shape<'_>, limits: &Limits) -> Option<Ordering> {
    Comparator::new(limits).shapes(a, b, 0)
}

/// Comparison state for one ordering call.
pub(crate) struct Comparator<'l> {
    limits: &'l Limits,
    truncated: Cell<bool>,
}

impl<'l> Comparator<'l> {
    pub(crate) fn new(limits: &'l Limits) -> Self {
        Comparator {
            limits,
            truncated: Cell::new(false),
        }
    }

    /// Whether any comparison so far was cut short by the depth ceiling.
    pub(crate) fn truncated(&self) -> bool {
        self.truncated.get()
    }

    /// Total comparison of two root values: no information means `Equal`.
    pub(crate) fn compare(&self, a: Shape<'_>, b: Shape<'_>) -> Ordering {
        self.shapes(a, b, 0).unwrap_or(Ordering::Equal)
    }

    fn shapes(&self, a: Shape<'_>, b: Shape<'_>, depth: usize) -> Option<Ordering> {
        match (normalize(a, self.limits), normalize(b, self.limits)) {
            (Shape::Number(a), Shape::Number(b)) => a.compare(b),
            (Shape::Text(a), Shape::Text(b)) => Some(a.cmp(b)),
            (Shape::Record(a), Shape::Record(b)) | (Shape::Sequence(a), Shape::Sequence(b))
                if a.type_name() == b.type_name() =>
            {
                Some(self.compounds(a, b, depth + 1))
            }
            _ => None,
        }
    }

    fn compounds(&self, a: &dyn Compound, b: &dyn Compound, depth: usize) -> Ordering {
        if depth > self.limits.max_depth {
            self.truncated.set(true);
            return Ordering::Equal;
        }

        let (a_len, b_len) = (a.component_count(), b.component_count());
        let shared = a_len.min(b_len).min(self.limits.max_components);
        for index in 0..shared {
            match self.shapes(a.component(index), b.component(index), depth) {
                Some(Ordering::Equal) | None => continue,
                Some(decided) => return decided,
            }
        }
        a_len.cmp(&b_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn compare_scalars() {
        let limits = Limits::default();
        assert_eq!(
            compare_shapes("apple".shape(), "banana".shape(), &limits),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_shapes(10i32.shape(), 2i32.shape(), &limits),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_shapes(1.5f64.shape(), 1.5f64.shape(), &limits),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn compare_kind_mismatch() {
        let limits = Limits::default();
        assert_eq!(compare_shapes("1".shape(), 1i32.shape(), &limits), None);
        assert_eq!(compare_shapes(1i32.shape(), 1u32.shape(), &limits), None);
        assert_eq!(compare_shapes(vec![1].shape(), (1,).shape(), &limits), None);
        assert_eq!(compare_shapes(true.shape(), true.shape(), &limits), None);
    }

    #[test]
    fn sequences_compare_positionally_then_by_length() {
        assert_eq!(compare(&vec![1, 2, 3], &vec![1, 2, 3, 1]), Ordering::Less);
        assert_eq!(compare(&vec![0, 9, 9], &vec![1, 0, 0]), Ordering::Less);
        assert_eq!(compare(&vec![2], &vec![1, 5]), Ordering::Greater);
        assert_eq!(compare(&Vec::<i32>::new(), &vec![0]), Ordering::Less);
        assert_eq!(compare(&[1, 2], &[1, 2]), Ordering::Equal);
    }

    #[test]
    fn records_compare_field_by_field() {
        assert_eq!(compare(&(1, 2.0, "3"), &(0, 1.0, "2")), Ordering::Greater);
        assert_eq!(compare(&(0, 5.0, "x"), &(0, 1.0, "x")), Ordering::Greater);
        assert_eq!(compare(&(0, 0.0, "a"), &(0, 0.0, "b")), Ordering::Less);
    }

    #[test]
    fn unorderable_components_are_skipped() {
        // The bool decides nothing, so the integer does.
        assert_eq!(compare(&(true, 2), &(false, 1)), Ordering::Greater);
        assert_eq!(compare(&(true, 1), &(false, 1)), Ordering::Equal);
    }

    #[test]
    fn mismatched_components_are_skipped() {
        let a: Vec<Box<dyn Orderable>> = vec![Box::new("z"), Box::new(1)];
        let b: Vec<Box<dyn Orderable>> = vec![Box::new(0), Box::new(2)];
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn components_of_different_primitive_types_are_skipped() {
        // The i32/i64 pair decides nothing, so the u8 pair does.
        let a: Vec<Box<dyn Orderable>> = vec![Box::new(5i32), Box::new(1u8)];
        let b: Vec<Box<dyn Orderable>> = vec![Box::new(1i64), Box::new(2u8)];
        assert_eq!(compare(&a, &b), Ordering::Less);

        assert_eq!(compare(&'a', &1i32), Ordering::Equal);
        assert_eq!(compare(&1.0f32, &2.0f64), Ordering::Equal);
        assert_eq!(compare(&2.0f32, &1.0f32), Ordering::Greater);
    }

    #[test]
    fn compounds_of_different_types_are_skipped() {
        let limits = Limits::default();
        assert_eq!(
            compare_shapes(vec![1i32].shape(), vec![2i64].shape(), &limits),
            None
        );
        assert_eq!(compare_shapes([1u8].shape(), vec![2u8].shape(), &limits), None);
        assert_eq!(
            compare_shapes((1, "a").shape(), (1, "b", 0).shape(), &limits),
            None
        );

        let a: Vec<Box<dyn Orderable>> = vec![Box::new(vec![9u8]), Box::new(1)];
        let b: Vec<Box<dyn Orderable>> = vec![Box::new([0u8]), Box::new(2)];
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn nested_compounds_recurse() {
        let a = vec![vec![1, 2], vec![3]];
        let b = vec![vec![1, 2], vec![4]];
        assert_eq!(compare(&a, &b), Ordering::Less);

        let a = (vec![(1, "a")], 0);
        let b = (vec![(1, "b")], 0);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn indirection_is_transparent() {
        assert_eq!(compare(&Some(Box::new(3)), &4), Ordering::Less);
        assert_eq!(compare(&None::<i32>, &4), Ordering::Equal);
    }

    #[test]
    fn depth_ceiling_compares_equal() {
        let limits = Limits {
            max_depth: 1,
            ..Limits::default()
        };
        let comparator = Comparator::new(&limits);
        let a = vec![vec![1]];
        let b = vec![vec![2]];
        assert_eq!(comparator.compare(a.shape(), b.shape()), Ordering::Equal);
        assert!(comparator.truncated());

        let comparator = Comparator::new(&limits);
        assert_eq!(
            comparator.compare(vec![1].shape(), vec![2].shape()),
            Ordering::Less
        );
        assert!(!comparator.truncated());
    }

    #[test]
    fn component_ceiling_falls_back_to_length() {
        let limits = Limits {
            max_components: 2,
            ..Limits::default()
        };
        let a = vec![1, 1, 9];
        let b = vec![1, 1, 0];
        assert_eq!(
            compare_shapes(a.shape(), b.shape(), &limits),
            Some(Ordering::Equal)
        );

        let c = vec![1, 1];
        assert_eq!(
            compare_shapes(c.shape(), b.shape(), &limits),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn comparison_does_not_mutate() {
        let a = vec![3, 1, 2];
        let b = vec![3, 1, 2];
        let _ = compare(&a, &b);
        assert_eq!(a, vec![3, 1, 2]);
        assert_eq!(b, vec![3, 1, 2]);
    }
}
