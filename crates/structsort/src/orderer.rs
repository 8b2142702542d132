//! Ordering entry points.
//!
//! [`Orderer`] drives one ordering call: classify the element type once,
//! normalize every element to a key, sort the keys in lockstep with their
//! original positions, then permute the caller's slice.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::class::classify;
use crate::config::Limits;
use crate::error::Result;
use crate::lockstep::{permute, Lockstep};
use crate::normalize::normalize;
use crate::ordering::{Comparator, Dir};
use crate::traits::Orderable;
use crate::value::Shape;

/// Configured ordering engine.
///
/// # Example
///
/// ```
/// use structsort::{Dir, Limits, Orderer};
///
/// let orderer = Orderer::new()
///     .try_limits(Limits { max_depth: 4, ..Limits::default() })
///     .unwrap()
///     .dir(Dir::Desc);
///
/// let mut words = vec!["pear", "apple", "fig"];
/// orderer.order(&mut words);
/// assert_eq!(words, vec!["pear", "fig", "apple"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orderer {
    limits: Limits,
    dir: Dir,
}

impl Orderer {
    /// Creates an ascending orderer with default limits.
    pub fn new() -> Self {
        Orderer::default()
    }

    /// Sets the limits without validating them.
    ///
    /// Zero limits are accepted and simply make the engine degrade sooner;
    /// use [`try_limits`](Self::try_limits) to reject them.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the limits after validating them.
    pub fn try_limits(self, limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(self.limits(limits))
    }

    /// Sets the sort direction.
    pub fn dir(mut self, dir: Dir) -> Self {
        self.dir = dir;
        self
    }

    /// Returns the configured limits.
    pub fn get_limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the configured direction.
    pub fn get_dir(&self) -> Dir {
        self.dir
    }

    /// Orders `items` in place.
    ///
    /// An unorderable element type leaves `items` untouched. Elements that
    /// compare equal keep their relative order, so ordering twice gives the
    /// same result as ordering once.
    pub fn order<E: Orderable>(&self, items: &mut [E]) {
        let class = classify(items, &self.limits);
        if !class.is_orderable() {
            debug!(
                len = items.len(),
                "element type has no natural order, leaving sequence as is"
            );
            return;
        }
        if items.len() < 2 {
            return;
        }
        trace!(len = items.len(), %class, dir = %self.dir, "ordering sequence");

        let comparator = Comparator::new(&self.limits);
        let origin = {
            let keys: Vec<Shape<'_>> = items
                .iter()
                .map(|item| normalize(item.shape(), &self.limits))
                .collect();
            let mut lockstep = Lockstep::new(keys);
            lockstep.sort_by(|a, b| self.dir.apply(comparator.compare(*a, *b)));
            lockstep.into_origin()
        };

        if comparator.truncated() {
            debug!(
                max_depth = self.limits.max_depth,
                "nesting deeper than the depth limit was treated as equal"
            );
        }
        permute(items, &origin);
    }

    /// Compares two values with this orderer's limits and direction.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: Orderable + ?Sized,
        B: Orderable + ?Sized,
    {
        let comparator = Comparator::new(&self.limits);
        self.dir.apply(comparator.compare(a.shape(), b.shape()))
    }

    /// Returns `true` if ordering `items` would not need to move anything
    /// past an element it compares greater than.
    pub fn is_ordered<E: Orderable>(&self, items: &[E]) -> bool {
        if !classify(items, &self.limits).is_orderable() {
            return true;
        }
        items
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}
