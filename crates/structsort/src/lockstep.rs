//! Sorting a key array in lockstep with a companion array.
//!
//! The keys borrow from the caller's elements, so the elements themselves
//! cannot move while the keys are alive. [`Lockstep`] therefore sorts the
//! keys together with the original position of each key; once the keys are
//! dropped, [`permute`] moves the elements into the sorted positions.
//!
//! The sort only ever asks `less(i, j)` and calls `swap(i, j)`, so a relation
//! that is not even a total preorder can change the resulting order but never
//! breaks the sort. Ties are broken by original position: for a total
//! preorder the result is the one order where equal keys keep their input
//! sequence, whichever algorithm produced it.

use std::cmp::Ordering;

/// Below this length insertion sort is used.
const INSERTION_THRESHOLD: usize = 16;

/// Keys paired with the original position of each key.
///
/// After every `swap`, `origin[i]` is still the position in the input that
/// `keys[i]` was derived from.
pub(crate) struct Lockstep<K> {
    keys: Vec<K>,
    origin: Vec<usize>,
}

impl<K> Lockstep<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        let origin = (0..keys.len()).collect();
        Lockstep { keys, origin }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len().min(self.origin.len())
    }

    /// Whether position `i` belongs before position `j`.
    pub(crate) fn less<F>(&self, i: usize, j: usize, cmp: &mut F) -> bool
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        cmp(&self.keys[i], &self.keys[j])
            .then_with(|| self.origin[i].cmp(&self.origin[j]))
            == Ordering::Less
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.origin.swap(i, j);
    }

    /// Sorts the keys in place, carrying the original positions along.
    pub(crate) fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let len = self.len();
        if len < 2 {
            return;
        }
        if len <= INSERTION_THRESHOLD {
            self.insertion_sort(len, &mut cmp);
        } else {
            self.heap_sort(len, &mut cmp);
        }
    }

    /// Consumes the keys and returns `origin`, where `origin[i]` is the input
    /// position of the element that belongs at position `i`.
    pub(crate) fn into_origin(self) -> Vec<usize> {
        self.origin
    }

    fn insertion_sort<F>(&mut self, len: usize, cmp: &mut F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        for i in 1..len {
            let mut j = i;
            while j > 0 && self.less(j, j - 1, cmp) {
                self.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    fn heap_sort<F>(&mut self, len: usize, cmp: &mut F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        for start in (0..len / 2).rev() {
            self.sift_down(start, len, cmp);
        }
        for end in (1..len).rev() {
            self.swap(0, end);
            self.sift_down(0, end, cmp);
        }
    }

    fn sift_down<F>(&mut self, mut root: usize, end: usize, cmp: &mut F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                return;
            }
            if child + 1 < end && self.less(child, child + 1, cmp) {
                child += 1;
            }
            if !self.less(root, child, cmp) {
                return;
            }
            self.swap(root, child);
            root = child;
        }
    }
}

/// Reorders `items` so that `items[i]` becomes the element that was at
/// `origin[i]`.
///
/// `origin` must be a permutation of `0..items.len()`. Each cycle of the
/// permutation is walked once with swaps, so the elements are never cloned.
pub(crate) fn permute<T>(items: &mut [T], origin: &[usize]) {
    let mut placed = vec![false; origin.len()];
    for start in 0..origin.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = origin[current];
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_origin(keys: Vec<i32>) -> (Vec<i32>, Vec<usize>) {
        let mut lockstep = Lockstep::new(keys);
        lockstep.sort_by(|a, b| a.cmp(b));
        let keys = lockstep.keys.clone();
        (keys, lockstep.into_origin())
    }

    #[test]
    fn short_runs_use_insertion_sort() {
        let (keys, origin) = sorted_origin(vec![3, 1, 2]);
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(origin, vec![1, 2, 0]);
    }

    #[test]
    fn long_runs_use_heap_sort() {
        let input: Vec<i32> = (0..100).map(|i| (i * 37) % 100).collect();
        let (keys, origin) = sorted_origin(input.clone());
        assert_eq!(keys, (0..100).collect::<Vec<_>>());
        for (position, &from) in origin.iter().enumerate() {
            assert_eq!(input[from], keys[position]);
        }
    }

    #[test]
    fn keys_and_origin_stay_in_lockstep() {
        let input = vec![5, 5, 1, 9, 0, 5, 3, 3, 8, 7, 2, 6, 4, 4, 1, 0, 9, 2, 8];
        let (keys, origin) = sorted_origin(input.clone());
        for (position, &from) in origin.iter().enumerate() {
            assert_eq!(input[from], keys[position]);
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        for len in [10, 40] {
            let mut lockstep = Lockstep::new(vec![0; len]);
            lockstep.sort_by(|a: &i32, b| a.cmp(b));
            assert_eq!(lockstep.into_origin(), (0..len).collect::<Vec<_>>());

            let keys: Vec<i32> = (0..len as i32).map(|i| i % 3).collect();
            let mut lockstep = Lockstep::new(keys.clone());
            lockstep.sort_by(|a, b| a.cmp(b));
            let origin = lockstep.into_origin();
            for pair in origin.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(keys[a] < keys[b] || (keys[a] == keys[b] && a < b));
            }
        }
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(sorted_origin(vec![]), (vec![], vec![]));
        assert_eq!(sorted_origin(vec![7]), (vec![7], vec![0]));
    }

    #[test]
    fn inconsistent_relation_does_not_panic() {
        let mut lockstep = Lockstep::new((0..50).collect::<Vec<i32>>());
        let mut flip = false;
        lockstep.sort_by(|_, _| {
            flip = !flip;
            if flip {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let mut origin = lockstep.into_origin();
        origin.sort_unstable();
        assert_eq!(origin, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn permute_applies_origin() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        permute(&mut items, &[4, 0, 3, 1, 2]);
        assert_eq!(items, vec!['e', 'a', 'd', 'b', 'c']);
    }

    #[test]
    fn permute_identity_and_fixed_points() {
        let mut items = vec![1, 2, 3];
        permute(&mut items, &[0, 1, 2]);
        assert_eq!(items, vec![1, 2, 3]);

        permute(&mut items, &[0, 2, 1]);
        assert_eq!(items, vec![1, 3, 2]);
    }
}
