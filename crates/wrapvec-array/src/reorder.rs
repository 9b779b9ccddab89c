//! In-place reordering: shuffle, bubble sort, and reverse.

use std::cmp::Ordering;

use rand::Rng;
use wrapvec_core::Element;

use crate::array::DynArray;

impl<T: Element> DynArray<T> {
    /// Shuffle the elements uniformly using the thread-local RNG.
    pub fn randomize_order(&mut self) {
        self.randomize_order_with(&mut rand::rng());
    }

    /// Shuffle the elements uniformly using `rng` (Fisher–Yates).
    ///
    /// For each position `i` from the front, the element at `i` is swapped
    /// with one chosen uniformly from `[i, len)`. Passing a seeded RNG makes
    /// the permutation reproducible.
    pub fn randomize_order_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let data = self.buf.as_mut_slice();
        let len = data.len();
        for i in 0..len.saturating_sub(1) {
            let j = rng.random_range(i..len);
            data.swap(i, j);
        }
    }

    /// Sort by the element type's default ordering.
    ///
    /// Only integer elements have a meaningful default ordering; for every
    /// other kind all elements compare equal and the array is unchanged.
    /// Use [`bubble_sort_by`](Self::bubble_sort_by) to supply an order.
    pub fn bubble_sort(&mut self) {
        self.bubble_sort_by(T::default_order);
    }

    /// Sort with a caller-supplied comparator.
    ///
    /// Classic adjacent-swap bubble sort: O(n²) comparisons, and each pass
    /// is one element shorter than the last. A pair is swapped only when
    /// `order` returns `Greater`, so elements that compare `Equal` keep
    /// their relative order.
    pub fn bubble_sort_by<F>(&mut self, mut order: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let data = self.buf.as_mut_slice();
        for pass_end in (1..data.len()).rev() {
            for j in 0..pass_end {
                if order(&data[j], &data[j + 1]) == Ordering::Greater {
                    data.swap(j, j + 1);
                }
            }
        }
    }

    /// Reverse the order of the elements.
    pub fn reverse(&mut self) {
        let data = self.buf.as_mut_slice();
        let len = data.len();
        for i in 0..len / 2 {
            data.swap(i, len - i - 1);
        }
    }
}
