//! Filtering and deduplication.
//!
//! Both operations decide up front which elements survive, then compact
//! the survivors into the front of the buffer in their original order.

use smallvec::SmallVec;
use wrapvec_core::Element;

use crate::array::DynArray;

/// Survivor flags, one per element. Inline for small arrays.
type KeepFlags = SmallVec<[bool; 64]>;

impl<T: Element> DynArray<T> {
    /// Keep only the elements for which `predicate` returns `true`.
    ///
    /// The predicate is evaluated exactly once per element, in order,
    /// before anything moves.
    pub fn filter<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let keep: KeepFlags = self.iter().map(|value| predicate(value)).collect();
        self.compact(&keep);
    }

    /// Remove every element that is the [`same`](Element::same) as an
    /// earlier one.
    ///
    /// First occurrences keep their relative order. Runs in O(n²)
    /// comparisons.
    pub fn remove_duplicates(&mut self) {
        let data = self.as_slice();
        let keep: KeepFlags = data
            .iter()
            .enumerate()
            .map(|(i, value)| !data[..i].iter().any(|earlier| earlier.same(value)))
            .collect();
        self.compact(&keep);
    }

    /// Move flagged elements to the front, preserving their order, and
    /// drop the rest.
    fn compact(&mut self, keep: &[bool]) {
        let data = self.buf.as_mut_slice();
        let mut write = 0;
        for (read, &kept) in keep.iter().enumerate() {
            if kept {
                if read != write {
                    data.swap(read, write);
                }
                write += 1;
            }
        }
        self.buf.truncate(write);
    }
}
