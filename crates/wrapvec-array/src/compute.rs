//! Map and reduce traversals.

use wrapvec_core::Element;

use crate::array::DynArray;

impl<T: Element> DynArray<T> {
    /// Replace every element with `transform` applied to it.
    ///
    /// `transform` only ever sees a shared borrow of the current element
    /// and returns the replacement, which is written back once the call
    /// has finished. It can never observe a half-written element.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(&T) -> T,
    {
        for slot in self.buf.as_mut_slice() {
            let next = transform(&*slot);
            *slot = next;
        }
    }

    /// Feed every element, in order, into a caller-owned accumulator.
    ///
    /// The accumulator's type and starting value are entirely up to the
    /// caller; this method neither creates nor resets it.
    ///
    /// ```
    /// use wrapvec_array::DynArray;
    ///
    /// let array = DynArray::from_slice(&[1, 2, 3, 4]).unwrap();
    /// let mut sum = 10i64;
    /// array.reduce(&mut sum, |v, acc| *acc += *v as i64);
    /// assert_eq!(sum, 20);
    /// ```
    pub fn reduce<A, F>(&self, accumulator: &mut A, mut transform: F)
    where
        F: FnMut(&T, &mut A),
    {
        for value in self.iter() {
            transform(value, accumulator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_squares() {
        let mut array = DynArray::from_slice(&[1, 2, 3]).unwrap();
        array.map(|v| v * v);
        assert_eq!(array.as_slice(), &[1, 4, 9]);
    }

    #[test]
    fn map_reads_whole_element_before_write() {
        let mut array = DynArray::from_slice(&[[1u8, 2], [3, 4]]).unwrap();
        array.map(|pair| [pair[1], pair[0]]);
        assert_eq!(array.as_slice(), &[[2, 1], [4, 3]]);
    }

    #[test]
    fn map_empty_never_calls() {
        let mut array: DynArray<i32> = DynArray::new();
        array.map(|_| unreachable!());
        assert!(array.is_empty());
    }

    #[test]
    fn reduce_into_different_type() {
        let array = DynArray::from_slice(b"abc").unwrap();
        let mut text = String::from(">");
        array.reduce(&mut text, |b, acc| acc.push(*b as char));
        assert_eq!(text, ">abc");
    }

    #[test]
    fn reduce_visits_in_order() {
        let array = DynArray::from_slice(&[3, 1, 2]).unwrap();
        let mut order = Vec::new();
        array.reduce(&mut order, |v, acc| acc.push(*v));
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn reduce_empty_leaves_accumulator() {
        let array: DynArray<i32> = DynArray::new();
        let mut acc = 99;
        array.reduce(&mut acc, |v, acc| *acc += v);
        assert_eq!(acc, 99);
    }
}
