//! The [`DynArray`] container: construction, element access, and CRUD.

use std::mem;

use wrapvec_buffer::{CapacityGoal, GrowthBuffer, GrowthConfig};
use wrapvec_core::{fix_index, fix_index_inclusive, Element, ElementKind};

use crate::error::ArrayError;

/// A growable array of equal-width elements with wraparound indexing.
///
/// Every index argument is an `isize` normalized against the current
/// length: `-1` is the last element, `len` wraps to the first, and so on.
/// Insertion points are normalized against `len + 1` so that appending
/// through [`insert`](Self::insert) is possible.
///
/// Growth follows the buffer's exponential policy. Capacity is never
/// reduced except through an explicit call to [`shrink`](Self::shrink).
#[derive(Clone)]
pub struct DynArray<T> {
    pub(crate) buf: GrowthBuffer<T>,
}

impl<T: Element> DynArray<T> {
    // ── Construction ───────────────────────────────────────────────

    /// Create an empty array with the default config (capacity 16,
    /// growth factor 2.0).
    pub fn new() -> Self {
        Self {
            buf: GrowthBuffer::default(),
        }
    }

    /// Create an empty array with an explicit initial capacity and growth
    /// factor.
    pub fn with_config(config: GrowthConfig) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: GrowthBuffer::new(config)?,
        })
    }

    /// Create an array holding copies of `values`.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.extend_from_slice(values)?;
        Ok(array)
    }

    /// Deep copy with the same capacity and growth factor.
    ///
    /// Unlike `clone`, a failed allocation is reported rather than
    /// aborting.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: self.buf.try_clone()?,
        })
    }

    /// Copy the half-open range `[start, end)` into a new array.
    ///
    /// Both ends are normalized as insertion points, so `end = -1` means
    /// "through the last element" and `end = len` is accepted. The new
    /// array's capacity equals the number of copied elements; it keeps
    /// this array's growth factor.
    ///
    /// Returns [`ArrayError::InvalidRange`] if the normalized end precedes
    /// the normalized start.
    pub fn sub_array(&self, start: isize, end: isize) -> Result<Self, ArrayError> {
        let len = self.len();
        let start = fix_index_inclusive(len, start);
        let end = fix_index_inclusive(len, end);
        if end < start {
            return Err(ArrayError::InvalidRange { start, end });
        }
        self.copy_range(start, end)
    }

    /// Split the array at `index`.
    ///
    /// `self` keeps the elements before the (inclusively normalized)
    /// index; the returned array owns the rest.
    ///
    /// ```
    /// use wrapvec_array::DynArray;
    ///
    /// let mut head = DynArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// let tail = head.split_off(-2).unwrap();
    /// assert_eq!(head.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(tail.as_slice(), &[5]);
    /// ```
    pub fn split_off(&mut self, index: isize) -> Result<Self, ArrayError> {
        let len = self.len();
        let at = fix_index_inclusive(len, index);
        // Copy first: a failed copy must leave `self` whole.
        let rest = self.copy_range(at, len)?;
        self.buf.truncate(at);
        Ok(rest)
    }

    fn copy_range(&self, start: usize, end: usize) -> Result<Self, ArrayError> {
        let mut buf = GrowthBuffer::new(GrowthConfig::new(0, self.growth_factor()))?;
        buf.extend_from_slice(&self.as_slice()[start..end])?;
        Ok(Self { buf })
    }

    // ── Reading ────────────────────────────────────────────────────

    /// Owned copy of the element at `index`.
    pub fn read(&self, index: isize) -> Result<T, ArrayError> {
        self.at(index, "read").map(|i| self.as_slice()[i].clone())
    }

    /// Borrowed view of the element at `index`.
    ///
    /// The reference is tied to `&self`, so it cannot be held across a
    /// mutation of the array.
    pub fn read_raw(&self, index: isize) -> Result<&T, ArrayError> {
        let i = self.at(index, "read_raw")?;
        Ok(&self.as_slice()[i])
    }

    /// Mutable borrowed view of the element at `index`.
    pub fn read_raw_mut(&mut self, index: isize) -> Result<&mut T, ArrayError> {
        let i = self.at(index, "read_raw_mut")?;
        Ok(&mut self.buf.as_mut_slice()[i])
    }

    // ── Modification ───────────────────────────────────────────────

    /// Add `value` after the last element.
    pub fn append(&mut self, value: T) -> Result<(), ArrayError> {
        self.buf.push(value)?;
        Ok(())
    }

    /// Add `value` before the first element.
    pub fn prepend(&mut self, value: T) -> Result<(), ArrayError> {
        self.insert(value, 0)
    }

    /// Insert `value` so that it ends up at the normalized `index`.
    ///
    /// Elements at or after that position move one slot toward the end.
    /// `index` is normalized against `len + 1`, so `-1` appends.
    pub fn insert(&mut self, value: T, index: isize) -> Result<(), ArrayError> {
        let at = fix_index_inclusive(self.len(), index);
        self.buf.insert(at, value)?;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// toward the start.
    pub fn remove(&mut self, index: isize) -> Result<T, ArrayError> {
        let i = self.at(index, "remove")?;
        Ok(self.buf.remove(i))
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.buf
            .pop()
            .ok_or(ArrayError::EmptyArray { operation: "pop" })
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), ArrayError> {
        let i = self.at(index, "set")?;
        self.buf.as_mut_slice()[i] = value;
        Ok(())
    }

    /// Exchange the elements at `first` and `second`.
    pub fn swap(&mut self, first: isize, second: isize) -> Result<(), ArrayError> {
        let a = self.at(first, "swap")?;
        let b = self.at(second, "swap")?;
        self.buf.as_mut_slice().swap(a, b);
        Ok(())
    }

    /// Append copies of `values`, growing once for the whole batch.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ArrayError> {
        self.buf.extend_from_slice(values)?;
        Ok(())
    }

    /// Append copies of every element of `other`, growing once for the
    /// whole batch.
    pub fn extend_from_array(&mut self, other: &DynArray<T>) -> Result<(), ArrayError> {
        self.extend_from_slice(other.as_slice())
    }

    // ── Memory management ──────────────────────────────────────────

    /// Remove every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Reduce capacity toward `goal`, never below the current length.
    ///
    /// This is the only operation that ever reduces capacity.
    pub fn shrink(&mut self, goal: CapacityGoal) {
        self.buf.shrink(goal);
    }

    // ── Metadata ───────────────────────────────────────────────────

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Multiplier applied to the capacity on growth.
    pub fn growth_factor(&self) -> f32 {
        self.buf.growth_factor()
    }

    /// Size of one element in bytes.
    pub fn element_width(&self) -> usize {
        mem::size_of::<T>()
    }

    /// The informational kind of the stored elements.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// The elements, in order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Normalize an element index, rejecting empty arrays.
    fn at(&self, index: isize, operation: &'static str) -> Result<usize, ArrayError> {
        fix_index(self.len(), index).ok_or(ArrayError::EmptyArray { operation })
    }
}

impl<T: Element> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for DynArray<T> {
    /// Arrays are equal when they hold equal elements in the same order.
    /// Capacity and growth factor are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> TryFrom<Vec<T>> for DynArray<T> {
    type Error = ArrayError;

    /// Adopt the elements of `values` under the default config.
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Ok(Self {
            buf: GrowthBuffer::from_vec(values, GrowthConfig::default())?,
        })
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i32]) -> DynArray<i32> {
        DynArray::from_slice(values).unwrap()
    }

    #[test]
    fn new_uses_default_config() {
        let array: DynArray<i32> = DynArray::new();
        assert_eq!(array.capacity(), 16);
        assert_eq!(array.growth_factor(), 2.0);
        assert!(array.is_empty());
        assert_eq!(array.element_width(), 4);
        assert_eq!(array.kind(), ElementKind::Integer);
    }

    #[test]
    fn with_config_rejects_bad_factor() {
        let result = DynArray::<i32>::with_config(GrowthConfig::new(4, 0.25));
        assert!(matches!(result, Err(ArrayError::Config(_))));
    }

    #[test]
    fn append_then_read_last() {
        let mut array = ints(&[1, 2]);
        array.append(9).unwrap();
        assert_eq!(array.read(-1).unwrap(), 9);
    }

    #[test]
    fn read_wraps_around() {
        let array = ints(&[10, 20, 30]);
        assert_eq!(array.read(0).unwrap(), 10);
        assert_eq!(array.read(3).unwrap(), 10);
        assert_eq!(array.read(-1).unwrap(), 30);
        assert_eq!(array.read(-4).unwrap(), 30);
        assert_eq!(*array.read_raw(4).unwrap(), 20);
    }

    #[test]
    fn read_raw_mut_writes_through() {
        let mut array = ints(&[1, 2, 3]);
        *array.read_raw_mut(-1).unwrap() = 42;
        assert_eq!(array.as_slice(), &[1, 2, 42]);
    }

    #[test]
    fn empty_array_rejects_element_access() {
        let mut array: DynArray<i32> = DynArray::new();
        assert_eq!(
            array.read(0),
            Err(ArrayError::EmptyArray { operation: "read" })
        );
        assert_eq!(
            array.read_raw(0),
            Err(ArrayError::EmptyArray {
                operation: "read_raw"
            })
        );
        assert_eq!(
            array.read_raw_mut(-1),
            Err(ArrayError::EmptyArray {
                operation: "read_raw_mut"
            })
        );
        assert_eq!(
            array.remove(0),
            Err(ArrayError::EmptyArray { operation: "remove" })
        );
        assert_eq!(
            array.pop(),
            Err(ArrayError::EmptyArray { operation: "pop" })
        );
        assert_eq!(
            array.set(0, 1),
            Err(ArrayError::EmptyArray { operation: "set" })
        );
        assert_eq!(
            array.swap(0, 1),
            Err(ArrayError::EmptyArray { operation: "swap" })
        );
        assert!(array.is_empty());
    }

    #[test]
    fn insert_shifts_later_elements() {
        let mut array = ints(&[1, 2, 3]);
        array.insert(9, 1).unwrap();
        assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut array = ints(&[1, 2, 3]);
        array.insert(9, 3).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3, 9]);
        array.insert(8, -1).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3, 9, 8]);
    }

    #[test]
    fn insert_into_empty() {
        let mut array: DynArray<i32> = DynArray::new();
        array.insert(5, -7).unwrap();
        assert_eq!(array.as_slice(), &[5]);
    }

    #[test]
    fn prepend_goes_first() {
        let mut array = ints(&[2, 3]);
        array.prepend(1).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn remove_shifts_and_returns() {
        let mut array = ints(&[1, 2, 3, 4]);
        assert_eq!(array.remove(-3).unwrap(), 2);
        assert_eq!(array.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn pop_returns_last() {
        let mut array = ints(&[1, 2, 3]);
        assert_eq!(array.pop().unwrap(), 3);
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn set_and_swap() {
        let mut array = ints(&[1, 2, 3]);
        array.set(-1, 7).unwrap();
        array.swap(0, 5).unwrap();
        assert_eq!(array.as_slice(), &[7, 2, 1]);
    }

    #[test]
    fn extend_grows_once() {
        let mut array = ints(&[]);
        array.extend_from_slice(&[0; 40]).unwrap();
        assert_eq!(array.capacity(), 40);
        let other = ints(&[1, 2]);
        array.extend_from_array(&other).unwrap();
        assert_eq!(array.len(), 42);
        assert_eq!(array.capacity(), 80);
    }

    #[test]
    fn seventeen_appends_keep_order() {
        let mut array = DynArray::new();
        for i in 0..17 {
            array.append(i).unwrap();
        }
        assert_eq!(array.capacity(), 32);
        assert_eq!(array.as_slice(), (0..17).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn sub_array_copies_half_open_range() {
        let array = ints(&[0, 1, 2, 3, 4, 5]);
        let sub = array.sub_array(1, 4).unwrap();
        assert_eq!(sub.as_slice(), &[1, 2, 3]);
        assert_eq!(sub.capacity(), 3);
        assert_eq!(sub.growth_factor(), array.growth_factor());
    }

    #[test]
    fn sub_array_negative_end() {
        let array = ints(&[0, 1, 2, 3]);
        assert_eq!(array.sub_array(2, -1).unwrap().as_slice(), &[2, 3]);
        assert_eq!(array.sub_array(-3, -2).unwrap().as_slice(), &[2]);
    }

    #[test]
    fn sub_array_rejects_reversed_range() {
        let array = ints(&[0, 1, 2, 3]);
        assert_eq!(
            array.sub_array(3, 1),
            Err(ArrayError::InvalidRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn empty_sub_array_still_grows() {
        let array = ints(&[0, 1, 2]);
        let mut sub = array.sub_array(1, 1).unwrap();
        assert_eq!(sub.capacity(), 0);
        sub.append(5).unwrap();
        assert_eq!(sub.as_slice(), &[5]);
    }

    #[test]
    fn split_off_truncates_original() {
        let mut array = ints(&[1, 2, 3, 4, 5]);
        let tail = array.split_off(2).unwrap();
        assert_eq!(array.as_slice(), &[1, 2]);
        assert_eq!(tail.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn split_off_at_len_leaves_empty_tail() {
        let mut array = ints(&[1, 2]);
        let tail = array.split_off(2).unwrap();
        assert_eq!(array.len(), 2);
        assert!(tail.is_empty());
    }

    #[test]
    fn clone_is_deep_and_keeps_capacity() {
        let mut array = DynArray::with_config(GrowthConfig::new(8, 1.5)).unwrap();
        array.extend_from_slice(&[1, 2, 3]).unwrap();
        let mut copy = array.try_clone().unwrap();
        copy.set(0, 100).unwrap();
        assert_eq!(array.read(0).unwrap(), 1);
        assert_eq!(copy.capacity(), 8);
        assert_eq!(copy.growth_factor(), 1.5);
        assert_eq!(array.clone(), array);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = ints(&[0; 20]);
        let capacity = array.capacity();
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn shrink_is_explicit() {
        let mut array = ints(&[0; 20]);
        array.clear();
        array.append(1).unwrap();
        assert_eq!(array.capacity(), 32);
        array.shrink(CapacityGoal::Target(4));
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.as_slice(), &[1]);
    }

    #[test]
    fn try_from_vec_adopts_elements() {
        let array = DynArray::try_from(vec![3, 2, 1]).unwrap();
        assert_eq!(array.as_slice(), &[3, 2, 1]);
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn iteration() {
        let array = ints(&[1, 2, 3]);
        let doubled: Vec<i32> = array.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        let borrowed: i32 = (&array).into_iter().sum();
        assert_eq!(borrowed, 6);
        let owned: Vec<i32> = array.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }
}
