//! Linear search by value or by predicate.
//!
//! Value searches match with [`Element::same`], so a stored float `NaN`
//! is found and `0.0` never matches `-0.0`.

use wrapvec_core::Element;

use crate::array::DynArray;
use crate::error::ArrayError;

impl<T: Element> DynArray<T> {
    /// Index of the first element that is the same as `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v.same(value))
    }

    /// Index of the first element satisfying `predicate`.
    pub fn find_by<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Indices of every element that is the same as `value`, ascending.
    pub fn find_all(&self, value: &T) -> Result<DynArray<usize>, ArrayError> {
        self.find_all_by(|v| v.same(value))
    }

    /// Indices of every element satisfying `predicate`, ascending.
    ///
    /// The result is a new, possibly empty, array with the default config.
    pub fn find_all_by<F>(&self, mut predicate: F) -> Result<DynArray<usize>, ArrayError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut indices = DynArray::new();
        for (i, value) in self.iter().enumerate() {
            if predicate(value) {
                indices.append(i)?;
            }
        }
        Ok(indices)
    }

    /// Whether any element is the same as `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Number of elements that are the same as `value`.
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|v| v.same(value)).count()
    }
}
