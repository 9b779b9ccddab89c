//! Elementary set operations over arrays.
//!
//! Membership is [`Element::same`]. Results are new arrays with no
//! duplicates, in first-occurrence order. Both operands always share an
//! element type, so there is no width or kind mismatch to check.

use wrapvec_buffer::GrowthConfig;
use wrapvec_core::Element;

use crate::array::DynArray;
use crate::error::ArrayError;

impl<T: Element> DynArray<T> {
    /// Copy of this array without duplicates, in first-occurrence order.
    pub fn unique_elements(&self) -> Result<Self, ArrayError> {
        let mut unique = self.try_clone()?;
        unique.remove_duplicates();
        Ok(unique)
    }

    /// Elements present in both arrays.
    ///
    /// The larger operand (or `self`, on a tie) is walked once while the
    /// smaller one is searched for membership, so the result follows the
    /// larger operand's order. The result starts with room for the smaller
    /// operand's length, which bounds its size.
    pub fn intersection(&self, other: &Self) -> Result<Self, ArrayError> {
        let (outer, inner) = if self.len() < other.len() {
            (other, self)
        } else {
            (self, other)
        };

        let mut common = Self::with_config(GrowthConfig::new(inner.len(), inner.growth_factor()))?;
        for value in outer {
            if inner.contains(value) {
                common.append(value.clone())?;
            }
        }
        common.remove_duplicates();
        Ok(common)
    }

    /// Elements present in either array: this array's distinct elements
    /// followed by the ones `other` adds, in `other`'s order.
    pub fn union(&self, other: &Self) -> Result<Self, ArrayError> {
        let mut combined = self.try_clone()?;
        combined.extend_from_array(other)?;
        combined.remove_duplicates();
        Ok(combined)
    }
}
