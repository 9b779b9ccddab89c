//! Wraparound index normalization.
//!
//! Every index argument in the workspace is a signed `isize` that is mapped
//! onto a valid position with floored modulo: `-1` is the last position,
//! `size` wraps back to `0`, and any magnitude wraps cyclically instead of
//! erroring.

/// Normalize `index` into the exclusive range `[0, size)`.
///
/// Returns `None` when `size == 0`, since no valid position exists.
///
/// ```
/// use wrapvec_core::fix_index;
///
/// assert_eq!(fix_index(5, 2), Some(2));
/// assert_eq!(fix_index(5, -1), Some(4));
/// assert_eq!(fix_index(5, 5), Some(0));
/// assert_eq!(fix_index(5, -11), Some(4));
/// assert_eq!(fix_index(0, 0), None);
/// ```
pub fn fix_index(size: usize, index: isize) -> Option<usize> {
    // Most callers pass an index that is already in range.
    if index >= 0 && (index as usize) < size {
        return Some(index as usize);
    }
    if size == 0 {
        return None;
    }
    Some(floored_mod(index, size))
}

/// Normalize `index` into the inclusive range `[0, size]`.
///
/// Used wherever an index denotes an insertion point, so one past the last
/// element is a valid result. There are always `size + 1` such points, so
/// unlike [`fix_index`] this cannot fail.
///
/// ```
/// use wrapvec_core::fix_index_inclusive;
///
/// assert_eq!(fix_index_inclusive(5, 5), 5);
/// assert_eq!(fix_index_inclusive(5, -1), 5);
/// assert_eq!(fix_index_inclusive(5, 6), 0);
/// assert_eq!(fix_index_inclusive(0, 7), 0);
/// ```
pub fn fix_index_inclusive(size: usize, index: isize) -> usize {
    let slots = size.saturating_add(1);
    if index >= 0 && (index as usize) < slots {
        return index as usize;
    }
    floored_mod(index, slots)
}

/// `index mod size`, rounded toward negative infinity.
///
/// `size` must be non-zero. Sizes above `isize::MAX` cannot hold a negative
/// index's magnitude, so those are reduced in `i128` space.
fn floored_mod(index: isize, size: usize) -> usize {
    match isize::try_from(size) {
        Ok(size) => index.rem_euclid(size) as usize,
        Err(_) => (index as i128).rem_euclid(size as i128) as usize,
    }
}
