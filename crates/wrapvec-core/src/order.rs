//! Comparators for the sort family.
//!
//! All comparators return [`Ordering`], where `Less` means the first
//! argument sorts before the second.

use std::cmp::Ordering;

use crate::element::Element;

/// Default ordering between two elements of the same type.
///
/// Dispatches on the element type: integers compare numerically, every
/// other kind is treated as mutually unordered (`Equal`). Callers who need
/// an order over non-integer elements pass their own comparator to the
/// `*_by` operations instead.
pub fn default_order<T: Element>(a: &T, b: &T) -> Ordering {
    a.default_order(b)
}

/// Character class used by [`char_order`], in ascending sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharBucket {
    /// Control bytes, DEL, and everything outside ASCII.
    Unprintable,
    /// Printable ASCII that is not a digit or letter, including space.
    Punctuation,
    /// `'0'..='9'`.
    Digit,
    /// `'A'..='Z'`.
    Uppercase,
    /// `'a'..='z'`.
    Lowercase,
}

/// Classify a byte into its [`CharBucket`].
///
/// Ranges are closed: `'a'`, `'z'`, `'A'`, `'Z'`, `'0'`, `'9'`, `' '` and
/// `'~'` all belong to the bucket they bound.
pub fn char_order_bucket(c: u8) -> CharBucket {
    match c {
        b'a'..=b'z' => CharBucket::Lowercase,
        b'A'..=b'Z' => CharBucket::Uppercase,
        b'0'..=b'9' => CharBucket::Digit,
        b' '..=b'~' => CharBucket::Punctuation,
        _ => CharBucket::Unprintable,
    }
}

/// Human-friendly total order over single bytes.
///
/// Buckets sort as unprintable < punctuation < digit < letter. Letters are
/// compared case-insensitively, and the uppercase form of a letter sorts
/// directly before its lowercase form. Within any other bucket the raw byte
/// value decides.
///
/// ```
/// use wrapvec_core::char_order;
///
/// let mut bytes = *b"bAaB";
/// bytes.sort_by(char_order);
/// assert_eq!(&bytes, b"AaBb");
/// ```
pub fn char_order(a: &u8, b: &u8) -> Ordering {
    let (a, b) = (*a, *b);
    if a == b {
        return Ordering::Equal;
    }

    let bucket_a = char_order_bucket(a);
    let bucket_b = char_order_bucket(b);

    if is_letter(bucket_a) && is_letter(bucket_b) && bucket_a != bucket_b {
        if a.eq_ignore_ascii_case(&b) {
            // Same letter: uppercase first.
            return bucket_a.cmp(&bucket_b);
        }
        return a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
    }

    if bucket_a != bucket_b {
        return bucket_a.cmp(&bucket_b);
    }

    a.cmp(&b)
}

fn is_letter(bucket: CharBucket) -> bool {
    matches!(bucket, CharBucket::Uppercase | CharBucket::Lowercase)
}
