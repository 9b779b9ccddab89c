//! Growable array with circular indexing.
//!
//! [`DynArray`] stores elements contiguously in a
//! [`GrowthBuffer`](wrapvec_buffer::GrowthBuffer) and accepts signed
//! indices everywhere: `-1` is the last element, and indices past either
//! end wrap around instead of failing.
//!
//! # Operations
//!
//! | Group        | Module      | Operations |
//! |--------------|-------------|------------|
//! | Construction | [`array`]   | `new`, `with_config`, `from_slice`, `try_clone`, `sub_array`, `split_off` |
//! | Elements     | [`array`]   | `read`, `read_raw`, `append`, `prepend`, `insert`, `remove`, `pop`, `set`, `swap`, `extend_*` |
//! | Reordering   | [`reorder`] | `randomize_order`, `bubble_sort`, `bubble_sort_by`, `reverse` |
//! | Thinning     | [`filter`]  | `filter`, `remove_duplicates` |
//! | Search       | [`search`]  | `find`, `find_by`, `find_all`, `find_all_by`, `contains`, `count` |
//! | Sets         | [`set_ops`] | `unique_elements`, `intersection`, `union` |
//! | Traversal    | [`compute`] | `map`, `reduce` |
//!
//! # Owned copies and borrowed views
//!
//! `read`, `pop`, and `find_all` return owned values. `read_raw` and
//! `as_slice` return references into the live buffer, which the borrow
//! checker invalidates at the next mutation.
//!
//! ```
//! use wrapvec_array::DynArray;
//!
//! let mut numbers = DynArray::from_slice(&[5, 3, 3, 1, 4]).unwrap();
//! numbers.bubble_sort();
//! assert_eq!(numbers.as_slice(), &[1, 3, 3, 4, 5]);
//! assert_eq!(numbers.read(-1).unwrap(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod compute;
pub mod error;
pub mod filter;
mod fmt;
pub mod reorder;
pub mod search;
pub mod set_ops;

pub use array::DynArray;
pub use error::ArrayError;
