//! Wrapvec: growable arrays and stacks with wraparound indexing.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all wrapvec sub-crates. For most users, adding `wrapvec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wrapvec::prelude::*;
//!
//! let mut a = DynArray::from_slice(&[1, 2, 3, 4]).unwrap();
//! let b = DynArray::from_slice(&[3, 4, 5]).unwrap();
//!
//! // Negative indices count from the end.
//! a.append(6).unwrap();
//! assert_eq!(a.read(-1).unwrap(), 6);
//!
//! // Set operations build new arrays.
//! let common = a.intersection(&b).unwrap();
//! assert_eq!(common.to_string(), "{3, 4}");
//!
//! // Bytes sort in a human-friendly order.
//! let mut letters = DynArray::from_slice(b"bAaB").unwrap();
//! letters.bubble_sort_by(char_order);
//! assert_eq!(letters.to_text(), "AaBb");
//!
//! // The stack shares the same growth policy.
//! let mut stack = DynStack::with_config(GrowthConfig::new(1, 1.5)).unwrap();
//! stack.push_slice(&[1, 2, 3]).unwrap();
//! assert_eq!(stack.pop().unwrap(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wrapvec-core` | `Element` trait, index normalization, comparators |
//! | [`buffer`] | `wrapvec-buffer` | Growth buffer, `GrowthConfig`, `BufferError` |
//! | [`array`] | `wrapvec-array` | `DynArray` and its operations |
//! | [`stack`] | `wrapvec-stack` | `DynStack` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element trait, index normalization, and comparators (`wrapvec-core`).
pub use wrapvec_core as types;

/// Growth buffer and its configuration (`wrapvec-buffer`).
///
/// Most users only need [`buffer::GrowthConfig`] and
/// [`buffer::CapacityGoal`], which are also in the [`prelude`].
pub use wrapvec_buffer as buffer;

/// The growable array container (`wrapvec-array`).
pub use wrapvec_array as array;

/// The growable stack container (`wrapvec-stack`).
pub use wrapvec_stack as stack;

/// Common imports for typical wrapvec usage.
///
/// ```rust
/// use wrapvec::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use wrapvec_array::DynArray;
    pub use wrapvec_stack::DynStack;

    // Configuration
    pub use wrapvec_buffer::{CapacityGoal, GrowthConfig};

    // Elements and ordering
    pub use wrapvec_core::{char_order, default_order, Element, ElementKind};

    // Errors
    pub use wrapvec_array::ArrayError;
    pub use wrapvec_buffer::BufferError;
    pub use wrapvec_stack::StackError;
}
