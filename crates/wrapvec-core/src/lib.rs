//! Core types and functions for the wrapvec containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces every container in the workspace shares:
//!
//! - [`Element`] and [`ElementKind`]: what a container may store, and the
//!   informational classifier that selects the default ordering.
//! - [`fix_index`] / [`fix_index_inclusive`]: wraparound index
//!   normalization (negative indices count from the end, overflowing
//!   indices wrap cyclically).
//! - [`default_order`] / [`char_order`]: comparators for the sort family.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod index;
pub mod order;

pub use element::{Element, ElementKind};
pub use index::{fix_index, fix_index_inclusive};
pub use order::{char_order, char_order_bucket, default_order, CharBucket};
