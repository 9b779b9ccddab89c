//! Exponential growth buffer backing the wrapvec containers.
//!
//! [`GrowthBuffer`] owns a contiguous `Vec<T>` together with a *logical*
//! capacity governed by a growth factor. Every operation that adds
//! elements first asks the buffer to [`grow`](GrowthBuffer::grow) to the
//! required size, so the backing storage only ever reallocates according
//! to the configured policy:
//!
//! ```text
//! new_capacity = max(floor(capacity * growth_factor), goal)
//! ```
//!
//! Growth is fallible. When the reservation cannot be satisfied the buffer
//! reports [`BufferError::AllocationFailed`] and its contents, length, and
//! capacity are exactly as they were before the call.
//!
//! [`shrink`](GrowthBuffer::shrink) is the symmetric operation. It is only
//! ever invoked explicitly by the owner, never as a side effect of another
//! operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;

pub use buffer::{CapacityGoal, GrowthBuffer};
pub use config::GrowthConfig;
pub use error::BufferError;
