//! Growable last-in, first-out stack.
//!
//! [`DynStack`] shares the [`GrowthBuffer`](wrapvec_buffer::GrowthBuffer)
//! growth policy with the array container but exposes only the top of the
//! stack.
//!
//! ```
//! use wrapvec_stack::DynStack;
//!
//! let mut stack = DynStack::from_slice(&[1, 2]).unwrap();
//! stack.push(3).unwrap();
//! assert_eq!(stack.peek().unwrap(), 3);
//! assert_eq!(stack.pop().unwrap(), 3);
//! assert_eq!(stack.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod stack;

pub use error::StackError;
pub use stack::DynStack;
