//! The [`DynStack`] container.

use std::fmt;
use std::mem;

use wrapvec_buffer::{CapacityGoal, GrowthBuffer, GrowthConfig};
use wrapvec_core::Element;

use crate::error::StackError;

/// A last-in, first-out stack on the shared exponential growth policy.
///
/// Only the top element is reachable. Capacity only ever shrinks through
/// an explicit [`shrink`](Self::shrink).
#[derive(Clone)]
pub struct DynStack<T> {
    buf: GrowthBuffer<T>,
}

impl<T: Element> DynStack<T> {
    // ── Construction ───────────────────────────────────────────────

    /// Create an empty stack with the default config.
    pub fn new() -> Self {
        Self {
            buf: GrowthBuffer::default(),
        }
    }

    /// Create an empty stack with an explicit initial capacity and growth
    /// factor.
    pub fn with_config(config: GrowthConfig) -> Result<Self, StackError> {
        Ok(Self {
            buf: GrowthBuffer::new(config)?,
        })
    }

    /// Create a stack by pushing `values` in order, so the last one ends
    /// up on top.
    pub fn from_slice(values: &[T]) -> Result<Self, StackError> {
        let mut stack = Self::new();
        stack.push_slice(values)?;
        Ok(stack)
    }

    // ── Top access ─────────────────────────────────────────────────

    /// Owned copy of the top element.
    pub fn peek(&self) -> Result<T, StackError> {
        self.top_checked("peek").cloned()
    }

    /// Borrowed view of the top element.
    pub fn top(&self) -> Result<&T, StackError> {
        self.top_checked("top")
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.buf
            .pop()
            .ok_or(StackError::EmptyStack { operation: "pop" })
    }

    /// Remove the top element without returning it.
    pub fn pop_silent(&mut self) -> Result<(), StackError> {
        self.buf
            .pop()
            .map(drop)
            .ok_or(StackError::EmptyStack {
                operation: "pop_silent",
            })
    }

    /// Push one element.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        self.buf.push(value)?;
        Ok(())
    }

    /// Push every element of `values` in order, growing once for the
    /// batch.
    pub fn push_slice(&mut self, values: &[T]) -> Result<(), StackError> {
        self.buf.extend_from_slice(values)?;
        Ok(())
    }

    // ── Memory and metadata ────────────────────────────────────────

    /// Remove every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Reduce capacity toward `goal`, never below the current length.
    pub fn shrink(&mut self, goal: CapacityGoal) {
        self.buf.shrink(goal);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Size of one element in bytes.
    pub fn element_width(&self) -> usize {
        mem::size_of::<T>()
    }

    /// The elements from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    fn top_checked(&self, operation: &'static str) -> Result<&T, StackError> {
        self.buf
            .as_slice()
            .last()
            .ok_or(StackError::EmptyStack { operation })
    }
}

impl<T: Element> Default for DynStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for DynStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynStack")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}
