//! The exponential growth buffer.
//!
//! A [`GrowthBuffer`] wraps a `Vec<T>` and tracks a logical capacity that
//! only changes through [`grow`](GrowthBuffer::grow) and
//! [`shrink`](GrowthBuffer::shrink). The backing vector always holds at
//! least that many slots, so the element primitives below never trigger an
//! implicit reallocation.

use std::fmt;
use std::mem;

use crate::config::GrowthConfig;
use crate::error::BufferError;

/// How far [`GrowthBuffer::grow`] or [`GrowthBuffer::shrink`] should move
/// the capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityGoal {
    /// Reach (at least, for growth; at most, for shrinking) this many slots.
    Target(usize),
    /// Move by exactly one growth step, even if no slot is needed.
    Step,
}

/// Contiguous element storage with an exponential growth policy.
pub struct GrowthBuffer<T> {
    /// Backing storage. `data.capacity() >= capacity` at all times.
    data: Vec<T>,
    /// Logical capacity in elements, as set by the growth policy.
    capacity: usize,
    /// Multiplier applied on each growth step. Always finite and >= 1.0.
    growth_factor: f32,
}

impl<T> GrowthBuffer<T> {
    /// Create an empty buffer, reserving `config.initial_capacity` slots.
    pub fn new(config: GrowthConfig) -> Result<Self, BufferError> {
        Self::from_vec(Vec::new(), config)
    }

    /// Adopt the elements of `data`.
    ///
    /// The resulting capacity is the larger of `config.initial_capacity`
    /// and `data.len()`.
    pub fn from_vec(mut data: Vec<T>, config: GrowthConfig) -> Result<Self, BufferError> {
        config.validate()?;
        let capacity = config.initial_capacity.max(data.len());
        reserve_slots(&mut data, capacity)?;
        Ok(Self {
            data,
            capacity,
            growth_factor: config.growth_factor,
        })
    }

    /// The config that reproduces this buffer's current capacity and
    /// growth factor.
    pub fn config(&self) -> GrowthConfig {
        GrowthConfig::new(self.capacity, self.growth_factor)
    }

    /// Grow the capacity to satisfy `goal`.
    ///
    /// A [`Target`](CapacityGoal::Target) that already fits is a no-op.
    /// Otherwise the new capacity is `max(floor(capacity * growth_factor),
    /// goal)`, where [`Step`](CapacityGoal::Step) asks for one slot more
    /// than the current capacity.
    ///
    /// On failure the buffer is left exactly as it was.
    pub fn grow(&mut self, goal: CapacityGoal) -> Result<(), BufferError> {
        let target = match goal {
            CapacityGoal::Target(n) if n <= self.capacity => return Ok(()),
            CapacityGoal::Target(n) => n,
            CapacityGoal::Step => self.capacity.saturating_add(1),
        };
        let new_capacity = scale(self.capacity, self.growth_factor).max(target);

        if let Err(err) = reserve_slots(&mut self.data, new_capacity) {
            log::warn!(
                "wrapvec: failed to grow buffer from {} to {} elements (goal {:?})",
                self.capacity,
                new_capacity,
                goal
            );
            return Err(err);
        }

        log::debug!(
            "wrapvec: grew buffer from {} to {} elements",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Shrink the capacity toward `goal`, never below the current length.
    ///
    /// A [`Target`](CapacityGoal::Target) above the current capacity is a
    /// no-op. [`Step`](CapacityGoal::Step) divides the capacity by the
    /// growth factor. Never called implicitly by any other operation.
    pub fn shrink(&mut self, goal: CapacityGoal) {
        let target = match goal {
            CapacityGoal::Target(n) if n > self.capacity => return,
            CapacityGoal::Target(n) => n,
            CapacityGoal::Step => unscale(self.capacity, self.growth_factor),
        };
        let new_capacity = target.max(self.data.len());
        if new_capacity == self.capacity {
            return;
        }

        self.data.shrink_to(new_capacity);
        log::debug!(
            "wrapvec: shrank buffer from {} to {} elements",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
    }

    /// Append one element, growing first if needed.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.grow(CapacityGoal::Target(self.required(1)?))?;
        self.data.push(value);
        Ok(())
    }

    /// Insert one element at `index`, shifting later elements toward the
    /// end.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. Callers normalize indices beforehand.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        self.grow(CapacityGoal::Target(self.required(1)?))?;
        self.data.insert(index, value);
        Ok(())
    }

    /// Append every element of `values`, growing once for the whole batch.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), BufferError>
    where
        T: Clone,
    {
        self.grow(CapacityGoal::Target(self.required(values.len())?))?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Move every element of `values` into this buffer, growing once for
    /// the whole batch. `values` is left empty on success and untouched on
    /// failure.
    pub fn append_vec(&mut self, values: &mut Vec<T>) -> Result<(), BufferError> {
        self.grow(CapacityGoal::Target(self.required(values.len())?))?;
        self.data.append(values);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// toward the start.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Drop every element past `len`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Growth factor applied on each growth step.
    pub fn growth_factor(&self) -> f32 {
        self.growth_factor
    }

    /// Size of the logical capacity in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity.saturating_mul(mem::size_of::<T>())
    }

    /// The stored elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The stored elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Fallible deep copy with the same capacity and growth factor.
    pub fn try_clone(&self) -> Result<Self, BufferError>
    where
        T: Clone,
    {
        let mut copy = Self::new(self.config())?;
        copy.data.extend_from_slice(&self.data);
        Ok(copy)
    }

    /// Length after adding `additional` elements.
    fn required(&self, additional: usize) -> Result<usize, BufferError> {
        self.data
            .len()
            .checked_add(additional)
            .ok_or(BufferError::AllocationFailed {
                requested: usize::MAX,
                bytes: usize::MAX,
            })
    }
}

impl<T> Default for GrowthBuffer<T> {
    /// An empty buffer with the default config.
    ///
    /// Like the standard collections, this aborts if the initial
    /// reservation cannot be satisfied. Use [`GrowthBuffer::new`] to
    /// observe that failure instead.
    fn default() -> Self {
        let config = GrowthConfig::default();
        Self {
            data: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            growth_factor: config.growth_factor,
        }
    }
}

impl<T: Clone> Clone for GrowthBuffer<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            growth_factor: self.growth_factor,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowthBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowthBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("growth_factor", &self.growth_factor)
            .field("data", &self.data)
            .finish()
    }
}

/// Ensure `data` can hold `capacity` elements without reallocating.
///
/// Leaves `data` untouched on failure.
fn reserve_slots<T>(data: &mut Vec<T>, capacity: usize) -> Result<(), BufferError> {
    let additional = capacity.saturating_sub(data.len());
    data.try_reserve_exact(additional)
        .map_err(|_| BufferError::AllocationFailed {
            requested: capacity,
            bytes: capacity.saturating_mul(mem::size_of::<T>()),
        })
}

fn scale(capacity: usize, factor: f32) -> usize {
    // Float-to-int casts saturate, so huge capacities clamp to usize::MAX.
    (capacity as f64 * factor as f64) as usize
}

fn unscale(capacity: usize, factor: f32) -> usize {
    (capacity as f64 / factor as f64) as usize
}
