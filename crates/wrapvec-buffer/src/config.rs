//! Growth buffer configuration parameters.

use crate::error::BufferError;

/// Configuration for a [`GrowthBuffer`](crate::GrowthBuffer).
///
/// Controls the initial allocation and how aggressively the buffer grows.
/// Validated at construction; neither value can be changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthConfig {
    /// Number of element slots reserved up front.
    ///
    /// Default: 16. Zero is allowed; the first insertion then grows the
    /// buffer to exactly the required size.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity each time the buffer grows.
    ///
    /// Default: 2.0. Fractional factors are allowed. Must be finite and at
    /// least 1.0.
    pub growth_factor: f32,
}

impl GrowthConfig {
    /// Default initial capacity in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Default growth factor.
    pub const DEFAULT_GROWTH_FACTOR: f32 = 2.0;

    /// Create a config with the given initial capacity and growth factor.
    pub fn new(initial_capacity: usize, growth_factor: f32) -> Self {
        Self {
            initial_capacity,
            growth_factor,
        }
    }

    /// Create a config with the given initial capacity and the default
    /// growth factor.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self::new(initial_capacity, Self::DEFAULT_GROWTH_FACTOR)
    }

    /// Check the structural invariants of this config.
    pub fn validate(&self) -> Result<(), BufferError> {
        if !self.growth_factor.is_finite() || self.growth_factor < 1.0 {
            return Err(BufferError::InvalidGrowthFactor {
                value: self.growth_factor,
            });
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY, Self::DEFAULT_GROWTH_FACTOR)
    }
}
