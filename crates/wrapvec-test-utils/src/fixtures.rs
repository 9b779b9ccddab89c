//! Reusable test fixtures.
//!
//! - [`Record`]: a composite, `Generic`-kind element.
//! - [`seeded_rng`] / [`random_ints`]: deterministic random input.
//! - [`tight_config`] / [`unit_factor_config`]: configs that grow often.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wrapvec_buffer::GrowthConfig;
use wrapvec_core::Element;

/// Bytes from every [`char_order`](wrapvec_core::char_order) bucket.
pub const MIXED_TEXT: &[u8] = b"b~A9 a!0Bz\tZ";

/// A composite element with no intrinsic order.
///
/// Equality compares both fields, so records with the same `id` but
/// different labels are distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: u32,
    pub label: &'static str,
}

impl Record {
    pub fn new(id: u32, label: &'static str) -> Self {
        Self { id, label }
    }
}

impl Element for Record {}

/// Records `0..n` labelled by parity.
pub fn records(n: u32) -> Vec<Record> {
    (0..n)
        .map(|id| Record::new(id, if id % 2 == 0 { "even" } else { "odd" }))
        .collect()
}

/// A ChaCha8 RNG seeded for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` integers drawn uniformly from `[low, high)`.
pub fn random_ints(seed: u64, len: usize, low: i32, high: i32) -> Vec<i32> {
    let mut rng = seeded_rng(seed);
    (0..len).map(|_| rng.random_range(low..high)).collect()
}

/// One slot to start, growing by half each time.
pub fn tight_config() -> GrowthConfig {
    GrowthConfig::new(1, 1.5)
}

/// Starts empty and never multiplies: every growth is exact-fit.
pub fn unit_factor_config() -> GrowthConfig {
    GrowthConfig::new(0, 1.0)
}
