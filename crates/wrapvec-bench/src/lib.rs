//! Benchmark inputs for the wrapvec containers.
//!
//! Provides deterministic, seeded inputs so that runs are comparable:
//!
//! - [`shuffled_ints`]: a permutation of `0..len`
//! - [`printable_bytes`]: random printable ASCII for `char_order` sorts
//! - [`filled_array`] / [`filled_stack`]: containers preloaded with
//!   [`shuffled_ints`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wrapvec_array::DynArray;
use wrapvec_stack::DynStack;

/// Element counts every benchmark group sweeps over.
pub const SIZES: [usize; 3] = [64, 512, 4096];

/// Largest size the quadratic operations (sort, dedup, set ops) are run at.
pub const QUADRATIC_LIMIT: usize = 512;

/// A seeded permutation of `0..len`.
pub fn shuffled_ints(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len as i64).collect();
    values.shuffle(&mut rng);
    values
}

/// `len` random bytes from `' '..='~'`.
pub fn printable_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(b' '..=b'~')).collect()
}

/// A default-config array holding [`shuffled_ints`].
pub fn filled_array(len: usize, seed: u64) -> DynArray<i64> {
    let mut array = DynArray::new();
    for value in shuffled_ints(len, seed) {
        if array.append(value).is_err() {
            break;
        }
    }
    array
}

/// A default-config stack holding [`shuffled_ints`], last value on top.
pub fn filled_stack(len: usize, seed: u64) -> DynStack<i64> {
    let mut stack = DynStack::new();
    for value in shuffled_ints(len, seed) {
        if stack.push(value).is_err() {
            break;
        }
    }
    stack
}
