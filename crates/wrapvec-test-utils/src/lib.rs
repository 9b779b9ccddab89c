//! Test utilities and fixture types for wrapvec development.
//!
//! Provides a composite [`Record`] element with no default ordering,
//! seeded random inputs, and a few growth configs that exercise the
//! growth policy's edge cases.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    random_ints, records, seeded_rng, tight_config, unit_factor_config, Record, MIXED_TEXT,
};
