//! # Gauntlet Core
//!
//! Core record types for the Gauntlet evaluation toolkit.
//!
//! An evaluation run is described by [`TestCase`] values: one prompt, the
//! output the system under test produced for it, the output we wanted, and
//! optional supporting context. Curated reference datasets use the parallel
//! [`Golden`] type so they can be stored and exchanged independently of live
//! test objects. The [`dataset`] module converts between the two shapes.

pub mod dataset;
pub mod error;
pub mod golden;
pub mod test_case;

pub use dataset::{
    convert_goldens_to_test_cases, convert_test_cases_to_goldens, goldens_from_json,
    goldens_to_json,
};
pub use error::{CoreError, Result};
pub use golden::Golden;
pub use test_case::TestCase;
