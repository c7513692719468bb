//! This file is the root of the `primescan` Rust crate, the analysis stage of a
//! segmented prime sieve.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`analyzer`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the types a sieving controller needs to drive the engine.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod analyzer;
pub mod config;
pub mod counts;
pub mod error;
pub mod kernels;
pub mod observability;
pub mod traits;
pub mod types;

#[cfg(test)]
mod utils;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use analyzer::{Analyzer, Segment};
pub use config::{PopcountPolicy, PrimescanConfig};
pub use counts::TupletCounts;
pub use error::PrimescanError;
pub use kernels::catalog::NUMBERS_PER_BYTE;
pub use observability::enable_verbose_logging;
pub use traits::{PrimeConsumer, ProgressReporter};
pub use types::{ClassSet, TupletClass};
