//! This module collects the pure, stateless kernels of the analysis engine.
//!
//! The kernels know nothing about configuration files or controllers: they
//! take lookup tables, a sieve slice and an output target, and the `Analyzer`
//! decides which of them run for each segment.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Static pattern data: per-class bit masks, the tuplet chain, residue offsets.
pub mod catalog;

/// Construction-time lookup tables built from the catalog.
pub mod tables;

/// Per-segment kernels.
pub mod count;
pub mod generate;
pub mod popcount;
