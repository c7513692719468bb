//! This module defines the core, strongly-typed representations shared by the
//! lookup tables, the counters and the configuration.
//!
//! It currently includes the `TupletClass` ladder (prime through septuplet) and
//! `ClassSet`, the compact set of enabled classes.

pub mod tuplet_class;

// Re-export the main type(s) for easier access.
pub use tuplet_class::{ClassSet, TupletClass, CLASS_COUNT};
