// In: src/error.rs

//! This module defines the single, unified error type for the entire primescan library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimescanError {
    // =========================================================================
    // === Construction Errors
    // =========================================================================
    /// A lookup table could not be allocated. Construction is aborted.
    #[error("Failed to allocate the {table} lookup table ({bytes} bytes)")]
    TableAllocation { table: &'static str, bytes: usize },

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),

    #[error("Logger initialization failed: {0}")]
    Logging(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the text output sink (usually standard output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An `ndarray` shape error while assembling a table block.
    #[error("Table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
