// In: src/config.rs

//! The single source of truth for sieve analysis configuration.
//!
//! `PrimescanConfig` is created once by the controller (from code or from a
//! JSON document), consumed by `Analyzer` construction, and never consulted
//! again on the per-segment path. Everything the hot loops need is resolved
//! into lookup tables and a fixed emitter at construction time.

use serde::{Deserialize, Serialize};

use crate::error::PrimescanError;
use crate::kernels::catalog::DEFAULT_RESIDUE_OFFSETS;
use crate::types::{ClassSet, TupletClass};

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Controls the hardware population-count fast path for plain-prime counting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PopcountPolicy {
    /// **Default:** use the CPU's POPCNT instruction when it is detected at
    /// construction, otherwise fall back to the lookup table.
    #[default]
    Auto,

    /// Always count through the per-byte lookup table.
    Disabled,
}

//==================================================================================
// II. The Unified PrimescanConfig
//==================================================================================

/// Construction-time configuration of one analysis engine instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PrimescanConfig {
    /// The classes whose occurrences are counted. Order and duplicates do not matter.
    #[serde(default)]
    pub count: Vec<TupletClass>,

    /// If set, every reconstructed value of this class is printed as text.
    /// `prime` prints one value per line, any other class prints `(v1, ..., vN)`.
    #[serde(default)]
    pub print: Option<TupletClass>,

    #[serde(default)]
    pub popcount: PopcountPolicy,

    /// Offset from a byte's low value bound to each of its 8 bit positions.
    #[serde(default = "default_residue_offsets")]
    pub residue_offsets: [u32; 8],
}

impl Default for PrimescanConfig {
    fn default() -> Self {
        Self {
            count: Vec::new(),
            print: None,
            popcount: PopcountPolicy::default(),
            residue_offsets: default_residue_offsets(),
        }
    }
}

impl PrimescanConfig {
    /// A config that only counts the given classes.
    pub fn counting(classes: &[TupletClass]) -> Self {
        Self {
            count: classes.to_vec(),
            ..Self::default()
        }
    }

    /// A config that only prints the given class.
    pub fn printing(class: TupletClass) -> Self {
        Self {
            print: Some(class),
            ..Self::default()
        }
    }

    pub fn with_popcount(mut self, policy: PopcountPolicy) -> Self {
        self.popcount = policy;
        self
    }

    pub fn with_residue_offsets(mut self, offsets: [u32; 8]) -> Self {
        self.residue_offsets = offsets;
        self
    }

    /// Parses a config from a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PrimescanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PrimescanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The enabled count classes as a compact set.
    pub fn count_flags(&self) -> ClassSet {
        self.count.iter().copied().collect()
    }
}

/// Helper for `serde` to provide the wheel-30 residue offsets.
fn default_residue_offsets() -> [u32; 8] {
    DEFAULT_RESIDUE_OFFSETS
}
