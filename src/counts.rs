//! Per-worker accumulators for prime and k-tuplet counts.
//!
//! A `TupletCounts` is owned by exactly one worker and only ever mutated
//! through `&mut`. Workers analysing segments in parallel each keep their own
//! instance; the controller combines them with `merge` once every segment has
//! been analysed.

use serde::Serialize;
use std::fmt;
use std::ops::AddAssign;

use crate::types::{TupletClass, CLASS_COUNT};

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TupletCounts {
    counts: [u64; CLASS_COUNT],
}

impl TupletCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, class: TupletClass) -> u64 {
        self.counts[class.index()]
    }

    #[inline]
    pub fn add(&mut self, class: TupletClass, amount: u64) {
        self.counts[class.index()] += amount;
    }

    /// Folds another worker's totals into this one.
    pub fn merge(&mut self, other: &TupletCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += *theirs;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TupletClass, u64)> + '_ {
        TupletClass::ALL.into_iter().zip(self.counts.iter().copied())
    }

    pub fn as_array(&self) -> &[u64; CLASS_COUNT] {
        &self.counts
    }
}

impl AddAssign<&TupletCounts> for TupletCounts {
    fn add_assign(&mut self, other: &TupletCounts) {
        self.merge(other);
    }
}

impl AddAssign for TupletCounts {
    fn add_assign(&mut self, other: TupletCounts) {
        self.merge(&other);
    }
}

/// Lists the non-zero classes, e.g. `prime: 1226, twin: 203`.
impl fmt::Display for TupletCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (class, count) in self.iter().filter(|&(_, count)| count > 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", class, count)?;
            first = false;
        }
        Ok(())
    }
}
