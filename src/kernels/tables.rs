//! This module builds the two lookup tables that let the counter and the
//! generator spend O(1) work per sieve byte.
//!
//! * The **count table** (7×256) holds, for each tuplet class and byte value,
//!   how many of the class's patterns the byte fully contains. Only rows of
//!   enabled classes are filled.
//! * The **value table** (256×9) holds, for each byte value, the residue
//!   offsets of the anchors of every contained pattern of the single
//!   generation class, ascending and closed by `SENTINEL`.
//!
//! Both tables are single contiguous `ndarray` blocks. They are built once and
//! are read-only afterwards, so one instance can be shared across threads.

use ndarray::{Array2, ArrayView1};

use crate::error::PrimescanError;
use crate::kernels::catalog::{patterns, SENTINEL};
use crate::types::{ClassSet, TupletClass, CLASS_COUNT};

const BYTE_VALUES: usize = 256;

/// Maximum anchors per byte (8 single-bit patterns) plus the sentinel.
pub const VALUE_ROW_LEN: usize = 9;

//==================================================================================
// 1. Private Core Logic
//==================================================================================

/// Iterates the patterns of `class` contained in `byte`, in ascending order.
///
/// The lists are sorted, so any pattern above `byte` ends the scan.
fn contained_patterns(class: TupletClass, byte: u8) -> impl Iterator<Item = u8> {
    patterns(class)
        .iter()
        .copied()
        .take_while(move |&p| p <= byte)
        .filter(move |&p| byte & p == p)
}

/// Allocates a `rows × cols` block filled with `fill`, reporting allocation
/// failure instead of aborting.
fn try_filled_block(
    table: &'static str,
    rows: usize,
    cols: usize,
    fill: u32,
) -> Result<Array2<u32>, PrimescanError> {
    let len = rows * cols;
    let mut data: Vec<u32> = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| PrimescanError::TableAllocation {
            table,
            bytes: len * std::mem::size_of::<u32>(),
        })?;
    data.resize(len, fill);
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

fn build_count_table(classes: ClassSet) -> Result<Array2<u32>, PrimescanError> {
    let mut table = try_filled_block("count", CLASS_COUNT, BYTE_VALUES, 0)?;
    for class in classes.iter() {
        let mut row = table.row_mut(class.index());
        for byte in 0..=u8::MAX {
            row[byte as usize] = contained_patterns(class, byte).count() as u32;
        }
    }
    Ok(table)
}

fn build_value_table(
    class: TupletClass,
    residue_offsets: &[u32; 8],
) -> Result<Array2<u32>, PrimescanError> {
    let mut table = try_filled_block("value", BYTE_VALUES, VALUE_ROW_LEN, SENTINEL)?;
    for byte in 0..=u8::MAX {
        let mut row = table.row_mut(byte as usize);
        for (slot, pattern) in contained_patterns(class, byte).enumerate() {
            row[slot] = residue_offsets[pattern.trailing_zeros() as usize];
        }
    }
    Ok(table)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// The immutable lookup tables of one engine instance.
#[derive(Debug, Clone)]
pub struct LookupTables {
    count_classes: ClassSet,
    generation_class: Option<TupletClass>,
    counts: Option<Array2<u32>>,
    values: Option<Array2<u32>>,
}

impl LookupTables {
    /// Builds the count table for `count_classes` (skipped when empty) and the
    /// value table for `generation_class` (skipped when `None`).
    pub fn build(
        count_classes: ClassSet,
        generation_class: Option<TupletClass>,
        residue_offsets: &[u32; 8],
    ) -> Result<Self, PrimescanError> {
        let counts = if count_classes.is_empty() {
            None
        } else {
            Some(build_count_table(count_classes)?)
        };
        let values = match generation_class {
            Some(class) => Some(build_value_table(class, residue_offsets)?),
            None => None,
        };

        log::debug!(
            "Built lookup tables: count classes {:?}, generation class {:?}, residue offsets {:?}",
            count_classes.iter().collect::<Vec<_>>(),
            generation_class,
            residue_offsets
        );

        Ok(Self {
            count_classes,
            generation_class,
            counts,
            values,
        })
    }

    pub fn count_classes(&self) -> ClassSet {
        self.count_classes
    }

    pub fn generation_class(&self) -> Option<TupletClass> {
        self.generation_class
    }

    /// Occurrences of `class` in `byte`; zero for classes that are not counted.
    #[inline]
    pub fn count(&self, class: TupletClass, byte: u8) -> u32 {
        match &self.counts {
            Some(table) => table[[class.index(), byte as usize]],
            None => 0,
        }
    }

    /// The full 256-entry count row of `class`, if counting is enabled for it.
    pub fn count_row(&self, class: TupletClass) -> Option<ArrayView1<'_, u32>> {
        if !self.count_classes.contains(class) {
            return None;
        }
        self.counts.as_ref().map(|table| table.row(class.index()))
    }

    /// The raw 9-entry value row of `byte`, sentinel padding included.
    pub fn value_row(&self, byte: u8) -> Option<ArrayView1<'_, u32>> {
        self.values.as_ref().map(|table| table.row(byte as usize))
    }

    /// Anchor offsets encoded by `byte`, in ascending order, sentinel excluded.
    /// Empty when no value table was built.
    #[inline]
    pub fn offsets(&self, byte: u8) -> impl Iterator<Item = u32> + '_ {
        self.value_row(byte)
            .into_iter()
            .flat_map(|row| row.into_iter().copied())
            .take_while(|&offset| offset != SENTINEL)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
