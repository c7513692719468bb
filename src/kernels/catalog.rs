//! Static pattern data for the wheel-30 sieve byte layout.
//!
//! Each sieve byte covers 30 consecutive integers and each of its 8 bits stands
//! for one residue coprime to 30. A tuplet class is described by the set of bit
//! masks whose simultaneous presence marks one occurrence of that class; the
//! occurrence is anchored at the mask's lowest bit.

use crate::types::{TupletClass, CLASS_COUNT};

/// Integers covered by one sieve byte.
pub const NUMBERS_PER_BYTE: u64 = 30;

/// Offset of each bit position from the low value of its byte.
pub const DEFAULT_RESIDUE_OFFSETS: [u32; 8] = [7, 11, 13, 17, 19, 23, 29, 31];

/// Terminates a value-sequence row.
pub const SENTINEL: u32 = u32::MAX;

const PRIME_PATTERNS: &[u8] = &[0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];
const TWIN_PATTERNS: &[u8] = &[0x06, 0x18, 0xc0];
const TRIPLET_PATTERNS: &[u8] = &[0x07, 0x0e, 0x1c, 0x38];
const QUADRUPLET_PATTERNS: &[u8] = &[0x1e];
const QUINTUPLET_PATTERNS: &[u8] = &[0x1f, 0x3e];
const SEXTUPLET_PATTERNS: &[u8] = &[0x3f];
const SEPTUPLET_PATTERNS: &[u8] = &[0xfe];

/// Ascending bit patterns per class, indexed by `TupletClass::index()`.
pub const PATTERNS: [&[u8]; CLASS_COUNT] = [
    PRIME_PATTERNS,
    TWIN_PATTERNS,
    TRIPLET_PATTERNS,
    QUADRUPLET_PATTERNS,
    QUINTUPLET_PATTERNS,
    SEXTUPLET_PATTERNS,
    SEPTUPLET_PATTERNS,
];

/// Next member of a tuplet, indexed by the current member's residue.
/// Zero marks residues that never start or continue a tuplet.
pub const NEXT_RESIDUE: [u32; NUMBERS_PER_BYTE as usize] = [
    0, //
    0, 0, 0, 0, 0, 0, //
    11, 0, 0, 0, 13, 0, //
    17, 0, 0, 0, 19, 0, //
    23, 0, 0, 0, 29, 0, //
    0, 0, 0, 0, 31,
];

#[inline]
pub fn patterns(class: TupletClass) -> &'static [u8] {
    PATTERNS[class.index()]
}

/// The residue following `residue` inside the same tuplet.
#[inline]
pub fn next_residue(residue: u32) -> u32 {
    NEXT_RESIDUE[residue as usize]
}
