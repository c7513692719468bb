//! This module reconstructs primes and prime k-tuplets from the set bits of a
//! sieve segment and hands them to the single emission target chosen when the
//! engine was built.
//!
//! The target is an `Emitter` variant fixed at construction. It is matched once
//! per segment; the per-byte loop below it is monomorphized for each variant,
//! so no configuration is re-tested per byte.

use std::fmt;
use std::io::{self, Write};

use crate::error::PrimescanError;
use crate::kernels::catalog::{next_residue, NUMBERS_PER_BYTE};
use crate::kernels::tables::LookupTables;
use crate::traits::PrimeConsumer;
use crate::types::TupletClass;

//==================================================================================
// 1. Text Output
//==================================================================================

/// A text destination plus a reusable line buffer.
///
/// Every line is formatted completely before it reaches `out` and is passed on
/// with a single `write_all`, so lines from concurrent writers never interleave.
pub struct TextSink {
    out: Box<dyn Write + Send>,
    line: Vec<u8>,
}

impl TextSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            line: Vec::with_capacity(128),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_prime(&mut self, prime: u64) -> io::Result<()> {
        self.line.clear();
        writeln!(self.line, "{}", prime)?;
        self.out.write_all(&self.line)
    }

    /// Writes `(v1, v2, ..., vN)` where `v1 = byte_low + first` and each
    /// following member comes from the tuplet chain.
    fn write_tuplet(&mut self, byte_low: u64, first: u32, cardinality: usize) -> io::Result<()> {
        self.line.clear();
        self.line.push(b'(');
        let mut residue = first;
        for _ in 1..cardinality {
            write!(self.line, "{}, ", byte_low + u64::from(residue))?;
            residue = next_residue(residue);
        }
        writeln!(self.line, "{})", byte_low + u64::from(residue))?;
        self.out.write_all(&self.line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

//==================================================================================
// 2. Emission Targets
//==================================================================================

/// Where reconstructed values go. Exactly one target is active per engine.
pub enum Emitter {
    /// A plain function called with every prime.
    Function(fn(u64)),
    /// A caller-supplied receiver whose `consume` is called with every prime.
    Receiver(Box<dyn PrimeConsumer>),
    /// Every prime printed on its own line.
    Primes(TextSink),
    /// Every k-tuplet of `class` printed as `(v1, ..., vN)`.
    Tuplets { class: TupletClass, sink: TextSink },
}

impl Emitter {
    /// The class whose value table this target consumes.
    pub fn generation_class(&self) -> TupletClass {
        match self {
            Emitter::Tuplets { class, .. } => *class,
            _ => TupletClass::Prime,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            Emitter::Function(_) => "function-callback",
            Emitter::Receiver(_) => "receiver-callback",
            Emitter::Primes(_) => "print-primes",
            Emitter::Tuplets { .. } => "print-tuplets",
        }
    }

    /// Reconstructs every value encoded in `sieve`, whose first byte starts at
    /// `segment_low`, and delivers it to this target.
    pub fn emit_segment(
        &mut self,
        tables: &LookupTables,
        sieve: &[u8],
        segment_low: u64,
    ) -> Result<(), PrimescanError> {
        match self {
            Emitter::Function(callback) => {
                let callback = *callback;
                for_each_anchor(tables, sieve, segment_low, |byte_low, offset| {
                    callback(byte_low + u64::from(offset));
                    Ok(())
                })?;
            }
            Emitter::Receiver(receiver) => {
                for_each_anchor(tables, sieve, segment_low, |byte_low, offset| {
                    receiver.consume(byte_low + u64::from(offset));
                    Ok(())
                })?;
            }
            Emitter::Primes(sink) => {
                for_each_anchor(tables, sieve, segment_low, |byte_low, offset| {
                    sink.write_prime(byte_low + u64::from(offset))
                })?;
                sink.flush()?;
            }
            Emitter::Tuplets { class, sink } => {
                let cardinality = class.cardinality();
                for_each_anchor(tables, sieve, segment_low, |byte_low, offset| {
                    sink.write_tuplet(byte_low, offset, cardinality)
                })?;
                sink.flush()?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitter::Tuplets { class, .. } => write!(f, "Emitter({}, {})", self.mode_name(), class),
            _ => write!(f, "Emitter({})", self.mode_name()),
        }
    }
}

/// Walks the value rows of every byte, passing the byte's low value and each
/// anchor offset to `visit`. Stops at the first error.
#[inline(always)]
fn for_each_anchor<F>(
    tables: &LookupTables,
    sieve: &[u8],
    segment_low: u64,
    mut visit: F,
) -> io::Result<()>
where
    F: FnMut(u64, u32) -> io::Result<()>,
{
    let mut byte_low = segment_low;
    for &byte in sieve {
        for offset in tables.offsets(byte) {
            visit(byte_low, offset)?;
        }
        byte_low += NUMBERS_PER_BYTE;
    }
    Ok(())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
