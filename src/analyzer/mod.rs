// In: src/analyzer/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Analyzer
// ====================================================================================
//
// The `Analyzer` is the per-segment entry point of the engine. The sieving
// collaborator hands it one segment at a time; everything the segment loop needs
// was resolved once, at construction:
//
//   1. [PrimescanConfig] + optional callback / receiver / output sink
//         |
//         `-> a. `LookupTables::build` -> count table (7x256), value table (256x9)
//         |
//         `-> b. POPCNT probe (unless disabled) -> `hardware_popcount`
//         |
//         `-> c. exactly one `Emitter` variant (or none)
//
//   2. [analyse(segment, counts, progress)]
//         |
//         `-> kernels::count::count_segment      (if any class is counted)
//         |
//         `-> Emitter::emit_segment              (if an emitter is wired)
//         |
//         `-> progress.report_processed(len * 30)
//
// Counts are never shared: each worker passes its own `TupletCounts` and the
// controller merges them once all segments are done. `fork_counter` gives a
// second worker an analyzer over the same `Arc`-shared tables.
// ====================================================================================

use std::io::Write;
use std::sync::Arc;

use crate::config::{PopcountPolicy, PrimescanConfig};
use crate::counts::TupletCounts;
use crate::error::PrimescanError;
use crate::kernels::catalog::NUMBERS_PER_BYTE;
use crate::kernels::count::count_segment;
use crate::kernels::generate::{Emitter, TextSink};
use crate::kernels::popcount;
use crate::kernels::tables::LookupTables;
use crate::traits::{PrimeConsumer, ProgressReporter};
use crate::types::{ClassSet, TupletClass};

/// One window of sieved numbers: bit-packed bytes plus the value of the first
/// byte's low end.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub sieve: &'a [u8],
    pub low: u64,
}

impl<'a> Segment<'a> {
    pub fn new(sieve: &'a [u8], low: u64) -> Self {
        Self { sieve, low }
    }

    /// Width of this window on the number line.
    pub fn span(&self) -> u64 {
        self.sieve.len() as u64 * NUMBERS_PER_BYTE
    }
}

/// Counts and/or reconstructs primes and prime k-tuplets, segment by segment.
#[derive(Debug)]
pub struct Analyzer {
    tables: Arc<LookupTables>,
    count_classes: ClassSet,
    hardware_popcount: bool,
    emitter: Option<Emitter>,
}

impl Analyzer {
    /// Builds an engine that counts `config.count` and prints `config.print`
    /// (if set) to standard output.
    pub fn new(config: &PrimescanConfig) -> Result<Self, PrimescanError> {
        let emitter = config.print.map(|class| printing_emitter(class, TextSink::stdout()));
        Self::from_parts(config, emitter)
    }

    /// Like `new`, but printed lines go to `out` instead of standard output.
    pub fn with_output(
        config: &PrimescanConfig,
        out: Box<dyn Write + Send>,
    ) -> Result<Self, PrimescanError> {
        let class = config.print.ok_or_else(|| {
            PrimescanError::InvalidConfig("An output sink requires a print class".to_string())
        })?;
        Self::from_parts(config, Some(printing_emitter(class, TextSink::new(out))))
    }

    /// Builds an engine that calls `callback` with every prime.
    pub fn with_callback(
        config: &PrimescanConfig,
        callback: fn(u64),
    ) -> Result<Self, PrimescanError> {
        reject_print(config)?;
        Self::from_parts(config, Some(Emitter::Function(callback)))
    }

    /// Builds an engine that calls `receiver.consume` with every prime.
    pub fn with_receiver(
        config: &PrimescanConfig,
        receiver: Box<dyn PrimeConsumer>,
    ) -> Result<Self, PrimescanError> {
        reject_print(config)?;
        Self::from_parts(config, Some(Emitter::Receiver(receiver)))
    }

    fn from_parts(
        config: &PrimescanConfig,
        emitter: Option<Emitter>,
    ) -> Result<Self, PrimescanError> {
        let count_classes = config.count_flags();
        if count_classes.is_empty() && emitter.is_none() {
            return Err(PrimescanError::InvalidConfig(
                "Configuration enables neither counting nor generation".to_string(),
            ));
        }

        let generation_class = emitter.as_ref().map(Emitter::generation_class);
        let tables = LookupTables::build(count_classes, generation_class, &config.residue_offsets)?;

        let hardware_popcount = count_classes.contains(TupletClass::Prime)
            && config.popcount == PopcountPolicy::Auto
            && popcount::is_popcnt_supported();

        log::info!(
            "Analyzer ready: counting {:?}, emitter {:?}, hardware popcount {}",
            count_classes.iter().collect::<Vec<_>>(),
            emitter,
            hardware_popcount
        );

        Ok(Self {
            tables: Arc::new(tables),
            count_classes,
            hardware_popcount,
            emitter,
        })
    }

    /// A counting-only analyzer for another worker. It shares this analyzer's
    /// tables, classes and popcount decision, and never generates.
    pub fn fork_counter(&self) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
            count_classes: self.count_classes,
            hardware_popcount: self.hardware_popcount,
            emitter: None,
        }
    }

    pub fn tables(&self) -> &Arc<LookupTables> {
        &self.tables
    }

    pub fn count_classes(&self) -> ClassSet {
        self.count_classes
    }

    pub fn uses_hardware_popcount(&self) -> bool {
        self.hardware_popcount
    }

    pub fn is_generating(&self) -> bool {
        self.emitter.is_some()
    }

    /// Analyses one segment: counts, generates, then reports progress.
    pub fn analyse(
        &mut self,
        segment: Segment<'_>,
        counts: &mut TupletCounts,
        progress: &mut dyn ProgressReporter,
    ) -> Result<(), PrimescanError> {
        if !self.count_classes.is_empty() {
            self.count(segment.sieve, counts);
        }
        if self.emitter.is_some() {
            self.generate(segment)?;
        }
        progress.report_processed(segment.span());
        Ok(())
    }

    /// Adds the occurrences of every counted class in `sieve` to `counts`.
    pub fn count(&self, sieve: &[u8], counts: &mut TupletCounts) {
        count_segment(
            &self.tables,
            self.count_classes,
            self.hardware_popcount,
            sieve,
            counts,
        );
    }

    /// Reconstructs the values of `segment` and hands them to the emitter.
    /// Does nothing when no emitter is wired.
    pub fn generate(&mut self, segment: Segment<'_>) -> Result<(), PrimescanError> {
        match self.emitter.as_mut() {
            Some(emitter) => emitter.emit_segment(&self.tables, segment.sieve, segment.low),
            None => Ok(()),
        }
    }
}

fn printing_emitter(class: TupletClass, sink: TextSink) -> Emitter {
    match class {
        TupletClass::Prime => Emitter::Primes(sink),
        class => Emitter::Tuplets { class, sink },
    }
}

fn reject_print(config: &PrimescanConfig) -> Result<(), PrimescanError> {
    match config.print {
        Some(class) => Err(PrimescanError::InvalidConfig(format!(
            "A prime callback cannot be combined with printing {}",
            class
        ))),
        None => Ok(()),
    }
}
