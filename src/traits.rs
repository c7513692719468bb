//! This module defines the traits at the seams between the analysis engine and
//! its controller.

/// A receiver of reconstructed primes, the bound-object counterpart of a plain
/// `fn(u64)` callback.
pub trait PrimeConsumer: Send {
    fn consume(&mut self, prime: u64);
}

/// Receives progress after every analysed segment.
pub trait ProgressReporter {
    /// `numbers` is the width of the analysed window on the number line.
    fn report_processed(&mut self, numbers: u64);
}

impl<F: FnMut(u64)> ProgressReporter for F {
    fn report_processed(&mut self, numbers: u64) {
        self(numbers)
    }
}
