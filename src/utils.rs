//! Shared helpers for the unit tests of every module.
//!
//! 1.  `SharedBuffer`, a cloneable `Write` target whose contents can be read
//!     back after it has been boxed into a text sink.
//! 2.  A reference wheel-30 sieve built by trial division, so counts and
//!     reconstructed values can be checked against brute force.

use bitvec::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::kernels::catalog::{DEFAULT_RESIDUE_OFFSETS, NUMBERS_PER_BYTE};

#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Builds `bytes` sieve bytes starting at zero with the default residue layout:
/// bit `i` of byte `k` is set iff `30k + DEFAULT_RESIDUE_OFFSETS[i]` is prime.
pub fn reference_sieve(bytes: usize) -> Vec<u8> {
    let mut bits: BitVec<u8, Lsb0> = BitVec::repeat(false, bytes * 8);
    for k in 0..bytes {
        let low = k as u64 * NUMBERS_PER_BYTE;
        for (slot, &offset) in DEFAULT_RESIDUE_OFFSETS.iter().enumerate() {
            if is_prime(low + u64::from(offset)) {
                bits.set(k * 8 + slot, true);
            }
        }
    }
    bits.into_vec()
}

/// Primes in `[7, limit)`, ascending.
pub fn primes_below(limit: u64) -> Vec<u64> {
    (7..limit).filter(|&n| is_prime(n)).collect()
}
