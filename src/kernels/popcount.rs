//! Hardware population count for plain-prime counting.
//!
//! Every set bit of a sieve byte is exactly one prime, so the prime count of a
//! run of bytes is its population count. On x86 the POPCNT instruction is
//! probed at runtime; the chunk loop is compiled with that target feature and
//! only entered after a successful probe.

/// Returns true when the CPU supports the POPCNT instruction.
pub fn is_popcnt_supported() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::is_x86_feature_detected!("popcnt")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

/// Sums the population count of every full 8-byte chunk of `sieve` that is
/// followed by at least one more byte.
///
/// Returns `(bits, consumed)`. The remaining `sieve[consumed..]` is never empty
/// for a non-empty input: between 1 and 8 trailing bytes are left to the caller.
pub fn count_chunks(sieve: &[u8]) -> (u64, usize) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_popcnt_supported() {
            // SAFETY: the POPCNT feature was detected on this CPU.
            return unsafe { count_chunks_popcnt(sieve) };
        }
    }
    count_chunks_portable(sieve)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "popcnt")]
unsafe fn count_chunks_popcnt(sieve: &[u8]) -> (u64, usize) {
    count_chunks_portable(sieve)
}

#[inline(always)]
fn count_chunks_portable(sieve: &[u8]) -> (u64, usize) {
    let mut bits = 0u64;
    let mut i = 0usize;
    while i + 8 < sieve.len() {
        let word: u64 = bytemuck::pod_read_unaligned(&sieve[i..i + 8]);
        bits += u64::from(word.count_ones());
        i += 8;
    }
    (bits, i)
}
