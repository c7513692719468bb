//! This module contains the pure, stateless kernel that counts primes and prime
//! k-tuplets in one sieve segment.
//!
//! No values are reconstructed here: every byte costs one table lookup per
//! enabled class, and plain primes can skip the table entirely through the
//! hardware popcount path.

use crate::counts::TupletCounts;
use crate::kernels::popcount;
use crate::kernels::tables::LookupTables;
use crate::types::{ClassSet, TupletClass};

/// Sums the count-table entries of `class` over `bytes`.
#[inline]
fn table_count(tables: &LookupTables, class: TupletClass, bytes: &[u8]) -> u64 {
    match tables.count_row(class) {
        Some(row) => bytes.iter().map(|&b| u64::from(row[b as usize])).sum(),
        None => 0,
    }
}

/// Adds the occurrences of every class in `classes` within `sieve` to `counts`.
///
/// With `hardware_popcount`, plain primes are counted 8 bytes at a time and
/// only the trailing 1..=8 bytes go through the table.
pub fn count_segment(
    tables: &LookupTables,
    classes: ClassSet,
    hardware_popcount: bool,
    sieve: &[u8],
    counts: &mut TupletCounts,
) {
    if classes.contains(TupletClass::Prime) {
        let (mut primes, consumed) = if hardware_popcount {
            popcount::count_chunks(sieve)
        } else {
            (0, 0)
        };
        primes += table_count(tables, TupletClass::Prime, &sieve[consumed..]);
        counts.add(TupletClass::Prime, primes);
    }

    for class in classes.iter().filter(|&c| c != TupletClass::Prime) {
        counts.add(class, table_count(tables, class, sieve));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::catalog::DEFAULT_RESIDUE_OFFSETS;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn tables_for(classes: ClassSet) -> LookupTables {
        LookupTables::build(classes, None, &DEFAULT_RESIDUE_OFFSETS).unwrap()
    }

    #[test]
    fn test_counts_all_classes_of_full_bytes() {
        let classes: ClassSet = TupletClass::ALL.into_iter().collect();
        let tables = tables_for(classes);
        let mut counts = TupletCounts::new();
        count_segment(&tables, classes, false, &[0xff, 0xff], &mut counts);

        assert_eq!(counts.as_array(), &[16, 6, 8, 2, 4, 2, 2]);
    }

    #[test]
    fn test_only_enabled_classes_are_touched() {
        let classes: ClassSet = [TupletClass::Twin].into_iter().collect();
        let tables = tables_for(classes);
        let mut counts = TupletCounts::new();
        count_segment(&tables, classes, true, &[0x06, 0x18, 0x01], &mut counts);

        assert_eq!(counts.get(TupletClass::Twin), 2);
        assert_eq!(counts.get(TupletClass::Prime), 0);
    }

    #[test]
    fn test_counting_twice_doubles_totals() {
        let classes: ClassSet = TupletClass::ALL.into_iter().collect();
        let tables = tables_for(classes);
        let sieve: Vec<u8> = (0..1000u32).map(|i| (i * 37 % 256) as u8).collect();

        let mut once = TupletCounts::new();
        count_segment(&tables, classes, false, &sieve, &mut once);

        let mut twice = TupletCounts::new();
        count_segment(&tables, classes, false, &sieve, &mut twice);
        count_segment(&tables, classes, false, &sieve, &mut twice);

        for (class, n) in once.iter() {
            assert_eq!(twice.get(class), 2 * n, "{class}");
        }
    }

    #[test]
    fn test_popcount_path_matches_table_path() {
        let classes: ClassSet = [TupletClass::Prime].into_iter().collect();
        let tables = tables_for(classes);
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 64, 1000, 4099] {
            let sieve: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();

            let mut by_table = TupletCounts::new();
            count_segment(&tables, classes, false, &sieve, &mut by_table);
            let mut by_popcount = TupletCounts::new();
            count_segment(&tables, classes, true, &sieve, &mut by_popcount);

            let expected: u64 = sieve.iter().map(|b| u64::from(b.count_ones())).sum();
            assert_eq!(by_table.get(TupletClass::Prime), expected, "len {len}");
            assert_eq!(by_popcount, by_table, "len {len}");
        }
    }
}
