//! This module defines the canonical, type-safe representation of the prime
//! clusters the engine can count or generate.

use crate::error::PrimescanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The number of tuplet classes, `Prime` included.
pub const CLASS_COUNT: usize = 7;

/// A class of prime cluster, from single primes up to septuplets.
///
/// The discriminant is the class index used by every lookup table and by
/// `TupletCounts`; the cardinality is `index + 1`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TupletClass {
    Prime = 0,
    Twin = 1,
    Triplet = 2,
    Quadruplet = 3,
    Quintuplet = 4,
    Sextuplet = 5,
    Septuplet = 6,
}

impl TupletClass {
    /// All classes in ladder order.
    pub const ALL: [TupletClass; CLASS_COUNT] = [
        Self::Prime,
        Self::Twin,
        Self::Triplet,
        Self::Quadruplet,
        Self::Quintuplet,
        Self::Sextuplet,
        Self::Septuplet,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of primes in one occurrence of this class.
    #[inline]
    pub fn cardinality(self) -> usize {
        self.index() + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::Twin => "twin",
            Self::Triplet => "triplet",
            Self::Quadruplet => "quadruplet",
            Self::Quintuplet => "quintuplet",
            Self::Sextuplet => "sextuplet",
            Self::Septuplet => "septuplet",
        }
    }
}

impl fmt::Display for TupletClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TupletClass {
    type Err = PrimescanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PrimescanError::InvalidConfig(format!("Unknown tuplet class '{}'", s)))
    }
}

/// A compact set of tuplet classes, one bit per class index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn insert(&mut self, class: TupletClass) {
        self.0 |= 1 << class.index();
    }

    #[inline]
    pub fn contains(self, class: TupletClass) -> bool {
        self.0 & (1 << class.index()) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the members in ladder order.
    pub fn iter(self) -> impl Iterator<Item = TupletClass> {
        TupletClass::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<TupletClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = TupletClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_follows_ladder() {
        for (i, class) in TupletClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(class.cardinality(), i + 1);
            assert_eq!(TupletClass::from_index(i), Some(*class));
        }
        assert_eq!(TupletClass::from_index(CLASS_COUNT), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Twin".parse::<TupletClass>().unwrap(), TupletClass::Twin);
        assert_eq!(" septuplet ".parse::<TupletClass>().unwrap(), TupletClass::Septuplet);
        assert_eq!(TupletClass::Quadruplet.to_string(), "quadruplet");
        assert!(matches!(
            "octuplet".parse::<TupletClass>(),
            Err(PrimescanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_class_set_membership() {
        let set: ClassSet = [TupletClass::Triplet, TupletClass::Prime, TupletClass::Prime]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(TupletClass::Prime));
        assert!(!set.contains(TupletClass::Twin));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![TupletClass::Prime, TupletClass::Triplet]
        );
        assert!(ClassSet::empty().is_empty());
    }
}
