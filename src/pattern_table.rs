//! Tables assigning histogram bins to rotation invariant patterns.

use crate::error::Result;
use crate::local_binary_patterns::{is_uniform, min_shift};
use crate::options::check_points;
use log::debug;
use std::collections::HashMap;

/// Maps rotation invariant patterns of a fixed bit width to histogram bins.
///
/// Bins are assigned in increasing order of the first value in `0..2^bits`
/// that canonicalizes to each pattern. Patterns without a bin are counted in
/// the overflow bin, whose index is always `bits + 1`.
///
/// A table is immutable once built and can be shared between extractions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    bits: u32,
    uniform: bool,
    bins: HashMap<u32, usize>,
    patterns: Vec<u32>,
}

impl PatternTable {
    /// Builds the table for patterns of `bits` bits. If `uniform_only` is true,
    /// only patterns with at most two transitions (see
    /// [`count_transitions`](crate::local_binary_patterns::count_transitions))
    /// are given a bin.
    ///
    /// Fails if `bits` is not in `1..=31`. Building enumerates all `2^bits`
    /// patterns, so large widths are slow.
    ///
    /// # Examples
    /// ```
    /// use lbp_texture::pattern_table::PatternTable;
    ///
    /// let table = PatternTable::new(8, true).unwrap();
    /// assert_eq!(table.patterns(), &[0, 1, 3, 7, 15, 31, 63, 127, 255]);
    /// assert_eq!(table.bin(0b00000111), Some(3));
    /// assert_eq!(table.bin(0b00000101), None);
    /// assert_eq!(table.overflow_index(), 9);
    /// ```
    pub fn new(bits: u32, uniform_only: bool) -> Result<PatternTable> {
        check_points(bits)?;

        let mut bins = HashMap::new();
        let mut patterns = Vec::new();

        for num in 0..(1u32 << bits) {
            let canonical = min_shift(num, bits);
            if uniform_only && !is_uniform(canonical, bits) {
                continue;
            }
            bins.entry(canonical).or_insert_with(|| {
                patterns.push(canonical);
                patterns.len() - 1
            });
        }

        debug!(
            "built pattern table: bits={}, uniform={}, patterns={}",
            bits,
            uniform_only,
            patterns.len()
        );

        Ok(PatternTable {
            bits,
            uniform: uniform_only,
            bins,
            patterns,
        })
    }

    /// Table with a bin for every rotation invariant pattern.
    pub fn rotation_invariant(bits: u32) -> Result<PatternTable> {
        PatternTable::new(bits, false)
    }

    /// Table with bins for uniform patterns only.
    pub fn uniform(bits: u32) -> Result<PatternTable> {
        PatternTable::new(bits, true)
    }

    /// Bit width of the patterns in this table.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Whether only uniform patterns have bins.
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// Number of patterns with a bin.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if no pattern has a bin. Never the case for a table built by
    /// [`PatternTable::new`], since the zero pattern is always included.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Length of the histograms built with this table: one bin per
    /// pattern plus one for overflow.
    pub fn histogram_len(&self) -> usize {
        self.patterns.len() + 1
    }

    /// Bin counting patterns that have no entry in the table.
    ///
    /// This is `bits + 1` rather than the last histogram index, so for
    /// rotation invariant tables it can coincide with a pattern's bin or lie
    /// outside the histogram. Every pattern has a bin in those tables, so
    /// extraction never uses the overflow bin for them.
    pub fn overflow_index(&self) -> usize {
        self.bits as usize + 1
    }

    /// Bin assigned to `pattern`, if any. `pattern` should already be
    /// rotation invariant (see [`min_shift`]).
    pub fn bin(&self, pattern: u32) -> Option<usize> {
        self.bins.get(&pattern).copied()
    }

    /// Bin for `pattern`, falling back to the overflow bin.
    pub fn bin_or_overflow(&self, pattern: u32) -> usize {
        self.bin(pattern).unwrap_or_else(|| self.overflow_index())
    }

    /// Patterns in bin order, e.g. for labelling a plotted histogram.
    pub fn patterns(&self) -> &[u32] {
        &self.patterns
    }
}


#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn proptest_every_canonical_pattern_has_a_bin(bits in 1u32..=10, seed in any::<u32>()) {
            let table = PatternTable::rotation_invariant(bits).unwrap();
            let num = seed & ((1 << bits) - 1);
            let bin = table.bin(min_shift(num, bits));
            prop_assert!(bin.is_some());
            prop_assert!(bin.unwrap() < table.len());
        }

        #[test]
        fn proptest_uniform_bins_are_a_subset(bits in 1u32..=10) {
            let all = PatternTable::rotation_invariant(bits).unwrap();
            let uniform = PatternTable::uniform(bits).unwrap();
            for &pattern in uniform.patterns() {
                prop_assert!(all.bin(pattern).is_some());
                prop_assert!(is_uniform(pattern, bits));
            }
        }
    }
}
