use lotto_core::LottoNumber;
use std::collections::{BTreeSet, HashSet};

/// Number of distinct values present in both sets.
pub fn compare(scanned: &[LottoNumber], winning: &[LottoNumber]) -> usize {
    let winning: HashSet<_> = winning.iter().collect();
    scanned
        .iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|n| winning.contains(n))
        .count()
}

/// The matched numbers themselves, ascending.
pub fn matched_numbers(scanned: &[LottoNumber], winning: &[LottoNumber]) -> Vec<LottoNumber> {
    let winning: HashSet<_> = winning.iter().collect();
    scanned
        .iter()
        .filter(|n| winning.contains(n))
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
