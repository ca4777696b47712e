/// Scan bounds derived from a flag set's ordered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationRange {
    /// Index of the first member taken into account; also the first candidate.
    pub start: usize,
    /// Bitwise complement of every declared value, in declaration order.
    pub inverted: Vec<i64>,
    /// Upper bound of the scan (inclusive).
    pub max: i64,
}

/// Computes the scan range for `values`.
///
/// With `skip_first` the member at index 0 (the zero sentinel) is ignored and
/// scanning starts at 1. `max` is seeded with that start and OR-ed with every
/// value from `start` on, so an empty range yields `max == start`.
///
/// A layout using the sign bit (e.g. a `u64` flag at `1 << 63`) makes `max`
/// negative. The scan `start..=max` is then empty while [`CombinationRange::combined`]
/// may still accept `max`, so `all_values` is not a subset of
/// `enumerate_all_combinations` for such layouts.
#[must_use]
pub fn compute_range(values: &[i64], skip_first: bool) -> CombinationRange {
    let start = usize::from(skip_first);
    let inverted = values.iter().map(|value| !value).collect();
    let max = values.iter().skip(start).fold(start as i64, |acc, value| acc | value);

    CombinationRange { start, inverted, max }
}

/// Whether `candidate` is accounted for by the members from `from_index` on.
///
/// Masks are applied in ascending index order and the first one that leaves no
/// bits set accepts the candidate. A candidate that still has bits left after
/// the last mask, or that sees no mask at all, is rejected.
#[must_use]
pub fn is_valid_combination(candidate: i64, inverted: &[i64], from_index: usize) -> bool {
    let mut remaining = candidate;
    inverted.iter().skip(from_index).any(|mask| {
        remaining &= mask;
        remaining == 0
    })
}

impl CombinationRange {
    #[must_use]
    pub fn is_valid(&self, candidate: i64) -> bool {
        is_valid_combination(candidate, &self.inverted, self.start)
    }

    /// Valid candidates in `start..=max`, ascending.
    pub fn combinations(&self) -> impl Iterator<Item = i64> + '_ {
        (self.start as i64..=self.max).filter(|candidate| self.is_valid(*candidate))
    }

    /// `max` itself, if it passes the membership test.
    #[must_use]
    pub fn combined(&self) -> Option<i64> {
        self.is_valid(self.max).then_some(self.max)
    }
}
