use crate::range::compute_range;
use flagkit_kernel::{FlagSetType, FlagValue, Introspect, Result};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Combination queries over any [`Introspect`] source, such as a registry kind.
///
/// Results are raw values; use the free functions for statically declared flag sets.
#[derive(Debug, Clone, Copy)]
pub struct CombinationEngine<'a, I: ?Sized> {
    introspector: &'a I,
}

impl<'a, I: Introspect + ?Sized> CombinationEngine<'a, I> {
    pub const fn new(introspector: &'a I) -> Self {
        Self { introspector }
    }

    /// Every value in `start..=max` accepted by the membership test, minus an unnamed zero.
    ///
    /// # Errors
    /// Returns [`flagkit_kernel::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    #[instrument(level = "trace", skip(self), fields(kind = self.introspector.kind()))]
    pub fn enumerate_all_combinations(&self, skip_first: bool) -> Result<BTreeSet<i64>> {
        let range = compute_range(&self.introspector.ordered_values()?, skip_first);
        trace!(start = range.start, max = range.max, "Scanning combinations");

        let mut result = range.combinations().collect();
        self.exclude_unnamed_zero(&mut result);
        trace!(count = result.len(), "Combinations computed");
        Ok(result)
    }

    /// The single combined value (`max`) if it is valid, minus an unnamed zero.
    ///
    /// # Errors
    /// Returns [`flagkit_kernel::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    #[instrument(level = "trace", skip(self), fields(kind = self.introspector.kind()))]
    pub fn all_values(&self, skip_first: bool) -> Result<BTreeSet<i64>> {
        let range = compute_range(&self.introspector.ordered_values()?, skip_first);

        let mut result = range.combined().into_iter().collect();
        self.exclude_unnamed_zero(&mut result);
        Ok(result)
    }

    fn exclude_unnamed_zero(&self, result: &mut BTreeSet<i64>) {
        let name = self.introspector.name_of(0).unwrap_or_else(|err| {
            debug!(error = %err, "Zero lookup failed, treating zero as unnamed");
            None
        });
        exclude_unnamed_zero(result, name.as_deref(), self.introspector.kind());
    }
}

/// Every valid combination of `T`'s declared values.
///
/// With `skip_first` the zero sentinel at index 0 is ignored and the scan
/// starts at 1.
#[must_use]
pub fn enumerate_all_combinations<T: FlagSetType>(skip_first: bool) -> BTreeSet<FlagValue<T>> {
    let range = compute_range(&T::ordered_values(), skip_first);
    let mut result = range.combinations().collect();
    exclude_unnamed_zero(&mut result, T::name_of(0).as_deref(), T::KIND);
    result.into_iter().map(FlagValue::from_raw).collect()
}

/// The one combined value representing every selected member of `T`.
///
/// Empty when the combined value fails the membership test or is an unnamed zero.
#[must_use]
pub fn all_values<T: FlagSetType>(skip_first: bool) -> BTreeSet<FlagValue<T>> {
    let range = compute_range(&T::ordered_values(), skip_first);
    let mut result = range.combined().into_iter().collect();
    exclude_unnamed_zero(&mut result, T::name_of(0).as_deref(), T::KIND);
    result.into_iter().map(FlagValue::from_raw).collect()
}

fn exclude_unnamed_zero(result: &mut BTreeSet<i64>, zero_name: Option<&str>, kind: &str) {
    if zero_name.is_some_and(|name| !name.is_empty()) {
        return;
    }
    if result.remove(&0) {
        debug!(kind, "Removed unnamed zero from combinations");
    }
}
