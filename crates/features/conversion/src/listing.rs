use flagkit_kernel::domain::constants::FLAG_SEPARATOR;
use flagkit_kernel::domain::{FlagDefinition, SentinelKind, SentinelLabels};
use flagkit_kernel::{FlagSetType, FlagValue, Introspect, IntoFlagValue, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Which sentinel members [`values`] keeps. The zero ("none") member is always dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFilter {
    pub include_not_applicable: bool,
    pub include_shared: bool,
}

impl Default for ValueFilter {
    fn default() -> Self {
        Self { include_not_applicable: false, include_shared: true }
    }
}

/// Members contained in `raw`, in declaration order.
fn set_in<'m>(
    members: &'m [FlagDefinition],
    raw: i64,
    labels: Option<&'m SentinelLabels>,
) -> impl Iterator<Item = &'m FlagDefinition> {
    members.iter().filter(move |member| {
        member.is_set_in(raw)
            && !labels.is_some_and(|labels| labels.is(SentinelKind::NotApplicable, member.name()))
    })
}

/// Names of every member contained in `value`, in declaration order.
///
/// A zero member is listed only for the zero value.
pub fn flag_names<V: IntoFlagValue>(value: V) -> Vec<Cow<'static, str>> {
    let raw = value.into_flag_value().raw();
    set_in(&V::Set::definitions(), raw, None).map(|member| member.name.clone()).collect()
}

/// Like [`flag_names`], without the "not applicable" member.
pub fn flags_set_in<V: IntoFlagValue>(value: V, labels: &SentinelLabels) -> Vec<Cow<'static, str>> {
    let raw = value.into_flag_value().raw();
    set_in(&V::Set::definitions(), raw, Some(labels)).map(|member| member.name.clone()).collect()
}

/// [`flags_set_in`] for a kind resolved at runtime.
///
/// # Errors
/// Returns [`flagkit_kernel::FlagError::InvalidFlagSetKind`] if the kind is unknown.
pub fn flags_set_in_kind<I: Introspect + ?Sized>(
    introspector: &I,
    raw: i64,
    labels: &SentinelLabels,
) -> Result<Vec<String>> {
    let members = introspector.members()?;
    Ok(set_in(&members, raw, Some(labels)).map(|member| member.name().to_owned()).collect())
}

/// [`flags_set_in`] joined with `,`.
pub fn join_flags<V: IntoFlagValue>(value: V, labels: &SentinelLabels) -> String {
    flags_set_in(value, labels).join(FLAG_SEPARATOR)
}

/// Declared member names in declaration order.
#[must_use]
pub fn names<T: FlagSetType>() -> Vec<Cow<'static, str>> {
    T::definitions().iter().map(|member| member.name.clone()).collect()
}

/// Value → lowercased name. The first declared name wins for aliased values.
#[must_use]
pub fn lowercase_names<T: FlagSetType>() -> BTreeMap<FlagValue<T>, String> {
    let mut map = BTreeMap::new();
    for member in T::definitions().iter() {
        map.entry(FlagValue::from_raw(member.value)).or_insert_with(|| member.name().to_lowercase());
    }
    map
}

/// Declared members of `T` without the sentinel members `filter` excludes.
#[must_use]
pub fn values<T: FlagSetType>(filter: ValueFilter, labels: &SentinelLabels) -> Vec<T> {
    T::definitions()
        .iter()
        .filter(|member| match labels.sentinel_of(member.name()) {
            Some(SentinelKind::None) => false,
            Some(SentinelKind::NotApplicable) => filter.include_not_applicable,
            Some(SentinelKind::Shared) => filter.include_shared,
            None => true,
        })
        .filter_map(|member| T::from_raw(member.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<FlagDefinition> {
        vec![
            FlagDefinition::new("None", 0),
            FlagDefinition::new("Nope", 16),
            FlagDefinition::new("Chrome", 1),
            FlagDefinition::new("Edge", 4),
        ]
    }

    #[test]
    fn set_in_skips_not_applicable_only_with_labels() {
        let members = members();
        let labels = SentinelLabels::default();

        let all: Vec<_> = set_in(&members, 21, None).map(FlagDefinition::name).collect();
        assert_eq!(all, ["Nope", "Chrome", "Edge"]);

        let filtered: Vec<_> = set_in(&members, 21, Some(&labels)).map(FlagDefinition::name).collect();
        assert_eq!(filtered, ["Chrome", "Edge"]);
    }

    #[test]
    fn zero_member_is_listed_for_zero_only() {
        let members = members();
        let zero: Vec<_> = set_in(&members, 0, None).map(FlagDefinition::name).collect();
        assert_eq!(zero, ["None"]);
    }
}
