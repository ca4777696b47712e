use flagkit_combinations::{CombinationEngine, all_values, enumerate_all_combinations};
use flagkit_kernel::domain::{FlagDefinition, FlagTable};
use flagkit_kernel::{FlagRegistry, FlagSet, FlagValue};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
enum Browsers {
    None = 0,
    Chrome = 1,
    Firefox = 2,
    Edge = 4,
    Safari = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
enum Sites {
    Nope = 0,
    All = 15,
    Blog = 1,
    Shop = 2,
    Forum = 4,
    Wiki = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
enum Permissions {
    Read = 1,
    Write = 2,
    Delete = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
#[repr(u64)]
enum Wide {
    Low = 1,
    Top = 1 << 63,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
    struct Access: u8 {
        const READ = 1;
        const WRITE = 2;
    }
}

fn raw<T>(values: &BTreeSet<FlagValue<T>>) -> Vec<i64> {
    values.iter().map(|value| value.raw()).collect()
}

#[test]
fn disjoint_layout_enumerates_every_subset() {
    let result = enumerate_all_combinations::<Browsers>(false);
    assert_eq!(raw(&result), (0..16).collect::<Vec<_>>());
}

#[test]
fn named_zero_survives_exclusion() {
    let result = enumerate_all_combinations::<Browsers>(false);
    assert!(result.contains(&FlagValue::from(Browsers::None)));
}

#[test]
fn absent_zero_is_excluded_even_when_accepted() {
    // Candidate 0 clears on the first mask, then zero exclusion drops it.
    let result = enumerate_all_combinations::<Permissions>(false);
    assert_eq!(raw(&result), (1..8).collect::<Vec<_>>());
    assert!(all_values::<Permissions>(false).iter().all(|value| !value.is_empty()));
}

#[test]
fn skip_first_starts_after_the_zero_sentinel() {
    let result = enumerate_all_combinations::<Sites>(true);
    assert_eq!(raw(&result), (1..16).collect::<Vec<_>>());
    assert_eq!(raw(&all_values::<Sites>(true)), [15]);
}

#[test]
fn all_values_returns_the_combined_value() {
    let combined = all_values::<Browsers>(false);
    assert_eq!(raw(&combined), [15]);
    assert_eq!(combined.iter().next().and_then(|value| value.as_member()), None);

    assert_eq!(raw(&all_values::<Browsers>(true)), [15]);
}

#[test]
fn enumeration_is_idempotent() {
    assert_eq!(enumerate_all_combinations::<Sites>(false), enumerate_all_combinations::<Sites>(false));
    assert_eq!(all_values::<Sites>(true), all_values::<Sites>(true));
}

#[test]
fn bitflags_types_use_the_same_engine() {
    let result = enumerate_all_combinations::<Access>(false);
    assert_eq!(raw(&result), [1, 2, 3]);
    let members: Vec<_> = result.iter().filter_map(|value| value.as_member()).collect();
    assert_eq!(members, [Access::READ, Access::WRITE, Access::READ | Access::WRITE]);
}

#[test]
fn engine_works_over_registered_tables() {
    let mut registry = FlagRegistry::new();
    registry.register::<Browsers>().expect("valid flag set");
    registry
        .register_table(FlagTable::new(
            "Gaps",
            vec![FlagDefinition::new("Low", 1), FlagDefinition::new("High", 8)],
        ))
        .expect("valid table");

    let browsers = registry.kind("Browsers");
    let engine = CombinationEngine::new(&browsers);
    assert_eq!(engine.enumerate_all_combinations(false).expect("registered").len(), 16);

    let gaps = registry.kind("Gaps");
    let engine = CombinationEngine::new(&gaps);
    let result = engine.enumerate_all_combinations(false).expect("registered");
    assert_eq!(result, BTreeSet::from([1, 8, 9]));
    assert_eq!(engine.all_values(false).expect("registered"), BTreeSet::from([9]));
}

#[test]
fn blank_zero_name_is_treated_as_unnamed() {
    let table = FlagTable::new(
        "Blank",
        vec![FlagDefinition::new("", 0), FlagDefinition::new("One", 1)],
    );
    let result = CombinationEngine::new(&table).enumerate_all_combinations(false).expect("table");
    assert_eq!(result, BTreeSet::from([1]));
}

#[test]
fn unknown_kind_fails_the_call() {
    let registry = FlagRegistry::new();
    let missing = registry.kind("Missing");
    let engine = CombinationEngine::new(&missing);
    assert!(engine.enumerate_all_combinations(false).is_err());
    assert!(engine.all_values(true).is_err());
}

#[test]
fn sign_bit_layout_scans_nothing_but_keeps_the_combined_value() {
    assert!(enumerate_all_combinations::<Wide>(false).is_empty());
    assert_eq!(raw(&all_values::<Wide>(false)), [i64::MIN | 1]);
}
