use flagkit::combinations::{CombinationEngine, enumerate_all_combinations};
use flagkit::conversion::{join_flags, parse_from_number};
use flagkit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
#[flagset(crate = "flagkit::kernel")]
enum Sites {
    None = 0,
    Blog = 1,
    Shop = 2,
    Forum = 4,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
    #[flagset(crate = "flagkit::kernel", kind = "access")]
    struct Access: u32 {
        const READ = 1;
        const WRITE = 2;
    }
}

#[test]
fn derive_resolves_through_facade() {
    assert_eq!(Sites::KIND, "Sites");
    assert_eq!(Access::KIND, "access");
    assert_eq!(enumerate_all_combinations::<Sites>(true).len(), 7);
}

#[test]
fn facade_exposes_conversion_helpers() {
    let labels = SentinelLabels::default();
    assert_eq!(join_flags(FlagValue::from(Sites::Blog) | Sites::Forum, &labels), "Blog,Forum");
    assert_eq!(parse_from_number(2_u8, Sites::None), Sites::Shop);
}

#[test]
fn registry_kinds_work_through_facade() {
    let mut registry = FlagRegistry::new();
    registry.register::<Access>().expect("valid flag set");

    let kind = registry.kind("access");
    let engine = CombinationEngine::new(&kind);
    let values: Vec<_> = engine.enumerate_all_combinations(false).expect("registered").into_iter().collect();
    assert_eq!(values, [1, 2, 3]);
}
