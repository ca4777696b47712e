use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One declared member of a flag set: a name and its underlying integer value.
///
/// Values are stored as `i64` regardless of the flag set's own representation and
/// are not required to be powers of two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagDefinition {
    pub name: Cow<'static, str>,
    pub value: i64,
}

impl FlagDefinition {
    /// Const constructor used by generated registration tables.
    #[must_use]
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self { name: Cow::Borrowed(name), value }
    }

    /// Constructor for tables assembled at runtime.
    #[must_use]
    pub fn owned(name: impl Into<String>, value: i64) -> Self {
        Self { name: Cow::Owned(name.into()), value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Containment test: `(value & member) == member`.
    ///
    /// A zero member is only contained in the zero value, otherwise every value
    /// would report it.
    #[must_use]
    pub const fn is_set_in(&self, value: i64) -> bool {
        if self.value == 0 { value == 0 } else { value & self.value == self.value }
    }
}

/// Read-only queries over an ordered member list.
pub trait Members {
    /// Underlying values in declaration order.
    fn ordered_values(&self) -> Vec<i64>;

    /// Name of the first member declared with exactly `value`.
    fn name_of(&self, value: i64) -> Option<&FlagDefinition>;

    /// Member whose name matches `name`.
    fn find(&self, name: &str, case_insensitive: bool) -> Option<&FlagDefinition>;
}

impl Members for [FlagDefinition] {
    fn ordered_values(&self) -> Vec<i64> {
        self.iter().map(|member| member.value).collect()
    }

    fn name_of(&self, value: i64) -> Option<&FlagDefinition> {
        self.iter().find(|member| member.value == value)
    }

    fn find(&self, name: &str, case_insensitive: bool) -> Option<&FlagDefinition> {
        if case_insensitive {
            self.iter().find(|member| eq_ignore_case(&member.name, name))
        } else {
            self.iter().find(|member| member.name == name)
        }
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().flat_map(char::to_lowercase).eq(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSERS: &[FlagDefinition] = &[
        FlagDefinition::new("None", 0),
        FlagDefinition::new("Chrome", 1),
        FlagDefinition::new("Firefox", 2),
        FlagDefinition::new("Edge", 4),
    ];

    #[test]
    fn zero_member_is_only_set_in_zero() {
        assert!(BROWSERS[0].is_set_in(0));
        assert!(!BROWSERS[0].is_set_in(5));
        assert!(BROWSERS[1].is_set_in(5));
        assert!(!BROWSERS[2].is_set_in(5));
    }

    #[test]
    fn find_respects_case_mode() {
        assert_eq!(BROWSERS.find("chrome", true).map(|m| m.value), Some(1));
        assert!(BROWSERS.find("chrome", false).is_none());
        assert_eq!(BROWSERS.find("Chrome", false).map(|m| m.value), Some(1));
    }

    #[test]
    fn name_of_returns_first_declared_alias() {
        let members =
            [FlagDefinition::new("Read", 1), FlagDefinition::owned("Inspect", 1)];
        assert_eq!(members.name_of(1).map(FlagDefinition::name), Some("Read"));
        assert!(members.name_of(2).is_none());
    }
}
