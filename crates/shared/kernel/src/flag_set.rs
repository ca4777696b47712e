use crate::introspect::parse_raw;
use flagkit_domain::{FlagDefinition, Members};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign};

/// A type whose members are combined with bitwise OR.
///
/// Normally implemented with `#[derive(FlagSet)]`, which generates the
/// registration table from the type declaration.
pub trait FlagSetType: Copy + 'static {
    /// Name the flag set is registered under.
    const KIND: &'static str;

    /// Declared members in declaration order.
    fn definitions() -> Cow<'static, [FlagDefinition]>;

    fn to_raw(self) -> i64;

    /// The member (or, for `bitflags!` types, the combination) with exactly this value.
    fn from_raw(raw: i64) -> Option<Self>;

    fn ordered_values() -> Vec<i64> {
        Self::definitions().ordered_values()
    }

    /// First declared name for exactly `value`.
    fn name_of(value: i64) -> Option<Cow<'static, str>> {
        Self::definitions().name_of(value).map(|member| member.name.clone())
    }

    /// Raw value for a member name, a comma-separated name list, or a decimal literal.
    fn try_parse(text: &str, case_insensitive: bool) -> Option<i64> {
        parse_raw(&Self::definitions(), text, case_insensitive)
    }
}

/// A raw value tagged with its flag-set type.
///
/// Combinations such as `Chrome | Edge` are rarely declared members, so the
/// engine hands them out as `FlagValue<T>` and converts back to `T` only on
/// request via [`FlagValue::as_member`].
pub struct FlagValue<T> {
    raw: i64,
    marker: PhantomData<fn() -> T>,
}

impl<T> FlagValue<T> {
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw, marker: PhantomData }
    }

    #[must_use]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.raw == 0
    }
}

impl<T: FlagSetType> FlagValue<T> {
    /// The declared member with exactly this value, if any.
    #[must_use]
    pub fn as_member(self) -> Option<T> {
        T::from_raw(self.raw)
    }

    /// Declared name for exactly this value.
    #[must_use]
    pub fn name(self) -> Option<Cow<'static, str>> {
        T::name_of(self.raw)
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into().raw;
        self.raw & other == other
    }
}

/// Anything that names a value of one specific flag set: a member or a [`FlagValue`].
pub trait IntoFlagValue {
    type Set: FlagSetType;

    fn into_flag_value(self) -> FlagValue<Self::Set>;
}

impl<T: FlagSetType> IntoFlagValue for T {
    type Set = T;

    fn into_flag_value(self) -> FlagValue<T> {
        FlagValue::from(self)
    }
}

impl<T: FlagSetType> IntoFlagValue for FlagValue<T> {
    type Set = T;

    fn into_flag_value(self) -> Self {
        self
    }
}

impl<T: FlagSetType> From<T> for FlagValue<T> {
    fn from(member: T) -> Self {
        Self::from_raw(member.to_raw())
    }
}

impl<T: FlagSetType, R: Into<Self>> BitOr<R> for FlagValue<T> {
    type Output = Self;

    fn bitor(self, rhs: R) -> Self {
        Self::from_raw(self.raw | rhs.into().raw)
    }
}

impl<T: FlagSetType, R: Into<Self>> BitOrAssign<R> for FlagValue<T> {
    fn bitor_assign(&mut self, rhs: R) {
        self.raw |= rhs.into().raw;
    }
}

/// Renders the declared name for an exact value, otherwise the number.
impl<T: FlagSetType> fmt::Display for FlagValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(&name),
            None => write!(f, "{}", self.raw),
        }
    }
}

impl<T: FlagSetType> fmt::Debug for FlagValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::KIND, self.raw)
    }
}

// Manual impls: `T` is only a marker and must not pick up bounds.

impl<T> Clone for FlagValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlagValue<T> {}

impl<T> PartialEq for FlagValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for FlagValue<T> {}

impl<T> PartialOrd for FlagValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FlagValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<T> Hash for FlagValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}
