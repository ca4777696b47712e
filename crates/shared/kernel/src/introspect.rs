use crate::error::Result;
use crate::flag_set::FlagSetType;
use flagkit_domain::constants::FLAG_SEPARATOR;
use flagkit_domain::{FlagDefinition, FlagTable, Members};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Queries over a flag set's static declaration.
///
/// Implementors only supply [`Introspect::members`]; the remaining queries are
/// derived from it. Every query fails with `InvalidFlagSetKind` when the
/// underlying kind is not a flag set.
pub trait Introspect {
    /// Name of the flag set being inspected.
    fn kind(&self) -> &str;

    /// Declared members in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    fn members(&self) -> Result<Cow<'_, [FlagDefinition]>>;

    /// Underlying values in declaration order.
    ///
    /// # Errors
    /// Returns [`crate::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    fn ordered_values(&self) -> Result<Vec<i64>> {
        Ok(self.members()?.ordered_values())
    }

    /// Declared name for exactly `value`, or `None` when no member has it.
    ///
    /// # Errors
    /// Returns [`crate::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    fn name_of(&self, value: i64) -> Result<Option<String>> {
        Ok(self.members()?.name_of(value).map(|member| member.name().to_owned()))
    }

    /// Raw value for a member name, a comma-separated name list, or a decimal literal.
    ///
    /// # Errors
    /// Returns [`crate::FlagError::InvalidFlagSetKind`] if the kind is unknown.
    fn try_parse(&self, text: &str, case_insensitive: bool) -> Result<Option<i64>> {
        Ok(parse_raw(&self.members()?, text, case_insensitive))
    }
}

impl Introspect for FlagTable {
    fn kind(&self) -> &str {
        FlagTable::kind(self)
    }

    fn members(&self) -> Result<Cow<'_, [FlagDefinition]>> {
        Ok(Cow::Borrowed(FlagTable::members(self)))
    }
}

/// [`Introspect`] view over a statically declared [`FlagSetType`].
pub struct TypeIntrospector<T>(PhantomData<fn() -> T>);

impl<T: FlagSetType> TypeIntrospector<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: FlagSetType> Default for TypeIntrospector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FlagSetType> fmt::Debug for TypeIntrospector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeIntrospector").field(&T::KIND).finish()
    }
}

impl<T: FlagSetType> Introspect for TypeIntrospector<T> {
    fn kind(&self) -> &str {
        T::KIND
    }

    fn members(&self) -> Result<Cow<'_, [FlagDefinition]>> {
        Ok(T::definitions())
    }
}

/// Resolves `text` against `members`.
///
/// Accepts a decimal literal, a member name, or names joined with `,` (OR-ed
/// together). Surrounding whitespace is ignored; any unknown name fails the parse.
pub(crate) fn parse_raw(
    members: &[FlagDefinition],
    text: &str,
    case_insensitive: bool,
) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(number) = text.parse::<i64>() {
        return Some(number);
    }

    text.split(FLAG_SEPARATOR).try_fold(0_i64, |acc, part| {
        members.find(part.trim(), case_insensitive).map(|member| acc | member.value)
    })
}
