use flagkit_kernel::{FlagSetType, FlagValue, Introspect, Result};
use std::fmt::Display;
use tracing::trace;

/// Parses `text` case-insensitively, falling back to `default`.
///
/// Accepts a member name, names joined with `,`, or a decimal literal; the
/// result must be a value `T` can hold.
pub fn parse<T: FlagSetType>(text: &str, default: T) -> T {
    parse_with(text, default, true)
}

/// [`parse`] with an explicit case mode.
pub fn parse_with<T: FlagSetType>(text: &str, default: T, case_insensitive: bool) -> T {
    resolve(text, case_insensitive).unwrap_or_else(|| {
        trace!(kind = T::KIND, text, "Parse fell back to default");
        default
    })
}

/// [`parse`] for optional values: `default` (possibly `None`) on a miss.
pub fn parse_nullable<T: FlagSetType>(text: &str, default: Option<T>) -> Option<T> {
    resolve(text, true).or(default)
}

/// Reinterprets a number as a member of `T`.
///
/// The reinterpreted value is rendered and compared with the number's own
/// rendering: identical strings mean no member has that value, so `default` is
/// returned. Otherwise the rendered member name is parsed. Numbers outside the
/// `i64` range also yield `default`.
pub fn parse_from_number<T, N>(number: N, default: T) -> T
where
    T: FlagSetType,
    N: Copy + Display + TryInto<i64>,
{
    let Ok(raw) = number.try_into() else {
        return default;
    };

    let rendered = FlagValue::<T>::from_raw(raw).to_string();
    if rendered == number.to_string() {
        trace!(kind = T::KIND, raw, "Number is not a declared member");
        return default;
    }
    parse(&rendered, default)
}

/// Parses each text case-sensitively, skipping misses and repeated members.
///
/// Returns `default` when `texts` is `None` or nothing parses.
pub fn parse_list<T, S>(texts: Option<&[S]>, default: Vec<T>) -> Vec<T>
where
    T: FlagSetType,
    S: AsRef<str>,
{
    let Some(texts) = texts else {
        return default;
    };

    let mut parsed: Vec<T> = Vec::with_capacity(texts.len());
    for member in texts.iter().filter_map(|text| resolve::<T>(text.as_ref(), false)) {
        if !parsed.iter().any(|seen| seen.to_raw() == member.to_raw()) {
            parsed.push(member);
        }
    }

    if parsed.is_empty() { default } else { parsed }
}

/// [`parse_with`] for a kind resolved at runtime, returning raw values.
///
/// # Errors
/// Returns [`flagkit_kernel::FlagError::InvalidFlagSetKind`] if the kind is unknown.
/// A text that does not parse is not an error.
pub fn parse_kind<I: Introspect + ?Sized>(
    introspector: &I,
    text: &str,
    default: i64,
    case_insensitive: bool,
) -> Result<i64> {
    Ok(introspector.try_parse(text, case_insensitive)?.unwrap_or(default))
}

fn resolve<T: FlagSetType>(text: &str, case_insensitive: bool) -> Option<T> {
    T::try_parse(text, case_insensitive).and_then(T::from_raw)
}
