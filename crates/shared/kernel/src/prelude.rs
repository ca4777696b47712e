//! Glob-importable set of the traits and types most callers need.

pub use crate::domain::{FlagDefinition, FlagTable, LabelConfig, SentinelLabels};
pub use crate::{FlagError, FlagRegistry, FlagSet, FlagSetType, FlagValue, Introspect, IntoFlagValue};
