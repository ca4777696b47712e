use crate::definition::FlagDefinition;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A registration table: a named flag set and its members in declaration order.
///
/// Index 0 is conventionally the zero sentinel and index 1 the "all" sentinel,
/// but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTable {
    kind: Cow<'static, str>,
    members: Vec<FlagDefinition>,
}

impl FlagTable {
    #[must_use]
    pub fn new(kind: impl Into<Cow<'static, str>>, members: Vec<FlagDefinition>) -> Self {
        Self { kind: kind.into(), members }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn members(&self) -> &[FlagDefinition] {
        &self.members
    }

    #[must_use]
    pub fn into_parts(self) -> (Cow<'static, str>, Vec<FlagDefinition>) {
        (self.kind, self.members)
    }
}
