use crate::constants::{NONE, NOPE, SHARED};
use crate::table::FlagTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Top-level configuration: sentinel vocabulary plus runtime registration tables.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagKitConfig {
    pub labels: LabelConfig,
    pub tables: Vec<FlagTable>,
}

/// The reserved roles a member name can play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SentinelKind {
    /// Excluded from flag listings ("Nope").
    NotApplicable,
    /// Cross-cutting member, optionally excluded from value listings.
    Shared,
    /// The zero member, never reported as a regular value.
    None,
}

/// Label strings recognized for one flag-set vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelLabels {
    pub not_applicable: String,
    pub shared: String,
    pub none: String,
}

impl SentinelLabels {
    #[must_use]
    pub fn label(&self, kind: SentinelKind) -> &str {
        match kind {
            SentinelKind::NotApplicable => &self.not_applicable,
            SentinelKind::Shared => &self.shared,
            SentinelKind::None => &self.none,
        }
    }

    /// Role played by `name`, if any.
    #[must_use]
    pub fn sentinel_of(&self, name: &str) -> Option<SentinelKind> {
        SentinelKind::iter().find(|kind| self.label(*kind) == name)
    }

    #[must_use]
    pub fn is(&self, kind: SentinelKind, name: &str) -> bool {
        self.label(kind) == name
    }
}

/// Partial labels applied on top of [`LabelConfig::defaults`] for one kind.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverride {
    pub not_applicable: Option<String>,
    pub shared: Option<String>,
    pub none: Option<String>,
}

/// Sentinel labels per flag-set kind.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub defaults: SentinelLabels,
    pub kinds: BTreeMap<String, LabelOverride>,
}

impl LabelConfig {
    /// Registers an override for `kind`, replacing any previous one.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>, labels: LabelOverride) -> Self {
        self.kinds.insert(kind.into(), labels);
        self
    }

    /// Effective labels for `kind`: its override merged onto the defaults.
    #[must_use]
    pub fn labels_for(&self, kind: &str) -> SentinelLabels {
        let Some(over) = self.kinds.get(kind) else {
            return self.defaults.clone();
        };
        let pick = |value: &Option<String>, fallback: &String| {
            value.as_ref().unwrap_or(fallback).clone()
        };
        SentinelLabels {
            not_applicable: pick(&over.not_applicable, &self.defaults.not_applicable),
            shared: pick(&over.shared, &self.defaults.shared),
            none: pick(&over.none, &self.defaults.none),
        }
    }
}

// --- Default ---

impl Default for SentinelLabels {
    fn default() -> Self {
        Self { not_applicable: NOPE.to_owned(), shared: SHARED.to_owned(), none: NONE.to_owned() }
    }
}
