//! Runtime registry of flag-set registration tables, keyed by kind name.

use crate::error::{FlagError, Result};
use crate::flag_set::FlagSetType;
use crate::introspect::Introspect;
use flagkit_domain::{FlagDefinition, FlagTable};
use fxhash::{FxHashMap, FxHashSet};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Caller-owned collection of flag-set tables.
///
/// Tables are validated on registration; lookups of unknown kinds fail with
/// [`FlagError::InvalidFlagSetKind`].
#[derive(Debug, Default, Clone)]
pub struct FlagRegistry {
    tables: FxHashMap<String, FlagTable>,
}

impl FlagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from tables, typically loaded from configuration.
    ///
    /// # Errors
    /// Returns [`FlagError::InvalidDefinition`] for the first invalid table.
    pub fn from_tables(tables: impl IntoIterator<Item = FlagTable>) -> Result<Self> {
        let mut registry = Self::new();
        for table in tables {
            registry.register_table(table)?;
        }
        Ok(registry)
    }

    /// Registers a statically declared flag set under [`FlagSetType::KIND`].
    ///
    /// # Errors
    /// Same checks as [`FlagRegistry::register_table`]; a `bitflags!` type with
    /// no named flags is rejected.
    pub fn register<T: FlagSetType>(&mut self) -> Result<&mut Self> {
        self.register_table(FlagTable::new(T::KIND, T::definitions().into_owned()))
    }

    /// Registers a runtime table, replacing any table with the same kind.
    ///
    /// # Errors
    /// Returns [`FlagError::InvalidDefinition`] if the kind is blank, the table has
    /// no members, or member names are blank or duplicated.
    pub fn register_table(&mut self, table: FlagTable) -> Result<&mut Self> {
        if let Err(err) = validate(&table) {
            warn!(kind = table.kind(), error = %err, "Rejected flag set table");
            return Err(err);
        }
        debug!(kind = table.kind(), members = table.members().len(), "Registered flag set");
        self.tables.insert(table.kind().to_owned(), table);
        Ok(self)
    }

    /// The table registered for `kind`.
    ///
    /// # Errors
    /// Returns [`FlagError::InvalidFlagSetKind`] if nothing is registered under `kind`.
    pub fn get(&self, kind: &str) -> Result<&FlagTable> {
        self.tables.get(kind).ok_or_else(|| FlagError::invalid_kind(kind))
    }

    /// A lazy [`Introspect`] handle; unknown kinds fail on first query.
    #[must_use]
    pub const fn kind<'r>(&'r self, kind: &'r str) -> RegisteredKind<'r> {
        RegisteredKind { registry: self, kind }
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.tables.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A kind name resolved against a [`FlagRegistry`] at query time.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredKind<'r> {
    registry: &'r FlagRegistry,
    kind: &'r str,
}

impl Introspect for RegisteredKind<'_> {
    fn kind(&self) -> &str {
        self.kind
    }

    fn members(&self) -> Result<Cow<'_, [FlagDefinition]>> {
        self.registry.get(self.kind).map(|table| Cow::Borrowed(table.members()))
    }
}

fn validate(table: &FlagTable) -> Result<()> {
    if table.kind().trim().is_empty() {
        return Err(FlagError::invalid_definition("kind must not be empty"));
    }
    if table.members().is_empty() {
        return Err(FlagError::invalid_definition(format!(
            "flag set '{}' declares no members",
            table.kind()
        )));
    }

    let mut seen = FxHashSet::default();
    for member in table.members() {
        if member.name().trim().is_empty() {
            return Err(FlagError::invalid_definition(format!(
                "flag set '{}' has a member with an empty name",
                table.kind()
            )));
        }
        if !seen.insert(member.name()) {
            return Err(FlagError::invalid_definition(format!(
                "flag set '{}' declares '{}' more than once",
                table.kind(),
                member.name()
            )));
        }
    }
    Ok(())
}
