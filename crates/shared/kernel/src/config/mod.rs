use crate::error::{FlagErrorExt, Result};
use crate::registry::FlagRegistry;
use config::{Config, Environment, File};
use flagkit_domain::FlagKitConfig;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG: &str = "flagkit";
const ENV_PREFIX: &str = "FLAGKIT";

/// Loads sentinel labels and registration tables.
///
/// Layers, lowest first:
/// 1. **Base File**: `path` (any format the `config` crate recognizes by extension),
///    defaulting to `flagkit` in the working directory. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `FLAGKIT__`, nested with `__`
///    (e.g., `FLAGKIT__LABELS__DEFAULTS__SHARED=Sha` maps to `labels.defaults.shared`).
///
/// # Errors
/// Returns [`crate::FlagError::Config`] if the file is missing, a source is
/// malformed, or the merged settings do not match [`FlagKitConfig`].
///
/// # Example
/// ```rust,no_run
/// use flagkit_kernel::config::load_config;
///
/// let cfg = load_config(Some("config/flags.toml")).unwrap_or_default();
/// assert!(cfg.labels.defaults.none == "None" || !cfg.tables.is_empty());
/// ```
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<FlagKitConfig> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!("Loading flag set config from {}", path.display());

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<FlagKitConfig>()
        .context("Failed to deserialize config")?;

    info!(
        tables = config.tables.len(),
        overrides = config.labels.kinds.len(),
        "Flag set config loaded"
    );
    Ok(config)
}

/// Loads configuration and registers every table it declares.
///
/// # Errors
/// Returns the loading error, or [`crate::FlagError::InvalidDefinition`] for the
/// first invalid table.
pub fn load_registry(path: Option<impl AsRef<Path>>) -> Result<(FlagKitConfig, FlagRegistry)> {
    let config = load_config(path)?;
    let registry = FlagRegistry::from_tables(config.tables.iter().cloned())
        .context("Failed to register configured tables")?;
    Ok((config, registry))
}
