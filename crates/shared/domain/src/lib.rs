//! # Domain Models
//!
//! This crate contains pure flag-set types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or heavy logic. Just declarations, registration tables,
//! and the sentinel-label vocabulary shared by the other crates.

pub mod config;
pub mod constants;
pub mod definition;
pub mod table;

pub use config::{FlagKitConfig, LabelConfig, LabelOverride, SentinelKind, SentinelLabels};
pub use definition::{FlagDefinition, Members};
pub use table::FlagTable;
