//! Reserved member names and separators used across the workspace.

/// Label of the "not applicable" member excluded from flag listings.
pub const NOPE: &str = "Nope";
/// Label of the "shared / cross-cutting" member.
pub const SHARED: &str = "Shared";
/// Label of the zero member that is never reported as a regular value.
pub const NONE: &str = "None";

/// Separator used when joining member names into a single string.
pub const FLAG_SEPARATOR: &str = ",";
