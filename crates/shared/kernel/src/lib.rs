//! Kernel of the flag-set helpers: everything the combination engine and the
//! conversion helpers need to know about a flag set.
//! Keep this crate lightweight; it turns registration tables into queries.
//!
//! ## Declaring a flag set
//! ```rust
//! use flagkit_kernel::{FlagSet, FlagSetType, FlagValue};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
//! pub enum Browsers {
//!     None = 0,
//!     Chrome = 1,
//!     Firefox = 2,
//!     Edge = 4,
//! }
//!
//! assert_eq!(Browsers::ordered_values(), vec![0, 1, 2, 4]);
//! assert_eq!(Browsers::from_raw(4), Some(Browsers::Edge));
//!
//! let both = FlagValue::from(Browsers::Chrome) | Browsers::Edge;
//! assert_eq!(both.raw(), 5);
//! assert_eq!(both.as_member(), None);
//! ```
//!
//! ## Runtime tables
//! ```rust
//! use flagkit_kernel::{FlagRegistry, Introspect};
//! use flagkit_kernel::domain::{FlagDefinition, FlagTable};
//!
//! let mut registry = FlagRegistry::new();
//! registry
//!     .register_table(FlagTable::new(
//!         "Access",
//!         vec![FlagDefinition::new("Read", 1), FlagDefinition::new("Write", 2)],
//!     ))
//!     .unwrap();
//!
//! let access = registry.kind("Access");
//! assert_eq!(access.try_parse("read, write", true).unwrap(), Some(3));
//! assert!(registry.kind("Missing").ordered_values().is_err());
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use flagkit_kernel::config::load_config;
//!     let cfg = load_config(Some("flagkit")).unwrap();
//! # }
//! ```
mod bits;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod error;
mod flag_set;
mod introspect;
pub mod prelude;
mod registry;

pub use crate::bits::RawBits;
pub use crate::error::{FlagError, FlagErrorExt, Result};
pub use crate::flag_set::{FlagSetType, FlagValue, IntoFlagValue};
pub use crate::introspect::{Introspect, TypeIntrospector};
pub use crate::registry::{FlagRegistry, RegisteredKind};
pub use flagkit_derive::{FlagSet, flagkit_error};
pub use flagkit_domain as domain;

#[doc(hidden)]
pub mod __private {
    pub use bitflags;
}
