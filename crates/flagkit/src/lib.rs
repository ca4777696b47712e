//! Facade crate for the flag-set toolkit.
//! Re-exports the domain/kernel primitives and the feature crates.
//! Keep this crate thin: it composes other crates and implements no logic of its own.
//!
//! ## Usage
//! Types derived through the facade point the derive at the re-exported kernel:
//! ```rust
//! use flagkit::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
//! #[flagset(crate = "flagkit::kernel")]
//! enum Browsers {
//!     None = 0,
//!     Chrome = 1,
//!     Firefox = 2,
//! }
//!
//! let all = flagkit::combinations::enumerate_all_combinations::<Browsers>(false);
//! assert_eq!(all.len(), 4);
//! assert_eq!(flagkit::conversion::parse("firefox", Browsers::None), Browsers::Firefox);
//! ```

pub use flagkit_combinations as combinations;
pub use flagkit_conversion as conversion;
pub use flagkit_domain as domain;
pub use flagkit_kernel as kernel;
pub use flagkit_kernel::{FlagError, FlagSet, Result};

pub mod prelude {
    pub use flagkit_combinations::CombinationEngine;
    pub use flagkit_conversion::ValueFilter;
    pub use flagkit_kernel::prelude::*;
}
