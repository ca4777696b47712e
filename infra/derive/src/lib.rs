#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the flag-set workspace.
//! This crate generates the registration tables the introspector reads and
//! removes the boilerplate of the workspace error enums.
//!
//! ## Usage
//! Consumers normally go through `flagkit-kernel` (or the `flagkit` facade),
//! which re-exports both macros:
//! ```toml
//! [dependencies]
//! flagkit-kernel = { path = "../crates/shared/kernel" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `FlagSetType` for a fieldless enum or a `bitflags!` struct.
///
/// # Enums
///
/// Every variant must be a unit variant. Members are registered in declaration
/// order with their discriminant (`Variant as i64`), so explicit, implicit, and
/// computed discriminants are all supported. The enum must be `Copy`.
///
/// # `bitflags!` structs
///
/// Place the derive inside the `bitflags!` invocation. Members are read from
/// `bitflags::Flags::FLAGS` (unnamed flags are skipped) and a raw value converts
/// back only when every bit belongs to a declared flag.
///
/// # Arguments
///
/// * `#[flagset(kind = "...")]` - Overrides the registered kind name (defaults to the type name).
/// * `#[flagset(crate = "...")]` - Path to the kernel crate (defaults to `::flagkit_kernel`).
///
/// # Errors
/// Emits a compile-time error for unions, generic types, data-carrying or empty
/// enums, and structs that are not single-field tuple structs.
///
/// # Example
///
/// ```rust,ignore
/// use flagkit_kernel::FlagSet;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
/// #[repr(u8)]
/// pub enum Browsers {
///     None = 0,
///     Chrome = 1,
///     Firefox = 2,
///     Edge = 4,
///     Safari = 8,
/// }
///
/// bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
///     #[flagset(kind = "access")]
///     pub struct Access: u32 {
///         const READ = 1;
///         const WRITE = 2;
///     }
/// }
/// ```
#[proc_macro_derive(FlagSet, attributes(flagset))]
pub fn derive_flag_set(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::flag_set::expand_derive(input).into()
}

/// Attribute macro for defining the workspace error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a source error,
///   so the `?` operator works on upstream results.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant holding a source error (a `source` field, or one marked `#[source]`/`#[from]`)
///    must also have a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[flagkit_derive::flagkit_error]
/// pub enum LoadError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), LoadError> {
///     builder.build().context("Failed to build config")?;
///     Err("unreachable state".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn flagkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
