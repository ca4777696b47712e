use std::borrow::Cow;

/// Errors raised by flag-set introspection and registration.
///
/// Parse misses are never errors: they resolve to the caller's default.
#[flagkit_derive::flagkit_error]
pub enum FlagError {
    /// The requested kind is not a registered flag set.
    #[error("Invalid flag set kind{}: {kind}", format_context(.context))]
    InvalidFlagSetKind { kind: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A registration table was rejected.
    #[error("Invalid flag set definition{}: {message}", format_context(.context))]
    InvalidDefinition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure while loading configuration.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal flag set error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type Result<T, E = FlagError> = std::result::Result<T, E>;

impl FlagError {
    pub(crate) fn invalid_kind(kind: &str) -> Self {
        Self::InvalidFlagSetKind { kind: Cow::Owned(kind.to_owned()), context: None }
    }

    pub(crate) fn invalid_definition(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidDefinition { message: message.into(), context: None }
    }
}
