use flagkit_derive::flagkit_error;
use std::borrow::Cow;

#[flagkit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown kind{}: {kind}", format_context(.context))]
    UnknownKind { kind: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("boom"))
}

fn run() -> Result<(), DemoError> {
    read().context("reading flags")?;
    Ok(())
}

fn main() {
    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading flags): boom");

    let internal: DemoError = "broken".into();
    assert_eq!(internal.to_string(), "Internal error: broken");

    let unknown: Result<(), DemoError> =
        Err(DemoError::UnknownKind { kind: "Browsers".into(), context: None });
    let unknown = unknown.context("lookup").unwrap_err();
    assert_eq!(unknown.to_string(), "Unknown kind (lookup): Browsers");
}
