use flagkit_derive::flagkit_error;

#[flagkit_error]
pub enum DemoError {
    #[error("Unknown kind: {kind}")]
    UnknownKind { kind: String, context: Option<String> },
}

fn main() {}
