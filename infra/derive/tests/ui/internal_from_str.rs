use glzig_derive::glzig_error;
use std::borrow::Cow;

#[glzig_error]
#[derive(Debug)]
pub enum EmitStageError {
    #[error("Formatting error{}: {source}", format_context(.context))]
    Format {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn fail() -> Result<(), EmitStageError> {
    Err("dispatch table is empty".into())
}

fn main() {
    let err = fail().unwrap_err();
    assert_eq!(err.to_string(), "Internal error: dispatch table is empty");

    let owned: EmitStageError = String::from("owned").into();
    assert!(matches!(owned, EmitStageError::Internal { .. }));

    let converted: EmitStageError = std::fmt::Error.into();
    assert!(matches!(converted, EmitStageError::Format { context: None, .. }));
}
