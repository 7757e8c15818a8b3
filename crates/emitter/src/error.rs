use std::borrow::Cow;

#[glzig_derive::glzig_error]
pub enum EmitError {
    #[error("Formatting error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    /// The feature set violates an invariant the resolver guarantees.
    #[error("Internal emitter error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
