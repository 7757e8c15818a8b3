use std::borrow::Cow;

#[glzig_derive::glzig_error]
pub enum RegistryError {
    #[error("XML error{}: {source}", format_context(.context))]
    Xml { source: roxmltree::Error, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A node the loader depends on lacks a required attribute or child.
    #[error("Missing attribute{}: {message}", format_context(.context))]
    MissingAttribute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
