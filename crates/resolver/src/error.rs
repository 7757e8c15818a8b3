use std::borrow::Cow;

/// Registry inconsistencies found while resolving a selection.
///
/// Unsupported extensions and versions without feature nodes are not errors; they resolve to
/// less (or nothing).
#[glzig_derive::glzig_error]
pub enum ResolveError {
    /// A feature or extension requires a command the `commands` section does not declare.
    #[error("Unknown command{}: {message}", format_context(.context))]
    UnknownCommand { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A required type has no `<types>` declaration, or a type expression names a base type
    /// with no type table entry.
    #[error("Unknown type{}: {message}", format_context(.context))]
    UnknownType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An enumerant `value` is not a decimal or `0x` hexadecimal integer.
    #[error("Invalid enumerant value{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal resolver error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
