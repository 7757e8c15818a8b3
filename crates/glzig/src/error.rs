use glzig_emitter::EmitError;
use glzig_kernel::version::VersionError;
use glzig_registry::RegistryError;
use glzig_resolver::ResolveError;
use std::borrow::Cow;

/// Failure of one pipeline stage.
#[glzig_derive::glzig_error]
pub enum GenerateError {
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Resolution failed{}: {source}", format_context(.context))]
    Resolve { source: ResolveError, context: Option<Cow<'static, str>> },

    #[error("Emission failed{}: {source}", format_context(.context))]
    Emit { source: EmitError, context: Option<Cow<'static, str>> },

    /// The selection's version is not a `major.minor` number.
    #[error("Invalid selection{}: {source}", format_context(.context))]
    Version { source: VersionError, context: Option<Cow<'static, str>> },
}
