//! # Emitter
//!
//! Renders a [`ResolvedFeatureSet`] as a single Zig source module exposing a runtime loaded
//! `DispatchTable`. Output is a pure function of the feature set and the [`EmitOptions`]: with a
//! fixed `generated_at` the same input always produces the same bytes.
//!
//! The [`dispatch`] module models the generated table on the host, for checking a driver
//! against a selection without compiling any Zig.

pub mod dispatch;
mod error;
mod ident;
mod options;
mod template;

pub use crate::error::{EmitError, EmitErrorExt};
pub use crate::ident::{zig_ident, zig_string};
pub use crate::options::{EmitOptions, ExtensionProbe, GENERATOR_NAME};

use glzig_domain::features::ResolvedFeatureSet;
use tracing::{debug, instrument};

/// Renders the Zig binding for `features`.
///
/// # Errors
///
/// Returns [`EmitError::Internal`] when an extension lists a command that is not part of the
/// feature set, and [`EmitError::Format`] if writing to the output buffer fails.
#[instrument(skip_all, fields(api = %options.api_name, probe = %options.probe()))]
pub fn emit(features: &ResolvedFeatureSet, options: &EmitOptions) -> Result<String, EmitError> {
    let source = template::Template::new(features, options).render()?;
    debug!(bytes = source.len(), commands = features.commands.len(), "Rendered binding");
    Ok(source)
}
