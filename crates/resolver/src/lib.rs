//! # Resolver
//!
//! Turns a [`Selection`] (api, version, profile, extensions, naming mode) into the
//! [`ResolvedFeatureSet`] the emitter renders: the types, constants, commands and extensions a
//! binding for that target needs, each named and in emission order.
//!
//! Resolution is a pure function of the registry and the selection. Unknown or unsupported
//! extensions are dropped, and a version no feature node reaches resolves to an empty set.
//!
//! ```rust,ignore
//! use glzig_domain::selection::Selection;
//! use glzig_resolver::resolve;
//!
//! let selection = Selection::new("gl", "4.1").with_profile("core");
//! let features = resolve(&registry, &selection)?;
//! assert!(features.commands.contains_key("glClear"));
//! ```

mod commands;
mod constants;
mod error;
mod features;
pub mod naming;
pub mod tables;
mod type_expr;
mod types;

pub use crate::constants::{format_hex, parse_value};
pub use crate::error::{ResolveError, ResolveErrorExt};

use fxhash::FxHashSet;
use glzig_domain::features::ResolvedFeatureSet;
use glzig_domain::selection::Selection;
use glzig_registry::Registry;
use tracing::{debug, instrument};

/// Resolves `selection` against `registry`.
///
/// # Errors
///
/// Returns [`ResolveError`] when the registry is internally inconsistent: a required command
/// or type that is not declared, a type expression over an unknown base type, or an enumerant
/// value that is not an integer.
#[instrument(
    skip(registry, selection),
    fields(
        api = %selection.api,
        version = %selection.version,
        profile = selection.profile.as_deref().unwrap_or("none"),
        extensions = selection.extensions.len(),
    )
)]
pub fn resolve(registry: &Registry, selection: &Selection) -> Result<ResolvedFeatureSet, ResolveError> {
    // 1. Base feature chain
    let mut sets = features::collect_base(registry, selection);
    let base_commands = sets.commands.clone();

    // 2. Extensions
    let extensions = features::pull_extensions(registry, selection, &mut sets);
    let optional_commands: FxHashSet<String> =
        sets.commands.difference(&base_commands).cloned().collect();
    types::check_declared(registry, &sets.types)?;

    // 3. Commands (records parameter types for step 5)
    let commands = commands::resolve_commands(
        registry,
        &base_commands,
        &optional_commands,
        selection.naming,
        &mut sets.types,
    )?;

    // 4. Constants
    let constants = constants::resolve_constants(registry, &sets.constants, selection)?;

    // 5. Types
    let types = types::resolve_types(&sets.types, selection.naming);

    let resolved = ResolvedFeatureSet {
        types: types.into_iter().map(|t| (t.key.clone(), t)).collect(),
        constants: constants.into_iter().map(|c| (c.key.clone(), c)).collect(),
        commands: commands.into_iter().map(|c| (c.key.clone(), c)).collect(),
        extensions: extensions.into_iter().map(|e| (e.key.clone(), e)).collect(),
    };

    debug!(
        types = resolved.types.len(),
        constants = resolved.constants.len(),
        commands = resolved.commands.len(),
        extensions = resolved.extensions.len(),
        "Resolved feature set"
    );
    Ok(resolved)
}
