//! Step 5: declared-type check and the type closure.

use crate::error::ResolveError;
use crate::tables::{TYPE_TABLE, type_entry};
use fxhash::FxHashSet;
use glzig_domain::features::ResolvedType;
use glzig_domain::selection::NamingMode;
use glzig_registry::Registry;

/// Every type a feature or extension block requires must have a `<types>` declaration.
///
/// Reports the first undeclared key in sorted order so the error does not depend on hashing.
pub(crate) fn check_declared(
    registry: &Registry,
    required: &FxHashSet<String>,
) -> Result<(), ResolveError> {
    let declared: FxHashSet<&str> = registry.types().iter().map(|t| t.name.as_str()).collect();
    let missing = required.iter().map(String::as_str).filter(|key| !declared.contains(key)).min();

    match missing {
        Some(key) => Err(ResolveError::UnknownType {
            message: format!("'{key}' is required but not declared in <types>").into(),
            context: None,
        }),
        None => Ok(()),
    }
}

/// Expands `required` with table dependencies until nothing changes, then returns the known
/// types in table order. Keys without a table entry (`khrplatform`) are ignored.
pub(crate) fn resolve_types(required: &FxHashSet<String>, naming: NamingMode) -> Vec<ResolvedType> {
    let mut included: FxHashSet<usize> = FxHashSet::default();
    let mut pending: Vec<&str> = required.iter().map(String::as_str).collect();

    while let Some(key) = pending.pop() {
        let Some((ordinal, entry)) = type_entry(key) else { continue };
        if included.insert(ordinal)
            && let Some(dependency) = entry.dependency
        {
            pending.push(dependency);
        }
    }

    TYPE_TABLE
        .iter()
        .enumerate()
        .filter(|(ordinal, _)| included.contains(ordinal))
        .map(|(_, entry)| ResolvedType {
            key: entry.key.to_owned(),
            name: entry.name(naming).into_owned(),
            repr: entry.repr(naming).to_owned(),
        })
        .collect()
}
