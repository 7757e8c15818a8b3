//! Step 3: command signatures.

use crate::error::{ResolveError, ResolveErrorExt};
use crate::naming::{command_name, resolve_param_collisions};
use crate::type_expr::parse_type_expr;
use fxhash::FxHashSet;
use glzig_domain::features::{ResolvedCommand, ResolvedParam};
use glzig_domain::selection::NamingMode;
use glzig_registry::{Command, Registry};

/// Resolves every command in `base` or `optional`, sorted by output name.
///
/// The `ptype` of each proto and parameter is added to `types` so the type closure can pick
/// it up.
pub(crate) fn resolve_commands(
    registry: &Registry,
    base: &FxHashSet<String>,
    optional: &FxHashSet<String>,
    naming: NamingMode,
    types: &mut FxHashSet<String>,
) -> Result<Vec<ResolvedCommand>, ResolveError> {
    // Sorted so the reported key does not depend on hash order.
    let mut requested: Vec<&String> = base.union(optional).collect();
    requested.sort();
    if let Some(missing) = requested.iter().find(|key| registry.command(key).is_none()) {
        return Err(ResolveError::UnknownCommand {
            message: missing.to_string().into(),
            context: Some("Required by a feature or extension".into()),
        });
    }

    let mut commands = Vec::with_capacity(requested.len());
    for command in registry.commands() {
        let key = command.name();
        if !base.contains(key) && !optional.contains(key) {
            continue;
        }
        commands.push(
            resolve_command(command, !base.contains(key), naming, types)
                .context(format!("Resolving command '{key}'"))?,
        );
    }

    commands.sort_by(|a, b| a.name.cmp(&b.name));
    resolve_param_collisions(&mut commands);
    Ok(commands)
}

fn resolve_command(
    command: &Command,
    optional: bool,
    naming: NamingMode,
    types: &mut FxHashSet<String>,
) -> Result<ResolvedCommand, ResolveError> {
    types.extend(command.proto.ptype.iter().cloned());
    types.extend(command.params.iter().filter_map(|p| p.ptype.clone()));

    let params = command
        .params
        .iter()
        .map(|param| {
            Ok(ResolvedParam { name: param.name.clone(), ty: parse_type_expr(&param.text, naming)? })
        })
        .collect::<Result<Vec<_>, ResolveError>>()?;

    Ok(ResolvedCommand {
        key: command.name().to_owned(),
        name: command_name(command.name(), naming),
        params,
        return_type: parse_type_expr(&command.proto.text, naming)?,
        optional,
    })
}
