//! Steps 1 and 2: the base feature chain and extension pull-in, as plain key sets.

use crate::naming::extension_name;
use fxhash::FxHashSet;
use glzig_domain::features::ResolvedExtension;
use glzig_domain::selection::Selection;
use glzig_kernel::version::compare_versions;
use glzig_registry::{Block, Extension, ItemKind, Registry};
use tracing::debug;

/// Registry keys gathered so far, per item kind.
#[derive(Debug, Default, Clone)]
pub(crate) struct WorkingSets {
    pub types: FxHashSet<String>,
    pub constants: FxHashSet<String>,
    pub commands: FxHashSet<String>,
}

impl WorkingSets {
    fn set_mut(&mut self, kind: ItemKind) -> &mut FxHashSet<String> {
        match kind {
            ItemKind::Type => &mut self.types,
            ItemKind::Enum => &mut self.constants,
            ItemKind::Command => &mut self.commands,
        }
    }

    fn require(&mut self, block: &Block) {
        for item in &block.items {
            self.set_mut(item.kind).insert(item.name.clone());
        }
    }

    fn remove(&mut self, block: &Block) {
        for item in &block.items {
            self.set_mut(item.kind).remove(&item.name);
        }
    }
}

/// Walks every feature of the selected api up to the requested version, oldest first.
///
/// Within one feature the removes run after the requires, so a later version can take back
/// what an earlier one added.
pub(crate) fn collect_base(registry: &Registry, selection: &Selection) -> WorkingSets {
    let mut features: Vec<_> = registry
        .features_for(&selection.api)
        .filter(|f| compare_versions(&f.number, &selection.version).is_le())
        .collect();
    features.sort_by(|a, b| compare_versions(&a.number, &b.number));

    let profile = selection.profile.as_deref();
    let mut sets = WorkingSets::default();
    for feature in &features {
        for block in feature.requires.iter().filter(|b| b.applies_to_profile(profile)) {
            sets.require(block);
        }
        for block in feature.removes.iter().filter(|b| b.applies_to_profile(profile)) {
            sets.remove(block);
        }
    }

    debug!(
        api = %selection.api,
        version = %selection.version,
        features = features.len(),
        types = sets.types.len(),
        constants = sets.constants.len(),
        commands = sets.commands.len(),
        "Collected base feature chain"
    );
    sets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The block carries no such attribute.
    Unscoped,
    /// The attribute equals the requested value.
    Requested,
}

impl Scope {
    fn matches(self, own: Option<&str>, requested: Option<&str>) -> bool {
        match self {
            Self::Unscoped => own.is_none(),
            Self::Requested => own.is_some() && own == requested,
        }
    }
}

/// `(api, profile)` scopes of the four selector passes.
const EXTENSION_PASSES: [(Scope, Scope); 4] = [
    (Scope::Unscoped, Scope::Unscoped),
    (Scope::Unscoped, Scope::Requested),
    (Scope::Requested, Scope::Unscoped),
    (Scope::Requested, Scope::Requested),
];

fn selected_blocks<'a>(
    extension: &'a Extension,
    selection: &'a Selection,
) -> impl Iterator<Item = &'a Block> {
    let api = Some(selection.api.as_str());
    let profile = selection.profile.as_deref();
    extension.requires.iter().filter(move |block| {
        EXTENSION_PASSES.iter().any(|&(api_scope, profile_scope)| {
            api_scope.matches(block.api.as_deref(), api)
                && (profile.is_none() || profile_scope.matches(block.profile.as_deref(), profile))
        })
    })
}

/// Adds the items of every requested, supported extension to `sets`.
///
/// Commands the base chain already provides stay required and are not listed on the extension.
/// Everything else the extension requires is recorded on it and later marked optional.
pub(crate) fn pull_extensions(
    registry: &Registry,
    selection: &Selection,
    sets: &mut WorkingSets,
) -> Vec<ResolvedExtension> {
    for requested in &selection.extensions {
        match registry.extension(requested) {
            None => debug!(extension = %requested, "Dropping unknown extension"),
            Some(ext) if !ext.supports(&selection.api) => {
                debug!(extension = %requested, api = %selection.api, "Dropping unsupported extension");
            },
            Some(_) => {},
        }
    }

    let base_commands = sets.commands.clone();
    let mut resolved = Vec::new();
    for extension in registry.extensions() {
        if !selection.requests_extension(&extension.name) || !extension.supports(&selection.api) {
            continue;
        }

        let mut commands: Vec<String> = Vec::new();
        for block in selected_blocks(extension, selection) {
            for name in block.names(ItemKind::Command) {
                if !base_commands.contains(name) && !commands.iter().any(|c| c == name) {
                    commands.push(name.to_owned());
                }
            }
            sets.require(block);
        }
        commands.sort();

        resolved.push(ResolvedExtension {
            key: extension.name.clone(),
            name: extension_name(&extension.name, selection.naming),
            commands,
        });
    }
    resolved.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(extensions = resolved.len(), "Pulled in extensions");
    resolved
}
