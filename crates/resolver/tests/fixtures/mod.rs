#![allow(dead_code)]

use glzig_domain::features::ResolvedFeatureSet;
use glzig_domain::selection::{NamingMode, Selection};
use glzig_registry::Registry;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/mini-gl.xml");
        Registry::from_path(path).expect("fixture registry should load")
    })
}

pub fn gl(version: &str, profile: Option<&str>) -> Selection {
    let selection = Selection::new("gl", version);
    match profile {
        Some(profile) => selection.with_profile(profile),
        None => selection,
    }
}

pub fn resolve(selection: &Selection) -> ResolvedFeatureSet {
    glzig_resolver::resolve(registry(), selection).expect("fixture selection should resolve")
}

pub fn preserve(selection: Selection) -> Selection {
    selection.with_naming(NamingMode::Preserve)
}

pub fn command_names(set: &ResolvedFeatureSet) -> Vec<&str> {
    set.commands.values().map(|c| c.name.as_str()).collect()
}

pub fn constant_names(set: &ResolvedFeatureSet) -> Vec<&str> {
    set.constants.values().map(|c| c.name.as_str()).collect()
}

pub fn type_names(set: &ResolvedFeatureSet) -> Vec<&str> {
    set.types.values().map(|t| t.name.as_str()).collect()
}
