#![allow(dead_code)]

use chrono::{DateTime, Utc};
use glzig_domain::features::ResolvedFeatureSet;
use glzig_domain::selection::{NamingMode, Selection};
use glzig_emitter::EmitOptions;
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

pub fn frozen_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

pub fn features(selection: &Selection) -> ResolvedFeatureSet {
    glzig_resolver::resolve(registry(), selection).expect("fixture selection should resolve")
}

pub fn options(major: u32, minor: u32, naming: NamingMode) -> EmitOptions {
    EmitOptions::builder()
        .api_name(format!("OpenGL {major}.{minor} (Core Profile)"))
        .version_major(major)
        .version_minor(minor)
        .naming(naming)
        .generated_at(frozen_time())
        .build()
}

/// Resolves and renders `gl <version> core` with `extensions`.
pub fn render(version: &str, extensions: &[&str], naming: NamingMode) -> String {
    let selection = Selection::new("gl", version)
        .with_profile("core")
        .with_extensions(extensions.iter().copied())
        .with_naming(naming);
    let (major, minor) = version.split_once('.').expect("dotted version");
    let options = options(
        major.parse().expect("numeric major"),
        minor.parse().expect("numeric minor"),
        naming,
    );
    glzig_emitter::emit(&features(&selection), &options).expect("fixture renders")
}

/// Byte offset of `needle`, panicking with the output when absent.
pub fn offset(source: &str, needle: &str) -> usize {
    source.find(needle).unwrap_or_else(|| panic!("missing {needle:?} in:\n{source}"))
}
