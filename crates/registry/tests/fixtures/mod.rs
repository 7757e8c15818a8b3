#![allow(dead_code)]

use glzig_registry::Registry;
use std::path::PathBuf;

pub fn registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/mini-gl.xml")
}

pub fn registry() -> Registry {
    Registry::from_path(registry_path()).expect("fixture registry should load")
}
