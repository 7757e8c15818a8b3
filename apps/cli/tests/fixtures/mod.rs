#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const REGISTRY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/mini-gl.xml");

/// A `glzig` invocation isolated in `dir`: no ambient `glzig.toml`, no `RUST_LOG`, the test
/// registry preselected.
pub fn glzig(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_glzig"));
    cmd.current_dir(dir).env_remove("RUST_LOG").args(["--registry", REGISTRY]);
    cmd
}

pub fn workdir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
