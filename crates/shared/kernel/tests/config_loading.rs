use glzig_kernel::config::{ConfigError, load_config};
use glzig_kernel::domain::config::GeneratorConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("glzig.toml");
    fs::write(
        &path,
        r#"
[selection]
api = "gles2"
version = "3.2"
extensions = ["GL_KHR_debug"]

[output]
path = "out/gles.zig"
"#,
    )?;

    let cfg: GeneratorConfig = load_config(Some(&path))?;
    assert_eq!(cfg.selection.api, "gles2");
    assert_eq!(cfg.selection.version, "3.2");
    assert_eq!(cfg.selection.extensions, ["GL_KHR_debug"]);
    assert_eq!(cfg.selection.profile.as_deref(), Some("core"));
    assert_eq!(cfg.output.path, std::path::PathBuf::from("out/gles.zig"));
    assert_eq!(cfg.registry.path, std::path::PathBuf::from("gl.xml"));
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_config::<GeneratorConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("explicit path must exist");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn malformed_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[selection]\npreserve_names = \"maybe\"\n")?;

    assert!(load_config::<GeneratorConfig>(Some(&path)).is_err());
    Ok(())
}
