use glzig_domain::config::{GeneratorConfig, LogConfig, OutputConfig, RegistryConfig};
use glzig_domain::selection::NamingMode;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    assert_eq!(RegistryConfig::default().path, std::path::PathBuf::from("gl.xml"));
    assert_eq!(OutputConfig::default().path, std::path::PathBuf::from("gl.zig"));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
    assert!(!log.json);

    let selection = GeneratorConfig::default().selection.to_selection();
    assert_eq!(selection.api, "gl");
    assert_eq!(selection.version, "4.6");
    assert_eq!(selection.profile.as_deref(), Some("core"));
    assert_eq!(selection.naming, NamingMode::Rename);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let raw = json!({
        "selection": { "api": "gles2", "version": "3.2", "profile": null, "preserve_names": true },
        "log": { "json": true }
    });

    let cfg: GeneratorConfig = serde_json::from_value(raw).expect("config deserialize");
    let selection = cfg.selection.to_selection();
    assert_eq!(selection.api, "gles2");
    assert!(selection.profile.is_none());
    assert!(selection.extensions.is_empty());
    assert_eq!(selection.naming, NamingMode::Preserve);
    assert!(cfg.log.json);
    assert_eq!(cfg.log.level, "info");
    assert_eq!(cfg.registry.path, std::path::PathBuf::from("gl.xml"));
}
