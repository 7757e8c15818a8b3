use chrono::DateTime;
use glzig::domain::selection::{NamingMode, Selection};
use glzig::registry::Registry;
use glzig::{GenerateError, Generator};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn registry() -> Registry {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/mini-gl.xml");
    Registry::from_path(path).expect("fixture registry should load")
}

#[test]
fn generates_a_core_binding() {
    let registry = registry();
    let generated = Generator::builder()
        .selection(Selection::new("gl", "4.1").with_profile("core").with_extensions(["GL_KHR_debug"]))
        .generated_at(DateTime::from_timestamp(1_700_000_000, 0).expect("valid"))
        .registry(&registry)
        .generate()
        .expect("pipeline runs");

    assert_eq!(generated.api_name, "OpenGL 4.1 (Core Profile)");
    assert!(generated.features.commands.contains_key("glDebugMessageCallback"));
    assert!(generated.source.contains("    pub const api_name = \"OpenGL 4.1 (Core Profile)\";\n"));
    assert!(generated.source.contains("    pub const generated_at = \"2023-11-14T22:13:20Z\";\n"));
    assert!(generated.source.contains("    pub const generator_name = \"glzig v"));
}

#[test]
fn frozen_timestamp_makes_output_reproducible() {
    let registry = registry();
    let run = || {
        Generator::builder()
            .registry(&registry)
            .selection(Selection::new("gl", "3.0").with_naming(NamingMode::Preserve))
            .generated_at(DateTime::from_timestamp(0, 0).expect("valid"))
            .generator_name("glzig test")
            .generate()
            .expect("pipeline runs")
    };

    let (first, second) = (run(), run());
    assert_eq!(first, second);
    assert_eq!(first.api_name, "OpenGL 3.0");
    assert!(first.source.contains("pub fn glBegin(mode: GLenum) callconv(.C) void {"));
}

#[test]
fn gles_selection_is_described_by_display_name() {
    let registry = registry();
    let generated = Generator::builder()
        .registry(&registry)
        .selection(Selection::new("gles2", "2.0"))
        .generate()
        .expect("pipeline runs");

    assert_eq!(generated.api_name, "OpenGL ES 2.0");
    assert!(generated.source.contains("    pub const api_version_major = 2;\n"));
}

#[test]
fn non_numeric_version_is_rejected_before_resolution() {
    let registry = registry();
    let err = Generator::builder()
        .registry(&registry)
        .selection(Selection::new("gl", "latest"))
        .generate()
        .unwrap_err();

    assert!(matches!(err, GenerateError::Version { .. }));
    assert!(err.to_string().contains("latest"));
}

#[test]
fn resolver_errors_are_wrapped() {
    let registry: Registry = r#"<registry>
        <feature api="gl" name="GL_VERSION_1_0" number="1.0">
            <require><command name="glMissing"/></require>
        </feature>
    </registry>"#
        .parse()
        .expect("inline registry parses");

    let err = Generator::builder()
        .registry(&registry)
        .selection(Selection::new("gl", "1.0"))
        .generate()
        .unwrap_err();

    assert!(matches!(err, GenerateError::Resolve { .. }));
    assert!(err.to_string().contains("glMissing"));
}
