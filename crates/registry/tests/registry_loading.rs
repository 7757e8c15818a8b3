mod fixtures;

use glzig_registry::{ItemKind, Registry, RegistryError};
use pretty_assertions::assert_eq;

#[test]
fn fixture_sections_are_loaded_in_document_order() {
    let registry = fixtures::registry();

    let numbers: Vec<_> = registry.features_for("gl").map(|f| f.number.as_str()).collect();
    assert_eq!(numbers, ["1.0", "1.5", "2.0", "3.0", "3.1", "3.2", "4.1"]);
    assert_eq!(registry.apis(), ["gl", "gles2"]);

    let first = registry.commands().next().map(|c| c.name().to_owned());
    assert_eq!(first.as_deref(), Some("glBegin"));
    assert_eq!(registry.commands().count(), 18);
}

#[test]
fn declarations_keep_full_text() {
    let registry = fixtures::registry();
    let command = registry.command("glShaderSource").expect("glShaderSource");
    let texts: Vec<_> = command.params.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(
        texts,
        ["GLuint shader", "GLsizei count", "const GLchar *const*string", "const GLint *length"]
    );

    let cl = registry.command("glCreateSyncFromCLeventARB").expect("cl command");
    assert_eq!(cl.params[0].ptype.as_deref(), Some("struct _cl_context"));
    assert_eq!(cl.proto.ptype.as_deref(), Some("GLsync"));
}

#[test]
fn blocks_keep_scope_attributes() {
    let registry = fixtures::registry();
    let cl_event = registry.extension("GL_ARB_cl_event").expect("extension");
    let scopes: Vec<_> = cl_event
        .requires
        .iter()
        .map(|b| (b.api.as_deref(), b.profile.as_deref()))
        .collect();
    assert_eq!(scopes, [(None, None), (Some("gl"), Some("compatibility")), (Some("gl"), Some("core"))]);

    let v32 = registry.features().iter().find(|f| f.number == "3.2").expect("3.2");
    let removed: Vec<_> = v32.removes[0].names(ItemKind::Command).collect();
    assert_eq!(removed, ["glEnd"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Registry::from_path("does/not/exist.xml").unwrap_err();
    assert!(matches!(err, RegistryError::Io { context: Some(_), .. }));
}
