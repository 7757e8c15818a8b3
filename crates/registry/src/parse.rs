//! `gl.xml` to [`Registry`] conversion.
//!
//! The document is parsed with `roxmltree` and copied into owned model types right away, so the
//! returned registry does not borrow the source text.

use crate::error::{RegistryError, RegistryErrorExt};
use crate::model::{
    Block, Command, Declaration, EnumGroup, Enumerant, Extension, Feature, Item, ItemKind,
    Registry, TypeDecl,
};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

impl Registry {
    /// Reads and parses a registry file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .context(format!("Reading registry {}", path.display()))?;
        let registry = text.parse::<Self>()?;
        info!(
            path = %path.display(),
            features = registry.features.len(),
            extensions = registry.extensions.len(),
            commands = registry.commands.len(),
            "Registry loaded"
        );
        Ok(registry)
    }
}

impl FromStr for Registry {
    type Err = RegistryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let document = Document::parse(text).context("Parsing registry XML")?;
        let mut registry = Self::default();

        for section in elements(document.root_element()) {
            match section.tag_name().name() {
                "feature" => registry.features.push(parse_feature(section)?),
                "extensions" => {
                    for node in children_named(section, "extension") {
                        registry.extensions.push(parse_extension(node)?);
                    }
                },
                "types" => {
                    registry.types.extend(children_named(section, "type").filter_map(parse_type));
                },
                "enums" => registry.enum_groups.push(parse_enum_group(section)?),
                "commands" => {
                    for node in children_named(section, "command") {
                        let command = parse_command(node)?;
                        let name = command.name().to_owned();
                        if registry.commands.insert(name.clone(), command).is_some() {
                            return Err(RegistryError::Internal {
                                message: format!("command {name} is declared twice").into(),
                                context: None,
                            });
                        }
                    }
                },
                _ => {},
            }
        }

        debug!(
            types = registry.types.len(),
            enum_groups = registry.enum_groups.len(),
            "Registry sections parsed"
        );
        Ok(registry)
    }
}

// --- Node helpers ---

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    elements(node).filter(move |n| n.tag_name().name() == tag)
}

fn optional(node: Node<'_, '_>, attribute: &str) -> Option<String> {
    node.attribute(attribute).map(str::to_owned)
}

fn required(node: Node<'_, '_>, attribute: &str) -> Result<String, RegistryError> {
    node.attribute(attribute).map(str::to_owned).ok_or_else(|| RegistryError::MissingAttribute {
        message: format!(
            "<{}> at byte {} has no '{attribute}'",
            node.tag_name().name(),
            node.range().start
        )
        .into(),
        context: None,
    })
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants().filter(Node::is_text).filter_map(|n| n.text()).collect()
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    elements(node).find(|n| n.tag_name().name() == tag).map(text_content)
}

// --- Sections ---

fn parse_block(node: Node<'_, '_>) -> Result<Block, RegistryError> {
    let mut items = Vec::new();
    for child in elements(node) {
        let Ok(kind) = child.tag_name().name().parse::<ItemKind>() else { continue };
        items.push(Item { kind, name: required(child, "name")? });
    }
    Ok(Block { api: optional(node, "api"), profile: optional(node, "profile"), items })
}

fn parse_blocks(node: Node<'_, '_>, tag: &'static str) -> Result<Vec<Block>, RegistryError> {
    children_named(node, tag).map(parse_block).collect()
}

fn parse_feature(node: Node<'_, '_>) -> Result<Feature, RegistryError> {
    Ok(Feature {
        api: required(node, "api")?,
        name: required(node, "name")?,
        number: required(node, "number")?,
        requires: parse_blocks(node, "require")?,
        removes: parse_blocks(node, "remove")?,
    })
}

fn parse_extension(node: Node<'_, '_>) -> Result<Extension, RegistryError> {
    let name = required(node, "name")?;
    let supported = required(node, "supported")
        .context(format!("Extension {name}"))?
        .split('|')
        .map(str::to_owned)
        .collect();
    Ok(Extension { name, supported, requires: parse_blocks(node, "require")? })
}

fn parse_type(node: Node<'_, '_>) -> Option<TypeDecl> {
    let name = optional(node, "name").or_else(|| child_text(node, "name"))?;
    Some(TypeDecl { name, api: optional(node, "api"), requires: optional(node, "requires") })
}

fn parse_enum_group(node: Node<'_, '_>) -> Result<EnumGroup, RegistryError> {
    let entries = children_named(node, "enum")
        .map(|entry| {
            Ok(Enumerant {
                name: required(entry, "name")?,
                value: required(entry, "value")?,
                api: optional(entry, "api"),
            })
        })
        .collect::<Result<_, RegistryError>>()?;

    Ok(EnumGroup {
        group: optional(node, "group"),
        kind: optional(node, "type"),
        start: optional(node, "start"),
        entries,
    })
}

fn parse_declaration(node: Node<'_, '_>) -> Result<Declaration, RegistryError> {
    let name = child_text(node, "name").ok_or_else(|| RegistryError::MissingAttribute {
        message: format!(
            "<{}> at byte {} has no <name>",
            node.tag_name().name(),
            node.range().start
        )
        .into(),
        context: None,
    })?;
    Ok(Declaration { text: text_content(node), name, ptype: child_text(node, "ptype") })
}

fn parse_command(node: Node<'_, '_>) -> Result<Command, RegistryError> {
    let proto = children_named(node, "proto").next().ok_or_else(|| {
        RegistryError::MissingAttribute {
            message: format!("<command> at byte {} has no <proto>", node.range().start).into(),
            context: None,
        }
    })?;
    let proto = parse_declaration(proto)?;
    let params = children_named(node, "param")
        .map(parse_declaration)
        .collect::<Result<Vec<_>, RegistryError>>()
        .context(format!("Command {}", proto.name))?;
    Ok(Command { proto, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<registry>
        <types>
            <type name="khrplatform">#include</type>
            <type>typedef unsigned int <name>GLenum</name>;</type>
        </types>
        <enums namespace="GL" group="SpecialNumbers">
            <enum value="0" name="GL_ZERO"/>
            <unused start="0x1" end="0x2"/>
        </enums>
        <commands namespace="GL">
            <command>
                <proto>const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
                <param group="StringName"><ptype>GLenum</ptype> <name>name</name></param>
            </command>
        </commands>
        <feature api="gl" name="GL_VERSION_1_0" number="1.0">
            <require comment="basics">
                <command name="glGetString"/>
                <comment>ignored</comment>
            </require>
            <remove profile="core"><enum name="GL_ZERO"/></remove>
        </feature>
        <extensions>
            <extension name="GL_KHR_debug" supported="gl|glcore|gles2"/>
        </extensions>
    </registry>"#;

    #[test]
    fn parses_every_section() {
        let registry: Registry = DOC.parse().expect("registry parses");

        assert_eq!(registry.types().len(), 2);
        assert_eq!(registry.types()[1].name, "GLenum");

        let group = &registry.enum_groups()[0];
        assert_eq!(group.group.as_deref(), Some("SpecialNumbers"));
        assert_eq!(group.entries.len(), 1);

        let command = registry.command("glGetString").expect("command present");
        assert_eq!(command.proto.text, "const GLubyte *glGetString");
        assert_eq!(command.proto.ptype.as_deref(), Some("GLubyte"));
        assert_eq!(command.params[0].text, "GLenum name");

        let feature = &registry.features()[0];
        assert_eq!(feature.requires[0].items.len(), 1);
        assert_eq!(feature.removes[0].profile.as_deref(), Some("core"));

        let extension = registry.extension("GL_KHR_debug").expect("extension present");
        assert!(extension.supports("gles2"));
        assert!(!extension.supports("gles1"));
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = "<registry><feature api=\"gl\" name=\"GL_VERSION_1_0\"/></registry>"
            .parse::<Registry>()
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingAttribute { .. }));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn malformed_xml_is_reported() {
        let err = "<registry><feature>".parse::<Registry>().unwrap_err();
        assert!(matches!(err, RegistryError::Xml { context: Some(_), .. }));
    }
}
