use indexmap::IndexMap;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Kind of a `<require>`/`<remove>` child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    Type,
    Enum,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
}

/// A `<require>` or `<remove>` block, optionally scoped to an api and/or a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub api: Option<String>,
    pub profile: Option<String>,
    pub items: Vec<Item>,
}

impl Block {
    /// Names of the items of `kind`, in document order.
    pub fn names(&self, kind: ItemKind) -> impl Iterator<Item = &str> {
        self.items.iter().filter(move |item| item.kind == kind).map(|item| item.name.as_str())
    }

    /// Unscoped blocks always apply; a profile-scoped block applies only to that profile.
    #[must_use]
    pub fn applies_to_profile(&self, profile: Option<&str>) -> bool {
        match (self.profile.as_deref(), profile) {
            (None, _) => true,
            (Some(own), Some(requested)) => own == requested,
            (Some(_), None) => false,
        }
    }
}

/// One `<feature>` node: the additions and removals of one api version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub api: String,
    pub name: String,
    pub number: String,
    pub requires: Vec<Block>,
    pub removes: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    /// The `supported` attribute split on `|`.
    pub supported: Vec<String>,
    pub requires: Vec<Block>,
}

impl Extension {
    #[must_use]
    pub fn supports(&self, api: &str) -> bool {
        self.supported.iter().any(|s| s == api)
    }
}

/// A `<types>` entry. Required type keys must match one; the Zig mapping itself is table driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub api: Option<String>,
    pub requires: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerant {
    pub name: String,
    /// Raw `value` attribute, decimal or `0x` hex, optionally signed.
    pub value: String,
    pub api: Option<String>,
}

/// An `<enums>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumGroup {
    pub group: Option<String>,
    /// The `type` attribute (`bitmask` for flag groups).
    pub kind: Option<String>,
    pub start: Option<String>,
    pub entries: Vec<Enumerant>,
}

impl EnumGroup {
    #[must_use]
    pub fn is_bitmask(&self) -> bool {
        self.kind.as_deref() == Some("bitmask")
    }
}

/// A `<proto>` or `<param>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// All text content concatenated, e.g. `const GLchar *name`.
    pub text: String,
    pub name: String,
    pub ptype: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub proto: Declaration,
    pub params: Vec<Declaration>,
}

impl Command {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.proto.name
    }
}

/// The parsed registry. Immutable once loaded; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub(crate) features: Vec<Feature>,
    pub(crate) extensions: Vec<Extension>,
    pub(crate) types: Vec<TypeDecl>,
    pub(crate) enum_groups: Vec<EnumGroup>,
    pub(crate) commands: IndexMap<String, Command>,
}

impl Registry {
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Feature nodes of one api, in document order.
    pub fn features_for<'a>(&'a self, api: &'a str) -> impl Iterator<Item = &'a Feature> {
        self.features.iter().filter(move |f| f.api == api)
    }

    #[must_use]
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    #[must_use]
    pub fn enum_groups(&self) -> &[EnumGroup] {
        &self.enum_groups
    }

    /// Commands in document order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Distinct api keys of the feature nodes, in order of first appearance.
    #[must_use]
    pub fn apis(&self) -> Vec<&str> {
        let mut apis: Vec<&str> = Vec::new();
        for feature in &self.features {
            if !apis.contains(&feature.api.as_str()) {
                apis.push(&feature.api);
            }
        }
        apis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(profile: Option<&str>) -> Block {
        Block {
            api: None,
            profile: profile.map(str::to_owned),
            items: vec![
                Item { kind: ItemKind::Command, name: "glClear".to_owned() },
                Item { kind: ItemKind::Enum, name: "GL_ZERO".to_owned() },
                Item { kind: ItemKind::Command, name: "glFlush".to_owned() },
            ],
        }
    }

    #[test]
    fn names_filter_by_kind() {
        let block = block(None);
        let names: Vec<_> = block.names(ItemKind::Command).collect();
        assert_eq!(names, ["glClear", "glFlush"]);
    }

    #[test]
    fn profile_scoping() {
        assert!(block(None).applies_to_profile(None));
        assert!(block(None).applies_to_profile(Some("core")));
        assert!(block(Some("core")).applies_to_profile(Some("core")));
        assert!(!block(Some("core")).applies_to_profile(Some("compatibility")));
        assert!(!block(Some("core")).applies_to_profile(None));
    }

    #[test]
    fn item_kind_parses_tag_names() {
        assert_eq!("command".parse::<ItemKind>().ok(), Some(ItemKind::Command));
        assert!("comment".parse::<ItemKind>().is_err());
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
