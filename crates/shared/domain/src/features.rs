//! The resolved feature set: everything the emitter needs, already named, typed and ordered.
//!
//! All four collections are insertion-ordered maps keyed by the registry identifier. The
//! resolver inserts in final emission order, so iterating a map is iterating the output.

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Registry key, e.g. `GLenum` or `struct _cl_context`.
    pub key: String,
    pub name: String,
    /// Zig right-hand side of the alias.
    pub repr: String,
}

/// Sorting tier of a constant. Variants are declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstantClass {
    SpecialNumber,
    Bitmask,
    Enum,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConstant {
    pub key: String,
    pub name: String,
    /// Formatted literal: optional `-`, `0x`, uppercase hex digits.
    pub value: String,
    pub class: ConstantClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParam {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub key: String,
    pub name: String,
    pub params: Vec<ResolvedParam>,
    pub return_type: String,
    /// Reachable only through a requested extension, never through the base feature chain.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExtension {
    pub key: String,
    pub name: String,
    /// Keys of the commands this extension introduces, ascending.
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFeatureSet {
    pub types: IndexMap<String, ResolvedType>,
    pub constants: IndexMap<String, ResolvedConstant>,
    pub commands: IndexMap<String, ResolvedCommand>,
    pub extensions: IndexMap<String, ResolvedExtension>,
}

impl ResolvedFeatureSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.constants.is_empty()
            && self.commands.is_empty()
            && self.extensions.is_empty()
    }

    #[must_use]
    pub fn has_extensions(&self) -> bool {
        !self.extensions.is_empty()
    }

    /// Commands loaded unconditionally by the dispatch table.
    pub fn required_commands(&self) -> impl Iterator<Item = &ResolvedCommand> {
        self.commands.values().filter(|c| !c.optional)
    }

    pub fn optional_commands(&self) -> impl Iterator<Item = &ResolvedCommand> {
        self.commands.values().filter(|c| c.optional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(key: &str, optional: bool) -> ResolvedCommand {
        ResolvedCommand {
            key: key.to_owned(),
            name: key.to_owned(),
            params: Vec::new(),
            return_type: "void".to_owned(),
            optional,
        }
    }

    #[test]
    fn class_order_matches_emission_order() {
        assert!(ConstantClass::SpecialNumber < ConstantClass::Bitmask);
        assert!(ConstantClass::Bitmask < ConstantClass::Enum);
        assert!(ConstantClass::Enum < ConstantClass::Other);
    }

    #[test]
    fn required_and_optional_partition_commands() {
        let mut set = ResolvedFeatureSet::default();
        assert!(set.is_empty());
        for cmd in [command("glClear", false), command("glDebugMessageCallback", true)] {
            set.commands.insert(cmd.key.clone(), cmd);
        }

        let required: Vec<_> = set.required_commands().map(|c| c.key.as_str()).collect();
        let optional: Vec<_> = set.optional_commands().map(|c| c.key.as_str()).collect();
        assert_eq!(required, ["glClear"]);
        assert_eq!(optional, ["glDebugMessageCallback"]);
        assert!(!set.has_extensions());
    }
}
