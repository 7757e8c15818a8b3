//! Host-side model of the emitted `DispatchTable`.
//!
//! Mirrors the generated `init` so a driver (or a mock of one) can be checked against a
//! selection before the binding ships: which required commands would be missing, which
//! extensions would be reported, which optional commands would end up loaded.

use crate::options::ExtensionProbe;
use glzig_domain::features::ResolvedFeatureSet;
use indexmap::IndexMap;
use std::num::NonZeroUsize;

/// What `init` needs from the platform: function addresses and the extension list.
pub trait Loader {
    /// Address of the command named `prefixed_name` (`glClear`), if the driver exports it.
    fn proc_address(&self, prefixed_name: &str) -> Option<NonZeroUsize>;

    /// Whether the driver advertises the extension `prefixed_name` (`GL_KHR_debug`).
    fn extension_supported(&self, prefixed_name: &str) -> bool;
}

/// One command pointer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSlot {
    pub optional: bool,
    pub address: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    commands: IndexMap<String, CommandSlot>,
    extensions: IndexMap<String, bool>,
    extension_commands: IndexMap<String, Vec<String>>,
}

impl DispatchTable {
    /// An uninitialized table with one slot per command and one flag per extension.
    #[must_use]
    pub fn new(features: &ResolvedFeatureSet) -> Self {
        let commands = features
            .commands
            .values()
            .map(|c| (c.key.clone(), CommandSlot { optional: c.optional, address: None }))
            .collect();
        let extensions = features.extensions.keys().map(|k| (k.clone(), false)).collect();
        let extension_commands =
            features.extensions.values().map(|e| (e.key.clone(), e.commands.clone())).collect();
        Self { commands, extensions, extension_commands }
    }

    /// Loads the table the way the generated `init` does.
    ///
    /// Without extensions the result is `true` only if every required command resolved. With
    /// extensions the result is always `true`; each supported extension then loads its
    /// commands on a best-effort basis.
    pub fn init(&mut self, loader: &impl Loader) -> bool {
        let mut success = true;
        for (key, slot) in &mut self.commands {
            if slot.optional {
                slot.address = None;
            } else {
                slot.address = loader.proc_address(key);
                success &= slot.address.is_some();
            }
        }

        if self.extensions.is_empty() {
            return success;
        }
        for (key, supported) in &mut self.extensions {
            *supported = loader.extension_supported(key);
            if !*supported {
                continue;
            }
            for command in self.extension_commands.get(key).into_iter().flatten() {
                if let Some(slot) = self.commands.get_mut(command) {
                    slot.address = loader.proc_address(command);
                }
            }
        }
        true
    }

    /// Loaded address of `key`, if `init` found one.
    #[must_use]
    pub fn command(&self, key: &str) -> Option<NonZeroUsize> {
        self.slot(key).and_then(|slot| slot.address)
    }

    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&CommandSlot> {
        self.commands.get(key)
    }

    /// Value of the extension's `bool` field after `init`.
    #[must_use]
    pub fn extension_supported(&self, key: &str) -> bool {
        self.extensions.get(key).copied().unwrap_or(false)
    }

    /// Required commands the last `init` could not load.
    pub fn missing_required(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .filter(|(_, slot)| !slot.optional && slot.address.is_none())
            .map(|(key, _)| key.as_str())
    }
}

/// Extensions as a driver reports them, in either probe style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionList {
    /// One name per `glGetStringi(EXTENSIONS, i)` call.
    Indexed(Vec<String>),
    /// The single space separated `glGetString(EXTENSIONS)` string.
    Delimited(String),
}

impl ExtensionList {
    /// Exact, whole-name membership, as the generated `initExtension` checks it.
    #[must_use]
    pub fn contains(&self, prefixed_name: &str) -> bool {
        match self {
            Self::Indexed(names) => listed_in_indexed(names, prefixed_name),
            Self::Delimited(list) => listed_in_delimited(list, prefixed_name),
        }
    }

    /// The probe a binding generated for this kind of context would use.
    #[must_use]
    pub const fn probe(&self) -> ExtensionProbe {
        match self {
            Self::Indexed(_) => ExtensionProbe::IndexedCount,
            Self::Delimited(_) => ExtensionProbe::SpaceDelimited,
        }
    }
}

/// A [`Loader`] over recorded driver data: exported symbols and the extension report.
///
/// ```rust
/// use glzig_emitter::dispatch::{DriverSnapshot, ExtensionList, Loader};
/// use std::num::NonZeroUsize;
///
/// let driver = DriverSnapshot::new(ExtensionList::Delimited("GL_KHR_debug".to_owned()))
///     .with_symbol("glClear", NonZeroUsize::MIN);
/// assert!(driver.extension_supported("GL_KHR_debug"));
/// assert!(driver.proc_address("glFlush").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSnapshot {
    symbols: IndexMap<String, NonZeroUsize>,
    extensions: ExtensionList,
}

impl DriverSnapshot {
    #[must_use]
    pub fn new(extensions: ExtensionList) -> Self {
        Self { symbols: IndexMap::new(), extensions }
    }

    #[must_use = "Adds an exported symbol to the snapshot"]
    pub fn with_symbol(mut self, prefixed_name: impl Into<String>, address: NonZeroUsize) -> Self {
        self.symbols.insert(prefixed_name.into(), address);
        self
    }

    #[must_use]
    pub const fn extensions(&self) -> &ExtensionList {
        &self.extensions
    }
}

impl Loader for DriverSnapshot {
    fn proc_address(&self, prefixed_name: &str) -> Option<NonZeroUsize> {
        self.symbols.get(prefixed_name).copied()
    }

    fn extension_supported(&self, prefixed_name: &str) -> bool {
        self.extensions.contains(prefixed_name)
    }
}

/// Exact match against a `glGetStringi(EXTENSIONS, i)` style list.
#[must_use]
pub fn listed_in_indexed<S: AsRef<str>>(names: &[S], name: &str) -> bool {
    names.iter().any(|n| n.as_ref() == name)
}

/// Exact match against a `glGetString(EXTENSIONS)` style space separated list.
#[must_use]
pub fn listed_in_delimited(list: &str, name: &str) -> bool {
    list.split(' ').filter(|token| !token.is_empty()).any(|token| token == name)
}
