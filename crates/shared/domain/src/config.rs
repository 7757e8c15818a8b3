use crate::selection::{NamingMode, Selection};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level `glzig.toml` configuration.
///
/// Every section falls back to its defaults, so an empty file (or no file) is valid.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub registry: RegistryConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Where the Khronos XML registry is read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub api: String,
    pub version: String,
    pub profile: Option<String>,
    pub extensions: Vec<String>,
    pub preserve_names: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Directory for log files. Console-only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
}

impl SelectionConfig {
    #[must_use]
    pub fn to_selection(&self) -> Selection {
        Selection {
            api: self.api.clone(),
            version: self.version.clone(),
            profile: self.profile.clone(),
            extensions: self.extensions.clone(),
            naming: NamingMode::from_preserve_flag(self.preserve_names),
        }
    }
}

// --- Default ---

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("gl.xml") }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            api: "gl".to_owned(),
            version: "4.6".to_owned(),
            profile: Some("core".to_owned()),
            extensions: Vec::new(),
            preserve_names: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("gl.zig") }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
