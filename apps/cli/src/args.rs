//! # CLI Argument Definitions
//!
//! Subcommands and flags of the `glzig` binary. Every flag is optional: values that are not
//! given on the command line come from `glzig.toml` (or `GLZIG__*` variables) and finally from
//! the built-in defaults.

use clap::{ArgAction, Args, Parser, Subcommand};
use glzig::domain::config::SelectionConfig;
use glzig::domain::selection::{NamingMode, Selection};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "glzig")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Generates hand-tailored, dynamically loaded OpenGL bindings for Zig")]
pub struct Cli {
    /// Khronos XML registry to read (overrides `registry.path`)
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Configuration file; `./glzig.toml` is used when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List the APIs described by the registry
    Apis {
        /// Print the index as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the extensions an API supports
    Extensions {
        /// API key, e.g. `gl` or `gles2`
        api: String,
    },
    /// Resolve a selection and write the Zig binding
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// API key (overrides `selection.api`)
    #[arg(long)]
    pub api: Option<String>,

    /// API version, e.g. `4.6` (overrides `selection.version`)
    #[arg(long = "version", value_name = "X.Y")]
    pub api_version: Option<String>,

    /// Profile, e.g. `core` (overrides `selection.profile`)
    #[arg(long, conflicts_with = "no_profile")]
    pub profile: Option<String>,

    /// Generate without a profile
    #[arg(long)]
    pub no_profile: bool,

    /// Extension to include; repeat for several (replaces `selection.extensions`)
    #[arg(long = "extension", value_name = "NAME")]
    pub extensions: Vec<String>,

    /// Keep registry names (`glClear`, `GL_TRIANGLES`, `GLenum`)
    #[arg(long)]
    pub preserve_names: bool,

    /// Output file (overrides `output.path`)
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the binding instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Overlays the command line onto the configured selection.
    #[must_use]
    pub fn selection(&self, config: &SelectionConfig) -> Selection {
        let mut selection = config.to_selection();

        if let Some(api) = &self.api {
            selection.api.clone_from(api);
        }
        if let Some(version) = &self.api_version {
            selection.version.clone_from(version);
        }
        if self.no_profile {
            selection.profile = None;
        } else if let Some(profile) = &self.profile {
            selection.profile = Some(profile.clone());
        }
        if !self.extensions.is_empty() {
            selection.extensions.clone_from(&self.extensions);
        }
        if self.preserve_names {
            selection.naming = NamingMode::Preserve;
        }

        selection
    }
}
