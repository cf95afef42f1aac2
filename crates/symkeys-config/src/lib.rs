//! # symkeys-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `symkeys.toml` file schema.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default paths and labels
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use symkeys_types::RenderFormat;

/// Name of the configuration file discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = "symkeys.toml";

/// Default location of the vendor shortcut table.
pub const DEFAULT_INPUT: &str = "data/DefaultShortcutsTable.xml";

/// Default location of the generated document.
pub const DEFAULT_DOCUMENT: &str = "data/symbolic-hotkeys.json";

/// Where the vendor table lives on a Mac.
pub const SYSTEM_TABLE_PATH: &str = "/System/Library/ExtensionKit/Extensions/KeyboardSettings.appex/Contents/Resources/en.lproj/DefaultShortcutsTable.xml";

/// `symkeys` turns the macOS keyboard shortcut table into a normalized
/// JSON document and renders it as a readable tree.
#[derive(Parser, Debug)]
#[command(name = "symkeys", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: `symkeys.toml` in the working directory, if present).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse the vendor shortcut table and write the normalized JSON document.
    Build(BuildArgs),

    /// Render the normalized document as a compact tree or a Markdown report.
    Render(RenderArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Vendor property-list table to read.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the normalized JSON document.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Source version label recorded in the document.
    #[arg(long = "version-label", value_name = "LABEL")]
    pub version_label: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Normalized JSON document to render.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<RenderFormat>,

    /// Do not include shortcut ids.
    #[arg(long)]
    pub no_ids: bool,

    /// Do not mark dynamic shortcuts.
    #[arg(long)]
    pub no_dynamic: bool,

    /// Output file (default: stdout).
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    /// Build command settings.
    pub build: BuildConfig,

    /// Render command settings.
    pub render: RenderConfig,
}

/// Build command settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Vendor table path.
    pub input: Option<PathBuf>,

    /// Generated document path.
    pub output: Option<PathBuf>,

    /// Source version label.
    pub version: Option<String>,

    /// Name of the source file recorded in the document.
    pub generated_from: Option<String>,

    /// Note recorded in the document.
    pub note: Option<String>,
}

/// Render command settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Document to render.
    pub input: Option<PathBuf>,

    /// Output format: "compact" or "report".
    pub format: Option<RenderFormat>,

    /// Include shortcut ids.
    pub ids: Option<bool>,

    /// Mark dynamic shortcuts.
    pub dynamic: Option<bool>,

    /// Root label printed above the tree.
    pub root: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
