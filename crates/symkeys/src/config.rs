use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use symkeys_config as cli;
use symkeys_types::{
    DEFAULT_GENERATED_FROM, DEFAULT_NOTE, DEFAULT_ROOT_LABEL, DEFAULT_VERSION_LABEL, RenderFormat,
    RenderOptions,
};

/// Fully resolved settings for `symkeys build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub version: String,
    pub generated_from: String,
    pub note: String,
}

/// Fully resolved settings for `symkeys render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
}

/// Load `symkeys.toml` from `explicit`, or from the working directory when
/// present. A missing default file is not an error; a broken one is.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<cli::TomlConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(cli::CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Ok(cli::TomlConfig::default());
            }
            candidate
        }
    };
    cli::TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))
}

pub fn resolve_build(args: &cli::BuildArgs, config: &cli::BuildConfig) -> BuildSettings {
    BuildSettings {
        input: args
            .input
            .clone()
            .or_else(|| config.input.clone())
            .unwrap_or_else(|| PathBuf::from(cli::DEFAULT_INPUT)),
        output: args
            .output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(cli::DEFAULT_DOCUMENT)),
        version: args
            .version_label
            .clone()
            .or_else(|| config.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION_LABEL.to_string()),
        generated_from: config
            .generated_from
            .clone()
            .unwrap_or_else(|| DEFAULT_GENERATED_FROM.to_string()),
        note: config
            .note
            .clone()
            .unwrap_or_else(|| DEFAULT_NOTE.to_string()),
    }
}

pub fn resolve_render(args: &cli::RenderArgs, config: &cli::RenderConfig) -> RenderSettings {
    RenderSettings {
        input: args
            .input
            .clone()
            .or_else(|| config.input.clone())
            .unwrap_or_else(|| PathBuf::from(cli::DEFAULT_DOCUMENT)),
        output: args.output.clone(),
        options: RenderOptions {
            format: args
                .format
                .or(config.format)
                .unwrap_or(RenderFormat::Compact),
            show_ids: !args.no_ids && config.ids.unwrap_or(true),
            show_dynamic: !args.no_dynamic && config.dynamic.unwrap_or(true),
            root_label: config
                .root
                .clone()
                .unwrap_or_else(|| DEFAULT_ROOT_LABEL.to_string()),
        },
    }
}
