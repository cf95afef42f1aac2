use std::path::Path;

use anyhow::{Context, Result, bail};
use symkeys_config as cli;
use symkeys_render::render;
use symkeys_types::ShortcutDocument;
use tracing::debug;

use crate::config::resolve_render;

pub(crate) fn handle(args: &cli::RenderArgs, config: &cli::RenderConfig) -> Result<()> {
    let settings = resolve_render(args, config);
    let document = load_document(&settings.input)?;
    debug!(
        input = %settings.input.display(),
        format = ?settings.options.format,
        "rendering shortcut document"
    );
    let text = render(&document, &settings.options);

    match settings.output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Tree written to: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Read a document produced by `symkeys build`.
pub(crate) fn load_document(path: &Path) -> Result<ShortcutDocument> {
    if !path.exists() {
        bail!("input not found: shortcut document {}", path.display());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid shortcut document {}", path.display()))
}
