use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use symkeys_build::build_tree;
use symkeys_config as cli;
use symkeys_stats::tree_stats;
use symkeys_types::{ShortcutDocument, TreeStats};
use tracing::info;

use crate::config::{BuildSettings, resolve_build};
use crate::source::load_table;

pub(crate) fn handle(args: &cli::BuildArgs, config: &cli::BuildConfig) -> Result<()> {
    let settings = resolve_build(args, config);
    let document = build_document(&settings)?;
    write_document(&document, &settings.output)?;

    let stats = tree_stats(&document.categories);
    info!(
        output = %settings.output.display(),
        shortcuts = stats.total_shortcuts,
        categories = stats.categories,
        "wrote shortcut document"
    );
    print!("{}", summary(&settings.output, &stats));
    Ok(())
}

/// Load the vendor table and build the document it describes.
pub(crate) fn build_document(settings: &BuildSettings) -> Result<ShortcutDocument> {
    let nodes = load_table(&settings.input)?;
    info!(input = %settings.input.display(), nodes = nodes.len(), "loaded shortcut table");

    let output = build_tree(&nodes);
    Ok(output.into_document(
        settings.version.clone(),
        settings.generated_from.clone(),
        settings.note.clone(),
    ))
}

/// Pretty-print with two-space indentation and a trailing newline.
pub(crate) fn write_document(document: &ShortcutDocument, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn summary(output: &Path, stats: &TreeStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated: {}", output.display());
    for category in &stats.per_category {
        let _ = writeln!(out, "  {}: {} shortcuts", category.key, category.shortcuts);
    }
    let _ = writeln!(
        out,
        "Total: {} shortcuts in {} categories",
        stats.total_shortcuts, stats.categories
    );
    out
}
