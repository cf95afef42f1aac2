//! Parses arbitrary bytes as a shortcut document and renders it both ways.

#![no_main]
use libfuzzer_sys::fuzz_target;
use symkeys_render::{LineItem, render_compact, render_report, tree_lines};
use symkeys_stats::tree_stats;
use symkeys_types::{RenderOptions, ShortcutDocument};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(doc) = serde_json::from_slice::<ShortcutDocument>(data) else {
        return;
    };

    let opts = RenderOptions::default();
    let compact = render_compact(&doc, &opts);
    let lines = tree_lines(&doc.categories);
    assert_eq!(
        compact.lines().count(),
        lines.len() + 1,
        "compact output is the root line plus one line per entry"
    );

    let leaves = lines
        .iter()
        .filter(|l| matches!(l.item, LineItem::Shortcut(_)))
        .count();
    let stats = tree_stats(&doc.categories);
    assert_eq!(stats.total_shortcuts, leaves);
    assert!(stats.dynamic_shortcuts <= stats.total_shortcuts);

    let report = render_report(&doc, &opts);
    let footer = format!("- Total shortcuts: {leaves}\n");
    assert!(report.contains(&footer));
});
