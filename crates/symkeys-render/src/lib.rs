//! Deterministic tree renderers for a `ShortcutDocument`.
//!
//! Both formats walk the same [`tree_lines`] sequence, so they always list
//! the same entries in the same order. Nothing is sorted: categories, direct
//! shortcuts, and subgroups appear in the order the tree was built.

#![forbid(unsafe_code)]

use symkeys_stats::{has_dynamic, tree_stats};
use symkeys_types::{
    Category, CategoryMap, Group, GroupEntry, RenderFormat, RenderOptions, Shortcut,
    ShortcutDocument,
};

/// One entry of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItem<'a> {
    Category(&'a Category),
    Group(&'a Group),
    Shortcut(&'a Shortcut),
}

/// A flattened entry with its depth below the root (categories are 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub depth: usize,
    pub item: LineItem<'a>,
}

fn push_group<'a>(group: &'a Group, depth: usize, out: &mut Vec<TreeLine<'a>>) {
    out.push(TreeLine {
        depth,
        item: LineItem::Group(group),
    });
    for entry in group.shortcuts.values() {
        match entry {
            GroupEntry::Shortcut(s) => out.push(TreeLine {
                depth: depth + 1,
                item: LineItem::Shortcut(s),
            }),
            GroupEntry::Group(inner) => push_group(inner, depth + 1, out),
        }
    }
}

/// Flatten the tree in render order.
///
/// Order: each category, then its direct shortcuts, then each subgroup
/// followed by its entries.
#[must_use]
pub fn tree_lines(categories: &CategoryMap) -> Vec<TreeLine<'_>> {
    let mut out = Vec::new();
    for category in categories.values() {
        out.push(TreeLine {
            depth: 0,
            item: LineItem::Category(category),
        });
        for shortcut in category.shortcuts.values() {
            out.push(TreeLine {
                depth: 1,
                item: LineItem::Shortcut(shortcut),
            });
        }
        for group in category.subgroups.values() {
            push_group(group, 1, &mut out);
        }
    }
    out
}

fn id_annotation(shortcut: &Shortcut, opts: &RenderOptions) -> String {
    if opts.show_ids {
        format!(" (ID: {})", shortcut.id)
    } else {
        String::new()
    }
}

fn dynamic_annotation<'m>(shortcut: &Shortcut, opts: &RenderOptions, marker: &'m str) -> &'m str {
    if opts.show_dynamic && shortcut.dynamic() {
        marker
    } else {
        ""
    }
}

/// Render the compact tree: one line per entry, two spaces per level.
#[must_use]
pub fn render_compact(doc: &ShortcutDocument, opts: &RenderOptions) -> String {
    let mut out = format!("`{}`\n", opts.root_label);
    for line in tree_lines(&doc.categories) {
        let indent = "  ".repeat(line.depth + 1);
        let text = match line.item {
            LineItem::Category(c) => format!("`{}` (**{}**)", c.key, c.name),
            LineItem::Group(g) => format!("`{}` (**{}**)", g.key, g.name),
            LineItem::Shortcut(s) => format!(
                "`{}` - **{}**{}{}",
                s.key,
                s.name,
                id_annotation(s, opts),
                dynamic_annotation(s, opts, " [dynamic]")
            ),
        };
        out.push_str(&format!("{indent}- {text}\n"));
    }
    out
}

/// Render the Markdown report: header, optional dynamic note, tree, and a
/// statistics block.
#[must_use]
pub fn render_report(doc: &ShortcutDocument, opts: &RenderOptions) -> String {
    let stats = tree_stats(&doc.categories);
    let mut out = String::new();

    out.push_str(&format!("# {} Options Tree\n\n", opts.root_label));
    out.push_str(&format!("Generated from version: {}\n", doc.version));
    out.push_str(&format!("Total categories: {}\n\n", stats.categories));

    if opts.show_dynamic && has_dynamic(&doc.categories) {
        out.push_str(
            "> **Note**: Shortcuts marked with `[dynamic]` are dynamically created by macOS.\n\n",
        );
    }

    out.push_str(&format!("## {}\n\n", opts.root_label));

    for line in tree_lines(&doc.categories) {
        let indent = "  ".repeat(line.depth);
        let text = match line.item {
            LineItem::Category(c) => format!("**{}** ({})", c.key, c.name),
            LineItem::Group(g) => format!("**{}** ({})", g.key, g.name),
            LineItem::Shortcut(s) => format!(
                "`{}` - {}{}{}",
                s.key,
                s.name,
                id_annotation(s, opts),
                dynamic_annotation(s, opts, " `[dynamic]`")
            ),
        };
        out.push_str(&format!("{indent}- {text}\n"));
    }

    out.push_str("\n## Statistics\n\n");
    out.push_str(&format!("- Total shortcuts: {}\n", stats.total_shortcuts));
    out.push_str(&format!("- Dynamic shortcuts: {}\n", stats.dynamic_shortcuts));
    out.push_str(&format!("- Categories: {}\n", stats.categories));
    out
}

/// Render in the format selected by `opts.format`.
#[must_use]
pub fn render(doc: &ShortcutDocument, opts: &RenderOptions) -> String {
    match opts.format {
        RenderFormat::Compact => render_compact(doc, opts),
        RenderFormat::Report => render_report(doc, opts),
    }
}
