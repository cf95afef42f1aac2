//! # symkeys-build
//!
//! **Tier 1 (Normalization)**
//!
//! Turns the raw vendor shortcut table into the normalized category tree.
//!
//! ## Behavior
//! * Top-level nodes are categories; a category needs a name and an
//!   identifier, otherwise it is dropped with everything under it.
//! * Category children become direct shortcuts or subgroups.
//! * Subgroups keep nested groups and shortcuts in one tagged mapping.
//! * Malformed nodes are dropped and the walk continues. Dropped nodes are
//!   logged at `debug`; key collisions are disambiguated and reported as
//!   warnings.
//! * Output order follows the input order. Nothing is sorted.

#![forbid(unsafe_code)]

mod classify;
mod keys;

use indexmap::IndexMap;
use symkeys_name::{clean_display_name, synthesize_key};
use symkeys_types::{
    Category, CategoryMap, Group, GroupEntry, Keyed, RawNode, Shortcut, ShortcutDocument,
};
use tracing::{debug, warn};

pub use classify::{DiscardReason, NodeKind, Position, classify};

use keys::{KeyHints, insert_unique};

/// Result of a build: the category tree plus non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub categories: CategoryMap,
    pub warnings: Vec<String>,
}

impl BuildOutput {
    /// Wrap the categories with provenance metadata.
    pub fn into_document(
        self,
        version: impl Into<String>,
        generated_from: impl Into<String>,
        note: impl Into<String>,
    ) -> ShortcutDocument {
        ShortcutDocument {
            version: version.into(),
            generated_from: generated_from.into(),
            note: note.into(),
            categories: self.categories,
        }
    }
}

/// Build the normalized tree from the top-level raw nodes.
#[must_use]
pub fn build_tree(nodes: &[RawNode]) -> BuildOutput {
    let mut builder = Builder::default();
    let mut categories = CategoryMap::new();

    for node in nodes {
        let Some(category) = builder.parse_category(node) else {
            continue;
        };
        if category.key.is_empty() {
            builder.discard(node, DiscardReason::EmptyKey);
            continue;
        }
        let ident = category.source_identifier.clone();
        let hints = KeyHints {
            source_identifier: Some(ident.as_str()),
            id: None,
        };
        builder.insert(&mut categories, category, hints, "categories");
    }

    debug!(
        categories = categories.len(),
        warnings = builder.warnings.len(),
        "built shortcut tree"
    );

    BuildOutput {
        categories,
        warnings: builder.warnings,
    }
}

#[derive(Default)]
struct Builder {
    warnings: Vec<String>,
}

impl Builder {
    fn parse_category(&mut self, node: &RawNode) -> Option<Category> {
        let Some(name) = node.non_empty_name() else {
            self.discard(node, DiscardReason::MissingName);
            return None;
        };
        let Some(identifier) = node.non_empty_identifier() else {
            self.discard(node, DiscardReason::MissingIdentifier);
            return None;
        };

        let mut category = Category::new(clean_display_name(name), synthesize_key(name), identifier);
        let scope = format!("category '{}'", category.key);

        for child in node.child_nodes() {
            match classify(child, Position::CategoryChild) {
                NodeKind::Container => {
                    let Some(group) = self.parse_group(child) else {
                        continue;
                    };
                    if group.key.is_empty() {
                        self.discard(child, DiscardReason::EmptyKey);
                        continue;
                    }
                    let ident = group.source_identifier.clone();
                    let hints = KeyHints {
                        source_identifier: Some(ident.as_str()).filter(|s| !s.is_empty()),
                        id: None,
                    };
                    self.insert(&mut category.subgroups, group, hints, &scope);
                }
                NodeKind::Shortcut => {
                    let Some(shortcut) = self.parse_shortcut(child) else {
                        continue;
                    };
                    let ident = shortcut.source_identifier.clone();
                    let hints = KeyHints {
                        source_identifier: ident.as_deref(),
                        id: Some(shortcut.id),
                    };
                    self.insert(&mut category.shortcuts, shortcut, hints, &scope);
                }
                NodeKind::Discard(reason) => self.discard(child, reason),
            }
        }

        Some(category)
    }

    fn parse_group(&mut self, node: &RawNode) -> Option<Group> {
        let Some(name) = node.non_empty_name() else {
            self.discard(node, DiscardReason::MissingName);
            return None;
        };
        if node.child_nodes().is_empty() {
            self.discard(node, DiscardReason::EmptyContainer);
            return None;
        }

        let key = synthesize_key(name);
        let scope = format!("group '{key}'");
        let mut entries: IndexMap<String, GroupEntry> = IndexMap::new();

        for child in node.child_nodes() {
            let (entry, ident, id) = match classify(child, Position::GroupChild) {
                NodeKind::Container => match self.parse_group(child) {
                    Some(group) => {
                        let ident = Some(group.source_identifier.clone()).filter(|s| !s.is_empty());
                        (GroupEntry::Group(group), ident, None)
                    }
                    None => continue,
                },
                NodeKind::Shortcut => match self.parse_shortcut(child) {
                    Some(shortcut) => {
                        let ident = shortcut.source_identifier.clone();
                        let id = Some(shortcut.id);
                        (GroupEntry::Shortcut(shortcut), ident, id)
                    }
                    None => continue,
                },
                NodeKind::Discard(reason) => {
                    self.discard(child, reason);
                    continue;
                }
            };

            if entry.key().is_empty() {
                self.discard(child, DiscardReason::EmptyKey);
                continue;
            }
            let hints = KeyHints {
                source_identifier: ident.as_deref(),
                id,
            };
            self.insert(&mut entries, entry, hints, &scope);
        }

        if entries.is_empty() {
            self.discard(node, DiscardReason::EmptyContainer);
            return None;
        }

        Some(Group {
            name: clean_display_name(name),
            key,
            source_identifier: node.identifier.clone().unwrap_or_default(),
            shortcuts: entries,
        })
    }

    fn parse_shortcut(&mut self, node: &RawNode) -> Option<Shortcut> {
        let (Some(name), Some(id)) = (node.non_empty_name(), node.hotkey_id) else {
            self.discard(node, DiscardReason::NoHotkey);
            return None;
        };

        let key = synthesize_key(name);
        if key.is_empty() {
            self.discard(node, DiscardReason::EmptyKey);
            return None;
        }

        Some(Shortcut {
            id,
            name: clean_display_name(name),
            key,
            default_key: node.key.clone(),
            default_modifier: node.modifier,
            default_char_key: node.char_key.clone(),
            default_enabled: node.enabled,
            slow_id: node.slow_hotkey_id,
            source_identifier: node.identifier.clone(),
            is_dynamic: node.dynamic,
        })
    }

    fn insert<T: Keyed>(
        &mut self,
        map: &mut IndexMap<String, T>,
        entry: T,
        hints: KeyHints<'_>,
        scope: &str,
    ) {
        if let Some(message) = insert_unique(map, entry, hints) {
            warn!(scope = %scope, "{message}");
            self.warnings.push(format!("{scope}: {message}"));
        }
    }

    fn discard(&self, node: &RawNode, reason: DiscardReason) {
        debug!(
            name = node.name.as_deref().unwrap_or(""),
            hotkey_id = ?node.hotkey_id,
            %reason,
            "dropping node"
        );
    }
}
