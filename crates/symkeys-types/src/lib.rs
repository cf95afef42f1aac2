//! # symkeys-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures shared by every `symkeys` crate:
//! the raw node shape read from the vendor shortcut table, the normalized
//! category tree, statistics, and render options.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the persisted
//! `symbolic-hotkeys.json` document, not Rust struct literals. Optional
//! fields are omitted when absent, never written as `null`.
//!
//! ## What belongs here
//! * Pure data structs and their Serde definitions
//! * Small accessors that do not walk the tree
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Classification, key synthesis, or rendering logic

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Node class the vendor uses for labels that carry no shortcut.
pub const DISPLAY_ONLY_NODE_CLASS: &str = "DisplayOnlyNode";

/// Default provenance label written into generated documents.
pub const DEFAULT_VERSION_LABEL: &str = "macOS 15.x (Sequoia)";

/// File name of the vendor table the document is generated from.
pub const DEFAULT_GENERATED_FROM: &str = "DefaultShortcutsTable.xml";

/// Default note embedded into generated documents.
pub const DEFAULT_NOTE: &str = "Generated by symkeys build. Do not edit manually.";

/// Label printed at the top of rendered trees.
pub const DEFAULT_ROOT_LABEL: &str = "darwin.symbolicHotkeys";

// -----------------------------------------------------------------------------
// Raw input
// -----------------------------------------------------------------------------

/// One untrusted node of the vendor shortcut table.
///
/// Every attribute is optional. `children` distinguishes an absent child
/// list (`None`) from an explicitly empty one (`Some(vec![])`) because the
/// classifier treats the two differently at category level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNode {
    pub name: Option<String>,
    pub node_class: Option<String>,
    pub hotkey_id: Option<i64>,
    pub slow_hotkey_id: Option<i64>,
    pub identifier: Option<String>,
    pub key: Option<String>,
    pub modifier: Option<i64>,
    pub char_key: Option<String>,
    pub enabled: Option<bool>,
    pub dynamic: Option<bool>,
    pub children: Option<Vec<RawNode>>,
}

impl RawNode {
    /// Display name, treating an empty string the same as an absent one.
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Source identifier, treating an empty string the same as an absent one.
    pub fn non_empty_identifier(&self) -> Option<&str> {
        self.identifier.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_display_only(&self) -> bool {
        self.node_class.as_deref() == Some(DISPLAY_ONLY_NODE_CLASS)
    }

    /// Children as a slice; absent and empty both yield `&[]`.
    pub fn child_nodes(&self) -> &[RawNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

// -----------------------------------------------------------------------------
// Normalized tree
// -----------------------------------------------------------------------------

/// A single symbolic hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: i64,
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_modifier: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_char_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    #[serde(
        rename = "dynamic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_dynamic: Option<bool>,
}

impl Shortcut {
    /// Create a shortcut with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            key: key.into(),
            default_key: None,
            default_modifier: None,
            default_char_key: None,
            default_enabled: None,
            slow_id: None,
            source_identifier: None,
            is_dynamic: None,
        }
    }

    pub fn dynamic(&self) -> bool {
        self.is_dynamic.unwrap_or(false)
    }
}

/// One entry of a subgroup's mapping.
///
/// Nested groups share the namespace of plain shortcuts; the `kind` tag says
/// which one an entry is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GroupEntry {
    Shortcut(Shortcut),
    Group(Group),
}

impl GroupEntry {
    pub fn name(&self) -> &str {
        match self {
            GroupEntry::Shortcut(s) => &s.name,
            GroupEntry::Group(g) => &g.name,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            GroupEntry::Shortcut(s) => &s.key,
            GroupEntry::Group(g) => &g.key,
        }
    }

    pub(crate) fn set_key(&mut self, key: String) {
        match self {
            GroupEntry::Shortcut(s) => s.key = key,
            GroupEntry::Group(g) => g.key = key,
        }
    }
}

/// A named subgroup inside a category. Never empty once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub source_identifier: String,
    pub shortcuts: IndexMap<String, GroupEntry>,
}

/// A top-level category of the shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub key: String,
    pub source_identifier: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub shortcuts: IndexMap<String, Shortcut>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub subgroups: IndexMap<String, Group>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        source_identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            source_identifier: source_identifier.into(),
            shortcuts: IndexMap::new(),
            subgroups: IndexMap::new(),
        }
    }
}

/// Ordered mapping from category key to category.
pub type CategoryMap = IndexMap<String, Category>;

/// The persisted document: provenance metadata plus the category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDocument {
    pub version: String,
    pub generated_from: String,
    pub note: String,
    pub categories: CategoryMap,
}

impl ShortcutDocument {
    /// Wrap a category tree with the default provenance metadata.
    pub fn with_defaults(categories: CategoryMap) -> Self {
        Self {
            version: DEFAULT_VERSION_LABEL.to_string(),
            generated_from: DEFAULT_GENERATED_FROM.to_string(),
            note: DEFAULT_NOTE.to_string(),
            categories,
        }
    }
}

// -----------------------------------------------------------------------------
// Keyed insertion
// -----------------------------------------------------------------------------

/// Something stored in a keyed mapping whose own `key` field must match its
/// mapping key.
pub trait Keyed {
    fn entry_key(&self) -> &str;
    fn rekey(&mut self, key: String);
}

impl Keyed for Shortcut {
    fn entry_key(&self) -> &str {
        &self.key
    }
    fn rekey(&mut self, key: String) {
        self.key = key;
    }
}

impl Keyed for Group {
    fn entry_key(&self) -> &str {
        &self.key
    }
    fn rekey(&mut self, key: String) {
        self.key = key;
    }
}

impl Keyed for Category {
    fn entry_key(&self) -> &str {
        &self.key
    }
    fn rekey(&mut self, key: String) {
        self.key = key;
    }
}

impl Keyed for GroupEntry {
    fn entry_key(&self) -> &str {
        self.key()
    }
    fn rekey(&mut self, key: String) {
        self.set_key(key);
    }
}

// -----------------------------------------------------------------------------
// Statistics
// -----------------------------------------------------------------------------

/// Shortcut counts for a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub key: String,
    pub shortcuts: usize,
    pub dynamic: usize,
}

/// Totals over a whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub total_shortcuts: usize,
    pub dynamic_shortcuts: usize,
    pub categories: usize,
    pub per_category: Vec<CategoryStats>,
}

// -----------------------------------------------------------------------------
// Render options (shared with CLI)
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RenderFormat {
    /// One indented line per entry.
    #[default]
    Compact,
    /// Markdown document with header, note, and statistics.
    Report,
}

/// Options controlling how a tree is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub format: RenderFormat,
    pub show_ids: bool,
    pub show_dynamic: bool,
    pub root_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: RenderFormat::Compact,
            show_ids: true,
            show_dynamic: true,
            root_label: DEFAULT_ROOT_LABEL.to_string(),
        }
    }
}
