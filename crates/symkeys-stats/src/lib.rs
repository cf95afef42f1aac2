//! Shortcut statistics over a normalized tree.
//!
//! Counts are recomputed on every call; nothing is cached on the tree.
//! Nested groups inside a subgroup contribute the shortcuts they contain,
//! the nested group entry itself is not counted.

#![forbid(unsafe_code)]

use symkeys_types::{Category, CategoryMap, CategoryStats, Group, GroupEntry, Shortcut, TreeStats};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    shortcuts: usize,
    dynamic: usize,
}

impl Counts {
    fn add_shortcut(&mut self, shortcut: &Shortcut) {
        self.shortcuts += 1;
        if shortcut.dynamic() {
            self.dynamic += 1;
        }
    }

    fn merge(&mut self, other: Counts) {
        self.shortcuts += other.shortcuts;
        self.dynamic += other.dynamic;
    }
}

fn count_group(group: &Group) -> Counts {
    let mut counts = Counts::default();
    for entry in group.shortcuts.values() {
        match entry {
            GroupEntry::Shortcut(s) => counts.add_shortcut(s),
            GroupEntry::Group(inner) => counts.merge(count_group(inner)),
        }
    }
    counts
}

fn count_category(category: &Category) -> Counts {
    let mut counts = Counts::default();
    for shortcut in category.shortcuts.values() {
        counts.add_shortcut(shortcut);
    }
    for group in category.subgroups.values() {
        counts.merge(count_group(group));
    }
    counts
}

/// Compute shortcut counts for a single category.
#[must_use]
pub fn category_stats(category: &Category) -> CategoryStats {
    let counts = count_category(category);
    CategoryStats {
        key: category.key.clone(),
        shortcuts: counts.shortcuts,
        dynamic: counts.dynamic,
    }
}

/// Compute totals and the per-category breakdown for a tree.
///
/// The breakdown follows the tree's insertion order.
#[must_use]
pub fn tree_stats(categories: &CategoryMap) -> TreeStats {
    let per_category: Vec<CategoryStats> = categories.values().map(category_stats).collect();
    TreeStats {
        total_shortcuts: per_category.iter().map(|c| c.shortcuts).sum(),
        dynamic_shortcuts: per_category.iter().map(|c| c.dynamic).sum(),
        categories: categories.len(),
        per_category,
    }
}

/// True when any shortcut anywhere in the tree is dynamic.
#[must_use]
pub fn has_dynamic(categories: &CategoryMap) -> bool {
    categories
        .values()
        .any(|category| count_category(category).dynamic > 0)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn shortcut(id: i64, key: &str, dynamic: bool) -> Shortcut {
        let mut s = Shortcut::new(id, key, key);
        if dynamic {
            s.is_dynamic = Some(true);
        }
        s
    }

    fn group(key: &str, entries: Vec<GroupEntry>) -> Group {
        Group {
            name: key.to_string(),
            key: key.to_string(),
            source_identifier: String::new(),
            shortcuts: entries
                .into_iter()
                .map(|e| (e.key().to_string(), e))
                .collect(),
        }
    }

    fn tree() -> CategoryMap {
        let mut mc = Category::new("Mission Control", "missionControl", "com.apple.mc");
        mc.shortcuts.insert("a".into(), shortcut(1, "a", false));
        mc.shortcuts.insert("b".into(), shortcut(2, "b", true));
        mc.subgroups.insert(
            "spaces".into(),
            group(
                "spaces",
                vec![
                    GroupEntry::Shortcut(shortcut(3, "c", false)),
                    GroupEntry::Group(group(
                        "nested",
                        vec![
                            GroupEntry::Shortcut(shortcut(4, "d", true)),
                            GroupEntry::Shortcut(shortcut(5, "e", false)),
                        ],
                    )),
                ],
            ),
        );
        let empty = Category::new("Spotlight", "spotlight", "com.apple.spotlight");

        let mut map = IndexMap::new();
        map.insert(mc.key.clone(), mc);
        map.insert(empty.key.clone(), empty);
        map
    }

    #[test]
    fn empty_tree_has_zero_counts() {
        let stats = tree_stats(&CategoryMap::new());
        assert_eq!(stats, TreeStats::default());
        assert!(!has_dynamic(&CategoryMap::new()));
    }

    #[test]
    fn totals_include_subgroups_and_nested_leaves() {
        let stats = tree_stats(&tree());
        assert_eq!(stats.total_shortcuts, 5);
        assert_eq!(stats.dynamic_shortcuts, 2);
        assert_eq!(stats.categories, 2);
    }

    #[test]
    fn per_category_follows_insertion_order() {
        let stats = tree_stats(&tree());
        let keys: Vec<&str> = stats.per_category.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["missionControl", "spotlight"]);
        assert_eq!(stats.per_category[1].shortcuts, 0);
    }

    #[test]
    fn explicit_false_dynamic_is_not_counted() {
        let mut cat = Category::new("X", "x", "com.x");
        let mut s = shortcut(1, "a", false);
        s.is_dynamic = Some(false);
        cat.shortcuts.insert("a".into(), s);
        assert_eq!(category_stats(&cat).dynamic, 0);
    }

    #[test]
    fn has_dynamic_detects_nested_flag() {
        assert!(has_dynamic(&tree()));
    }
}
