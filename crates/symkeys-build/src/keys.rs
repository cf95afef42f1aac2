//! Collision-aware insertion into keyed mappings.

use indexmap::IndexMap;
use symkeys_name::synthesize_key;
use symkeys_types::Keyed;

/// Source data used to disambiguate a colliding key.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KeyHints<'a> {
    pub source_identifier: Option<&'a str>,
    pub id: Option<i64>,
}

/// Insert `entry` under its own key, never overwriting an existing entry.
///
/// A taken key is extended with, in order: a suffix derived from the last
/// `.`-separated segment of the source identifier, the numeric id, and an
/// increasing counter starting at 2. The first free candidate wins and the
/// entry's own key is rewritten to match. Returns the collision message when
/// the key had to change.
pub(crate) fn insert_unique<T: Keyed>(
    map: &mut IndexMap<String, T>,
    mut entry: T,
    hints: KeyHints<'_>,
) -> Option<String> {
    let base = entry.entry_key().to_string();
    if !map.contains_key(&base) {
        map.insert(base, entry);
        return None;
    }

    let key = disambiguate(map, &base, hints);
    let message = format!("key '{base}' already taken, stored as '{key}'");
    entry.rekey(key.clone());
    map.insert(key, entry);
    Some(message)
}

fn disambiguate<T>(map: &IndexMap<String, T>, base: &str, hints: KeyHints<'_>) -> String {
    let from_identifier = hints
        .source_identifier
        .and_then(|ident| ident.rsplit('.').next())
        .map(|segment| upper_first(&synthesize_key(segment)))
        .filter(|suffix| !suffix.is_empty());

    let candidates = from_identifier
        .into_iter()
        .chain(hints.id.map(|id| id.to_string()));
    for suffix in candidates {
        let candidate = format!("{base}{suffix}");
        if !map.contains_key(&candidate) {
            return candidate;
        }
    }

    let mut n = 2usize;
    loop {
        let candidate = format!("{base}{n}");
        if !map.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) => head.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use symkeys_types::Shortcut;

    use super::*;

    fn shortcut(id: i64, key: &str) -> Shortcut {
        Shortcut::new(id, key, key)
    }

    #[test]
    fn free_key_is_inserted_unchanged() {
        let mut map = IndexMap::new();
        let msg = insert_unique(&mut map, shortcut(1, "showDesktop"), KeyHints::default());
        assert!(msg.is_none());
        assert!(map.contains_key("showDesktop"));
    }

    #[test]
    fn identifier_suffix_is_preferred() {
        let mut map = IndexMap::new();
        insert_unique(&mut map, shortcut(1, "fill"), KeyHints::default());
        let msg = insert_unique(
            &mut map,
            shortcut(2, "fill"),
            KeyHints {
                source_identifier: Some("com.apple.windows.fill-alt"),
                id: Some(2),
            },
        );
        assert_eq!(msg.as_deref(), Some("key 'fill' already taken, stored as 'fillFillAlt'"));
        assert_eq!(map["fillFillAlt"].key, "fillFillAlt");
        assert_eq!(map["fill"].id, 1);
    }

    #[test]
    fn id_suffix_is_used_without_identifier() {
        let mut map = IndexMap::new();
        insert_unique(&mut map, shortcut(1, "fill"), KeyHints::default());
        insert_unique(
            &mut map,
            shortcut(240, "fill"),
            KeyHints {
                source_identifier: None,
                id: Some(240),
            },
        );
        assert_eq!(map["fill240"].id, 240);
    }

    #[test]
    fn counter_is_the_last_resort() {
        let mut map = IndexMap::new();
        insert_unique(&mut map, shortcut(1, "fill"), KeyHints::default());
        insert_unique(&mut map, shortcut(2, "fill"), KeyHints::default());
        insert_unique(&mut map, shortcut(3, "fill"), KeyHints::default());
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["fill", "fill2", "fill3"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = IndexMap::new();
        for key in ["zeta", "alpha", "mid"] {
            insert_unique(&mut map, shortcut(1, key), KeyHints::default());
        }
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
