//! Builds a tree from arbitrary raw node JSON and checks the output shape.

#![no_main]
use libfuzzer_sys::fuzz_target;
use symkeys_build::build_tree;
use symkeys_types::{GroupEntry, RawNode};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(nodes) = serde_json::from_slice::<Vec<RawNode>>(data) else {
        return;
    };

    let first = build_tree(&nodes);
    let second = build_tree(&nodes);
    assert_eq!(first, second, "building is deterministic");

    for (key, category) in &first.categories {
        assert_eq!(key, &category.key);
        assert!(!category.name.is_empty());
        assert!(!category.source_identifier.is_empty());
        for (k, s) in &category.shortcuts {
            assert_eq!(k, &s.key);
            assert!(!s.name.is_empty());
        }
        for (k, g) in &category.subgroups {
            assert_eq!(k, &g.key);
            assert!(!g.shortcuts.is_empty(), "empty groups are never emitted");
            for (inner_key, entry) in &g.shortcuts {
                assert_eq!(inner_key, entry.key());
                if let GroupEntry::Group(inner) = entry {
                    assert!(!inner.shortcuts.is_empty());
                }
            }
        }
    }
});
