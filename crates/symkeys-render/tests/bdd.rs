use symkeys_build::build_tree;
use symkeys_render::render;
use symkeys_types::{RawNode, RenderFormat, RenderOptions, ShortcutDocument};

fn named(name: &str) -> RawNode {
    RawNode {
        name: Some(name.to_string()),
        ..RawNode::default()
    }
}

fn leaf(name: &str, id: i64) -> RawNode {
    RawNode {
        hotkey_id: Some(id),
        ..named(name)
    }
}

fn sample_document() -> ShortcutDocument {
    let spaces = RawNode {
        children: Some(vec![
            leaf("Move left a space", 79),
            RawNode {
                dynamic: Some(true),
                ..leaf("Switch to Desktop 1", 118)
            },
        ]),
        ..named("Spaces")
    };
    let mission_control = RawNode {
        identifier: Some("com.apple.symbolichotkeys.menu".to_string()),
        children: Some(vec![
            leaf("Mission Control", 32),
            leaf("Application windows", 33),
            spaces,
        ]),
        ..named("Mission Control")
    };
    let spotlight = RawNode {
        identifier: Some("com.apple.spotlight".to_string()),
        children: Some(vec![leaf("Show Spotlight search", 64)]),
        ..named("Spotlight")
    };
    build_tree(&[mission_control, spotlight]).into_document(
        "macOS 15.x (Sequoia)",
        "DefaultShortcutsTable.xml",
        "test",
    )
}

#[test]
fn given_compact_mode_when_ids_hidden_then_lines_match_except_id_annotations() {
    // Given: the same document rendered with and without ids
    let doc = sample_document();
    let with_ids = RenderOptions::default();
    let without_ids = RenderOptions {
        show_ids: false,
        ..RenderOptions::default()
    };

    // When: both are rendered in compact mode
    let a = render(&doc, &with_ids);
    let b = render(&doc, &without_ids);

    // Then: no id annotations remain, and line count and order are identical
    assert!(a.contains(" (ID: 64)"));
    assert!(!b.contains("(ID:"));
    let a_lines: Vec<&str> = a.lines().collect();
    let b_lines: Vec<&str> = b.lines().collect();
    assert_eq!(a_lines.len(), b_lines.len());
    for (with, without) in a_lines.iter().zip(&b_lines) {
        let stripped = match with.find(" (ID: ") {
            Some(start) => {
                let end = with[start..].find(')').map_or(with.len(), |e| start + e + 1);
                format!("{}{}", &with[..start], &with[end..])
            }
            None => (*with).to_string(),
        };
        assert_eq!(&stripped, without);
    }
}

#[test]
fn given_report_mode_when_rendered_then_statistics_match_tree() {
    // Given: a document with one dynamic shortcut
    let doc = sample_document();
    let opts = RenderOptions {
        format: RenderFormat::Report,
        ..RenderOptions::default()
    };

    // When: the report is rendered
    let out = render(&doc, &opts);

    // Then: header, note, and statistics reflect the tree
    assert!(out.starts_with("# darwin.symbolicHotkeys Options Tree\n"));
    assert!(out.contains("Total categories: 2\n"));
    assert!(out.contains("> **Note**"));
    assert!(out.contains("`switchToDesktop1` - Switch to Desktop 1 (ID: 118) `[dynamic]`"));
    assert!(out.ends_with("- Total shortcuts: 5\n- Dynamic shortcuts: 1\n- Categories: 2\n"));
}

#[test]
fn given_both_modes_when_rendered_then_entry_order_is_identical() {
    // Given: one document
    let doc = sample_document();

    // When: rendered in both modes
    let compact = render(&doc, &RenderOptions::default());
    let report = render(
        &doc,
        &RenderOptions {
            format: RenderFormat::Report,
            ..RenderOptions::default()
        },
    );

    // Then: keys appear in the same order in both outputs
    let keys = [
        "missionControl",
        "applicationWindows",
        "spaces",
        "moveLeftASpace",
        "switchToDesktop1",
        "spotlight",
        "showSpotlightSearch",
    ];
    for pair in keys.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        assert!(compact.find(first) < compact.find(second), "{first} before {second}");
        assert!(report.find(first) < report.find(second), "{first} before {second}");
    }
}

#[test]
fn given_custom_root_label_when_rendered_then_label_is_used() {
    let doc = sample_document();
    let opts = RenderOptions {
        root_label: "system.keyboard".to_string(),
        ..RenderOptions::default()
    };

    let out = render(&doc, &opts);

    assert!(out.starts_with("`system.keyboard`\n"));
}
