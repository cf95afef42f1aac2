//! Node classification.

use std::fmt;

use symkeys_types::RawNode;

/// Where a node sits in the raw tree.
///
/// Category children and group children follow slightly different rules:
/// at category level anything with a child list and no hotkey id is handed
/// to group parsing before its name or node class is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    CategoryChild,
    GroupChild,
}

/// Why a node was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    MissingName,
    MissingIdentifier,
    DisplayOnly,
    NoHotkey,
    EmptyContainer,
    EmptyKey,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiscardReason::MissingName => "missing name",
            DiscardReason::MissingIdentifier => "missing identifier",
            DiscardReason::DisplayOnly => "display-only node",
            DiscardReason::NoHotkey => "no hotkey id and no children",
            DiscardReason::EmptyContainer => "container without usable children",
            DiscardReason::EmptyKey => "display name yields an empty key",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Shortcut,
    Container,
    Discard(DiscardReason),
}

/// Classify a raw node at the given position.
///
/// A hotkey id always wins over children, so a node carrying both is a
/// shortcut and its children are ignored.
#[must_use]
pub fn classify(node: &RawNode, position: Position) -> NodeKind {
    if position == Position::CategoryChild && node.children.is_some() && node.hotkey_id.is_none()
    {
        return NodeKind::Container;
    }

    if node.non_empty_name().is_none() {
        return NodeKind::Discard(DiscardReason::MissingName);
    }
    if node.is_display_only() {
        return NodeKind::Discard(DiscardReason::DisplayOnly);
    }
    if node.hotkey_id.is_some() {
        return NodeKind::Shortcut;
    }
    if !node.child_nodes().is_empty() {
        return NodeKind::Container;
    }
    NodeKind::Discard(DiscardReason::NoHotkey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> RawNode {
        RawNode {
            name: Some(name.to_string()),
            ..RawNode::default()
        }
    }

    #[test]
    fn hotkey_id_makes_a_shortcut() {
        let mut n = node("Show Desktop");
        n.hotkey_id = Some(36);
        assert_eq!(classify(&n, Position::GroupChild), NodeKind::Shortcut);
        assert_eq!(classify(&n, Position::CategoryChild), NodeKind::Shortcut);
    }

    #[test]
    fn hotkey_id_wins_over_children() {
        let mut n = node("Move left a space");
        n.hotkey_id = Some(79);
        n.children = Some(vec![node("child")]);
        assert_eq!(classify(&n, Position::GroupChild), NodeKind::Shortcut);
        assert_eq!(classify(&n, Position::CategoryChild), NodeKind::Shortcut);
    }

    #[test]
    fn children_without_hotkey_make_a_container() {
        let mut n = node("Windows");
        n.children = Some(vec![node("child")]);
        assert_eq!(classify(&n, Position::GroupChild), NodeKind::Container);
        assert_eq!(classify(&n, Position::CategoryChild), NodeKind::Container);
    }

    #[test]
    fn empty_child_list_is_a_container_only_at_category_level() {
        let mut n = node("Windows");
        n.children = Some(vec![]);
        assert_eq!(classify(&n, Position::CategoryChild), NodeKind::Container);
        assert_eq!(
            classify(&n, Position::GroupChild),
            NodeKind::Discard(DiscardReason::NoHotkey)
        );
    }

    #[test]
    fn missing_or_empty_name_is_discarded() {
        let mut n = RawNode {
            hotkey_id: Some(1),
            ..RawNode::default()
        };
        assert_eq!(
            classify(&n, Position::GroupChild),
            NodeKind::Discard(DiscardReason::MissingName)
        );
        n.name = Some(String::new());
        assert_eq!(
            classify(&n, Position::CategoryChild),
            NodeKind::Discard(DiscardReason::MissingName)
        );
    }

    #[test]
    fn display_only_is_discarded_even_with_hotkey() {
        let mut n = node("Label");
        n.hotkey_id = Some(5);
        n.node_class = Some("DisplayOnlyNode".into());
        assert_eq!(
            classify(&n, Position::GroupChild),
            NodeKind::Discard(DiscardReason::DisplayOnly)
        );
    }

    #[test]
    fn display_only_container_at_category_level_goes_to_group_parsing() {
        let mut n = node("Label");
        n.node_class = Some("DisplayOnlyNode".into());
        n.children = Some(vec![node("child")]);
        assert_eq!(classify(&n, Position::CategoryChild), NodeKind::Container);
        assert_eq!(
            classify(&n, Position::GroupChild),
            NodeKind::Discard(DiscardReason::DisplayOnly)
        );
    }

    #[test]
    fn bare_leaf_without_hotkey_is_discarded() {
        assert_eq!(
            classify(&node("Nothing"), Position::CategoryChild),
            NodeKind::Discard(DiscardReason::NoHotkey)
        );
    }
}
