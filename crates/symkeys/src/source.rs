//! Vendor table loading.
//!
//! The table is a property list whose root is an array of dictionaries.
//! Attributes of the wrong type are read as absent and non-dictionary
//! elements are skipped, so the builder only ever sees typed `RawNode`s.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, bail};
use plist::{Dictionary, Value};
use symkeys_types::RawNode;

const ATTR_NAME: &str = "name";
const ATTR_NODE_CLASS: &str = "node_class";
// The vendor spells these with a typo.
const ATTR_HOTKEY: &str = "sybmolichotkey";
const ATTR_SLOW_HOTKEY: &str = "slow_sybmolichotkey";
const ATTR_IDENTIFIER: &str = "identifier";
const ATTR_KEY: &str = "key";
const ATTR_MODIFIER: &str = "modifier";
const ATTR_CHAR_KEY: &str = "charKey";
const ATTR_ENABLED: &str = "enabled";
const ATTR_DYNAMIC: &str = "dynamic";
const ATTR_ELEMENTS: &str = "elements";

/// Load the top-level nodes of a vendor table on disk.
pub(crate) fn load_table(path: &Path) -> Result<Vec<RawNode>> {
    if !path.exists() {
        bail!("input not found: shortcut table {}", path.display());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_table(&bytes).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse a vendor table from memory (XML or binary property list).
pub(crate) fn parse_table(bytes: &[u8]) -> Result<Vec<RawNode>> {
    let value = Value::from_reader(Cursor::new(bytes)).context("invalid property list")?;
    let Value::Array(items) = value else {
        bail!("expected an array at the top level of the shortcut table");
    };
    Ok(nodes_from(&items))
}

fn nodes_from(items: &[Value]) -> Vec<RawNode> {
    items
        .iter()
        .filter_map(Value::as_dictionary)
        .map(node_from)
        .collect()
}

fn node_from(dict: &Dictionary) -> RawNode {
    RawNode {
        name: string(dict, ATTR_NAME),
        node_class: string(dict, ATTR_NODE_CLASS),
        hotkey_id: integer(dict, ATTR_HOTKEY),
        slow_hotkey_id: integer(dict, ATTR_SLOW_HOTKEY),
        identifier: string(dict, ATTR_IDENTIFIER),
        key: scalar_text(dict, ATTR_KEY),
        modifier: integer(dict, ATTR_MODIFIER),
        char_key: scalar_text(dict, ATTR_CHAR_KEY),
        enabled: dict.get(ATTR_ENABLED).and_then(Value::as_boolean),
        dynamic: dict.get(ATTR_DYNAMIC).and_then(Value::as_boolean),
        children: dict
            .get(ATTR_ELEMENTS)
            .and_then(Value::as_array)
            .map(|items| nodes_from(items)),
    }
}

fn string(dict: &Dictionary, attr: &str) -> Option<String> {
    dict.get(attr).and_then(Value::as_string).map(str::to_string)
}

fn integer(dict: &Dictionary, attr: &str) -> Option<i64> {
    dict.get(attr).and_then(Value::as_signed_integer)
}

// Key codes show up as strings in some tables and integers in others.
fn scalar_text(dict: &Dictionary, attr: &str) -> Option<String> {
    match dict.get(attr)? {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => i.as_signed().map(|n| n.to_string()),
        _ => None,
    }
}
