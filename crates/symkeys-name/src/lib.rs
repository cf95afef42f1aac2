//! Single-responsibility name normalization for deterministic keys.
//!
//! Vendor display names look like `"DO_NOT_LOCALIZE: Turn Do Not Disturb
//! On/Off"`. Two pure transforms live here:
//!
//! - [`clean_display_name`] strips the localization marker and nothing else.
//! - [`synthesize_key`] derives a lowerCamelCase ASCII identifier such as
//!   `turnDoNotDisturbOnOff`.
//!
//! Neither function can fail. `synthesize_key` is not injective: names that
//! differ only in punctuation or in a stripped suffix map to the same key,
//! and callers that store keys in a mapping must handle that themselves.

/// Marker the vendor prefixes to strings that must not be translated.
pub const DO_NOT_LOCALIZE_PREFIX: &str = "DO_NOT_LOCALIZE:";

/// Annotation suffixes dropped before key synthesis, in the order they are
/// removed.
pub const ANNOTATION_SUFFIXES: [&str; 2] = ["(AX_DESCRIPTION)", "(window management)"];

/// Strip the leading `DO_NOT_LOCALIZE:` marker from a display name.
///
/// Rules:
/// - The marker is case-sensitive and may be followed by any whitespace.
/// - Everything after the marker is returned verbatim.
/// - A repeated marker is stripped again, so the function is idempotent.
#[must_use]
pub fn clean_display_name(raw: &str) -> String {
    let mut s = raw;
    while let Some(rest) = s.strip_prefix(DO_NOT_LOCALIZE_PREFIX) {
        s = rest.trim_start();
    }
    s.to_string()
}

/// Derive a lowerCamelCase key from a display name.
///
/// Rules:
/// - The display name is cleaned with [`clean_display_name`].
/// - A trailing `(AX_DESCRIPTION)` and then a trailing `(window management)`
///   are removed together with the whitespace in front of them.
/// - `/` and `-` separate words like whitespace does.
/// - The first word is lowercased; every later word gets a titlecased first
///   character and keeps the rest of its characters unchanged.
/// - Anything that is not an ASCII letter or digit is dropped.
/// - No words yields an empty key.
#[must_use]
pub fn synthesize_key(raw: &str) -> String {
    let cleaned = clean_display_name(raw);
    let mut s = cleaned.as_str();
    for suffix in ANNOTATION_SUFFIXES {
        s = strip_annotation(s, suffix);
    }

    let spaced: String = s
        .chars()
        .map(|c| if c == '/' || c == '-' { ' ' } else { c })
        .collect();

    let mut words = spaced.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut camel = first.to_lowercase();
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            push_titlecase(&mut camel, head);
            camel.push_str(chars.as_str());
        }
    }

    camel.retain(|c| c.is_ascii_alphanumeric());
    camel
}

// Titlecase of a single char: `ß` becomes `Ss`, not `SS`.
fn push_titlecase(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

fn strip_annotation<'a>(s: &'a str, suffix: &str) -> &'a str {
    match s.strip_suffix(suffix) {
        Some(head) => head.trim_end(),
        None => s,
    }
}
