use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("input not found") {
        if haystack.contains("shortcut document") {
            push_hint(
                &mut out,
                "Run `symkeys build` first to generate the shortcut document.",
            );
        } else {
            push_hint(
                &mut out,
                &format!(
                    "Copy the table from {} into the data directory.",
                    symkeys_config::SYSTEM_TABLE_PATH
                ),
            );
        }
        push_hint(
            &mut out,
            "Pass `--input <path>` or set `input` in `symkeys.toml` to use another location.",
        );
    }

    if haystack.contains("expected an array") || haystack.contains("invalid property list") {
        push_hint(
            &mut out,
            "Make sure the input is the unmodified DefaultShortcutsTable.xml from macOS.",
        );
    }

    if haystack.contains("failed to parse configuration") {
        push_hint(
            &mut out,
            "Check `symkeys.toml` syntax and key names; valid sections are [build] and [render].",
        );
    }

    if haystack.contains("invalid shortcut document") {
        push_hint(
            &mut out,
            "Regenerate the document with `symkeys build`; it may be from an older version.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
