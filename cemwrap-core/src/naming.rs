//! Identifier derivation for generated wrapper code.

/// Returned by [`to_safe_identifier`] when nothing usable survives filtering.
pub const FALLBACK_IDENTIFIER: &str = "event";

/// Convert a dash- or space-separated name to TitleCase
/// (e.g., "my-button" -> "MyButton").
///
/// ASCII-range casing is sufficient here: tag names come from HTML, which
/// restricts them to lowercase ASCII in practice.
pub fn to_title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => std::iter::once(c.to_ascii_uppercase())
                    .chain(chars)
                    .collect(),
            }
        })
        .collect()
}

/// Derive a valid bare identifier from arbitrary text, camel-casing dash
/// separators (e.g., "item-selected" -> "itemSelected").
///
/// Any other character outside `[A-Za-z0-9_]` is deleted, not treated as a
/// separator: "item.updated" becomes "itemupdated". This mirrors how event
/// names have always been derived, so aliases stay stable across releases.
pub fn to_safe_identifier(value: &str) -> String {
    let mut camel = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_alphanumeric) {
                camel.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        camel.push(c);
    }

    let mut identifier: String = camel
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if identifier.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if !identifier.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        identifier.insert(0, '_');
    }
    identifier
}
