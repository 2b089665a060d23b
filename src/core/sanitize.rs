// src/core/sanitize.rs
//
// Free-text cleanup for posting fields (names, descriptions, skills).

/// Max visible characters of a long text cell before it is cut.
pub const LINE_LIMIT: usize = 100;

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() { out.push(' '); }
        out.push_str(word);
    }
    out
}

/// Remove `<...>` tags (at least one char between the brackets).
/// A `<` with no closing `>` is kept as text.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Tags removed, whitespace collapsed.
pub fn clean_html(s: &str) -> String {
    normalize_ws(&strip_tags(s))
}

/// Cut to `LINE_LIMIT` characters, marking the cut with "...".
pub fn line_trim(s: &str) -> String {
    match s.char_indices().nth(LINE_LIMIT) {
        Some((byte_ix, _)) => join!(&s[..byte_ix], "..."),
        None => s!(s),
    }
}
