//! DOT format utilities for graph visualization.
//!
//! Helpers for emitting vertex names into Graphviz DOT output.

/// Escapes a string for use inside a quoted DOT identifier.
///
/// Backslashes and quotes are escaped; line breaks become `\n` and `\r` so
/// every vertex stays on one line. Distinct names never collide.
///
/// # Examples
///
/// ```rust,ignore
/// use depcycle::utils::dot::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns `true` if `s` can appear unquoted as a DOT identifier.
///
/// Accepts the ID forms Graphviz allows bare: an alphabetic/underscore
/// identifier, or a numeral. Keywords are excluded since `node`, `edge` and
/// friends would be parsed as statements.
#[must_use]
pub fn is_plain_id(s: &str) -> bool {
    const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(s)) {
        return false;
    }

    if first.is_ascii_alphabetic() || first == '_' {
        return chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    }

    // Numeral: [-]?(.[0-9]+ | [0-9]+(.[0-9]*)?)
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut dots = 0;
    let mut has_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' => dots += 1,
            _ => return false,
        }
    }
    has_digit && dots <= 1
}

/// Formats a vertex name as a DOT identifier.
///
/// Plain identifiers are emitted verbatim; anything else is quoted and escaped.
#[must_use]
pub fn dot_id(s: &str) -> String {
    if is_plain_id(s) {
        s.to_string()
    } else {
        format!("\"{}\"", escape_dot(s))
    }
}
