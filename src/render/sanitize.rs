//! Markup escaping
//!
//! Makes untrusted text safe to place inside HTML element content and
//! attribute values.

/// Escapes `& < > " '` as character references.
///
/// Single left-to-right scan, so references produced here are never escaped
/// again within the same call. Feeding the output back in escapes its `&`
/// a second time.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
