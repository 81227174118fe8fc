//! HTML Escaping
//!
//! Leptos escapes text nodes on its own. These helpers are for the few places
//! that insert markup through `inner_html`.

/// Escape `& < > " '` so user text can never become markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Escaped multi-line text with newlines kept as `<br>`
pub fn multiline_html(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}
