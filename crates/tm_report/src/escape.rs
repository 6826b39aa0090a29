//! Markup escaping for service-supplied free text.

/// Escape text for HTML (minimal, deterministic). Everything that reaches a
/// fragment from a free-text field goes through here; numeric and enum
/// fields are service-controlled and may be interpolated directly.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
