//! Minimal HTML escaping for labels and attribute values produced by the slices.

/// Escapes text for use inside HTML element content.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#47;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for use inside a quoted HTML attribute value.
///
/// Alphanumerics, space, `-`, `_`, `.` and `,` pass through; everything else becomes a
/// hexadecimal character reference.
#[must_use]
pub fn escape_attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | ',') {
            out.push(c);
        } else {
            out.push_str(&format!("&#x{:x};", u32::from(c)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("Approval"), "Approval");
        assert_eq!(escape("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;&#47;b&gt;");
        assert_eq!(escape("it's \"fine\""), "it&#39;s &#34;fine&#34;");
    }

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(escape_attribute("Single Approver"), "Single Approver");
        assert_eq!(escape_attribute("a\"b"), "a&#x22;b");
        assert_eq!(escape_attribute("x@y"), "x&#x40;y");
    }
}
