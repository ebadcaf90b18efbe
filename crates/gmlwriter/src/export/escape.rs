//! Escaping of label text for GML quoted strings.

/// Wrap `text` in double quotes, replacing `"` with `&quot;` and `&` with `&amp;`.
///
/// Every other character passes through unchanged. Feeding an already escaped
/// string escapes it again.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("&quot;"),
            '&' => quoted.push_str("&amp;"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
