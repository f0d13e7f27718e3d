//! Escaping for text embedded in generated source.

/// Escape text for a single-quoted `@:native('...')` literal.
///
/// Single-quoted strings interpolate `$`, so it is doubled.
///
/// # Examples
/// ```
/// use jextern_emit::escape::native_literal;
/// assert_eq!(native_literal("com.example.A$B"), "com.example.A$$B");
/// assert_eq!(native_literal("it's"), "it\\'s");
/// ```
pub fn native_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("$$"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep documentation text from closing its comment early.
pub fn doc_text(text: &str) -> String {
    text.replace("*/", "*\\/")
}
