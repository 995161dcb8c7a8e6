// String escaping for double-quoted JXA literals
#![allow(dead_code)]

/// Escape text for embedding inside a double-quoted JavaScript string literal.
///
/// `None` and empty input both yield an empty string. Single quotes are left
/// alone; shell quoting happens separately in the executor.
pub fn escape(text: Option<&str>) -> String {
    match text {
        Some(s) => escape_str(s),
        None => String::new(),
    }
}

/// Escape a present string. Backslash must go first so the escapes inserted
/// afterwards are not doubled.
pub fn escape_str(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
