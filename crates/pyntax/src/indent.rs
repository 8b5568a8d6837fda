//! Auto-indent for newly opened lines.

/// Indent step used when a caller has no configured width.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// The run of spaces and tabs at the start of a line.
pub fn leading_whitespace(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut end = 0usize;
    while end < bytes.len() {
        match bytes[end] {
            b' ' | b'\t' => end += 1,
            _ => break,
        }
    }
    &line[..end]
}

/// Indentation for the line opened below `line`.
///
/// The current indentation is carried over as-is, tabs included. A line that
/// ends with `:` (ignoring trailing whitespace) opens a block, so one extra
/// level of `indent_width` spaces is appended.
pub fn indent_for_next_line(line: &str, indent_width: usize) -> String {
    let mut indent = leading_whitespace(line).to_string();
    if line.trim_end().ends_with(':') {
        indent.push_str(&" ".repeat(indent_width));
    }
    indent
}
