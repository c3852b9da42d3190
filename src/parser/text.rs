//! Text payload extraction
//!
//! Text-only commands (e.g. M117 display messages) carry a free string.
//! It is taken from the raw line, since cleaning drops its spaces.

/// Extract the payload following `command_name` in the raw `line`
///
/// The command name is matched as a subsequence of the line. One space
/// after it is skipped, and the payload runs up to `;`, `\r`, `\n` or the
/// end of the line. Returns an empty string when the name is never matched.
pub fn extract_text(command_name: &str, line: &str) -> String {
    let Some(name_end) = command_end(command_name, line) else {
        return String::new();
    };

    let rest = &line[name_end..];
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let end = rest.find([';', '\r', '\n']).unwrap_or(rest.len());

    rest[..end].to_string()
}

/// Byte offset just past the last character of `command_name` in `line`
fn command_end(command_name: &str, line: &str) -> Option<usize> {
    let mut wanted = command_name.chars().peekable();
    wanted.peek()?;

    for (idx, ch) in line.char_indices() {
        if wanted.peek() == Some(&ch) {
            wanted.next();
            if wanted.peek().is_none() {
                return Some(idx + ch.len_utf8());
            }
        }
    }

    None
}
