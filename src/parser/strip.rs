//! Line cleaning
//!
//! Removes everything the classifier should never see: comments,
//! checksums and whitespace.

/// Clean a raw line for classification
///
/// Stops at the first `;` or `*` and drops all whitespace. Case is kept,
/// so only upper-case command letters are recognized later.
pub fn strip_line(line: &str) -> String {
    let mut cleaned = String::with_capacity(line.len());

    for ch in line.chars() {
        match ch {
            ';' | '*' => break,
            c if c.is_whitespace() => continue,
            c => cleaned.push(c),
        }
    }

    cleaned
}
