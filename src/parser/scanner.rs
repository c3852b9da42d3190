//! Numeric span scanning
//!
//! Finds where a signed decimal token ends. Works on bytes: every accepted
//! character is ASCII, so a returned offset is always a char boundary when
//! `start` is.

/// Return the offset one past the longest `[+-]?digits[.digits]` token at `start`
///
/// Returns `start` when no number begins there, including when `start` is
/// at or past the end of `text`. A lone sign or dot still counts as a
/// one-character span; converting it is the caller's problem.
pub fn numeric_span_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = start;

    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    end = skip_digits(bytes, end);

    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(bytes, end + 1);
    }

    end
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}
