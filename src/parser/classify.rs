//! Command classification
//!
//! Decides whether a cleaned line starts with a command word and where the
//! command's body begins.

use std::collections::HashSet;

use crate::parser::scanner::numeric_span_end;

/// The tool-change command, whose digits are its operand rather than part of its name
pub const TOOL_CHANGE: &str = "T";

const TOOL_CHANGE_LETTER: char = 'T';

/// Command word found at the start of a cleaned line
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Command name, e.g. "G1", "M117" or "T"
    pub name: String,
    /// Offset in the cleaned line just past the command name
    pub body_start: usize,
}

impl Classification {
    pub fn is_tool_change(&self) -> bool {
        self.name == TOOL_CHANGE
    }

    /// Offset the parameter walk starts from
    ///
    /// The tool-change command is decomposed from the very start of the line
    /// so its own letter becomes the key of its integer operand.
    pub fn parameter_start(&self) -> usize {
        if self.is_tool_change() {
            0
        } else {
            self.body_start
        }
    }
}

/// Classify a cleaned line, or return `None` if it is not G-code
pub fn classify(cleaned: &str, command_letters: &HashSet<char>) -> Option<Classification> {
    let first = cleaned.chars().next()?;
    if !command_letters.contains(&first) {
        return None;
    }

    let letter_end = first.len_utf8();
    if first == TOOL_CHANGE_LETTER {
        return Some(Classification {
            name: TOOL_CHANGE.to_string(),
            body_start: letter_end,
        });
    }

    let body_start = numeric_span_end(cleaned, letter_end);
    Some(Classification {
        name: cleaned[..body_start].to_string(),
        body_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> HashSet<char> {
        ['G', 'M', 'T'].into_iter().collect()
    }

    #[test]
    fn test_classify_move() {
        let class = classify("G1X10", &letters()).unwrap();
        assert_eq!(class.name, "G1");
        assert_eq!(class.body_start, 2);
        assert_eq!(class.parameter_start(), 2);
    }

    #[test]
    fn test_classify_multi_digit() {
        let class = classify("M117Hello", &letters()).unwrap();
        assert_eq!(class.name, "M117");
        assert_eq!(class.body_start, 4);
    }

    #[test]
    fn test_classify_bare_letter() {
        let class = classify("G", &letters()).unwrap();
        assert_eq!(class.name, "G");
        assert_eq!(class.body_start, 1);
    }

    #[test]
    fn test_classify_tool_change_keeps_digits_out_of_name() {
        let class = classify("T12", &letters()).unwrap();
        assert_eq!(class.name, "T");
        assert_eq!(class.body_start, 1);
        assert!(class.is_tool_change());
        assert_eq!(class.parameter_start(), 0);
    }

    #[test]
    fn test_classify_rejects_non_command() {
        assert!(classify("", &letters()).is_none());
        assert!(classify("X10", &letters()).is_none());
        assert!(classify("g1", &letters()).is_none());
        assert!(classify("N10G1", &letters()).is_none());
    }
}
