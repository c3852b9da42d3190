//! GCode Parser
//!
//! Turns one line of G-code into a command name and typed parameters.
//! Parsing never fails: malformed input degrades to `NotGcode`, text
//! values or absent values.

pub mod ast;
pub mod classify;
pub mod params;
pub mod scanner;
pub mod strip;
pub mod text;

pub use ast::{CommandBody, ParameterSet, ParameterValue, ParseResult, TEXT_KEY};
pub use classify::{classify, Classification, TOOL_CHANGE};
pub use params::decompose;
pub use scanner::numeric_span_end;
pub use strip::strip_line;
pub use text::extract_text;

use crate::error::ParseError;
use crate::flavor::Flavor;

/// Line parser bound to one flavor
///
/// Holds no mutable state, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct GcodeParser {
    flavor: Flavor,
}

impl Default for GcodeParser {
    fn default() -> Self {
        Self::new(Flavor::builtin())
    }
}

impl GcodeParser {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> &Flavor {
        &self.flavor
    }

    /// Parse a single line of GCode into structured data
    pub fn parse(&self, line: &str) -> ParseResult {
        let cleaned = strip_line(line);

        let Some(class) = classify(&cleaned, self.flavor.command_letters()) else {
            return ParseResult::NotGcode;
        };

        if !self.flavor.is_parsable(&class.name) {
            log::trace!("'{}' is not a parsable command", class.name);
            return ParseResult::Unparsed(class.name);
        }

        if class.body_start == cleaned.len() {
            return ParseResult::Parsed(class.name, None);
        }

        let body = if self.flavor.is_text_only(&class.name) {
            CommandBody::Text(extract_text(&class.name, line))
        } else {
            CommandBody::Parameters(decompose(&cleaned, class.parameter_start()))
        };

        ParseResult::Parsed(class.name, Some(body))
    }

    /// Entry point for hosts that may call without a line
    pub fn parse_input(&self, line: Option<&str>) -> Result<ParseResult, ParseError> {
        line.map(|line| self.parse(line))
            .ok_or(ParseError::MissingInput)
    }
}

/// Parse a line with the built-in flavor
///
/// Builds a parser per call; keep a `GcodeParser` around for bulk parsing.
pub fn parse_line(line: &str) -> ParseResult {
    GcodeParser::default().parse(line)
}
