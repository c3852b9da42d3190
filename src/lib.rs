//! GCode Line Parser
//!
//! Fast parsing of single G-code lines into a command name and typed
//! parameters, as needed to follow a 3D print (moves, tool changes,
//! display messages) without interpreting it.
//!
//! This library provides:
//! - Line cleaning, command classification and parameter typing
//! - Flavor-based command vocabularies
//! - JSON rendering of parse results
//! - The `gcode-parse` command-line front end

pub mod cli;
pub mod config;
pub mod error;
pub mod flavor;
pub mod parser;

// Re-exports for clean public API
pub use config::Config;
pub use error::{FlavorError, ParseError};
pub use flavor::{Flavor, FlavorRegistry};
pub use parser::{parse_line, GcodeParser, ParameterSet, ParameterValue, ParseResult};
