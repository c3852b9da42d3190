//! Error types
//!
//! Parsing a line never fails. The only parse error is a caller that
//! supplied no line at all. Flavor errors cover invalid vocabularies.

use thiserror::Error;

/// Usage errors from the parsing entry point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The entry point was called without a line to parse
    #[error("parsing requires at least one parameter: the gcode string")]
    MissingInput,
}

/// Errors raised while building or selecting a flavor
#[derive(Error, Debug)]
pub enum FlavorError {
    /// Command name is not a letter followed by digits
    #[error("invalid command name '{name}' in flavor '{flavor}'")]
    InvalidCommandName {
        /// The flavor being built.
        flavor: String,
        /// The offending command name.
        name: String,
    },

    /// Command starts with a letter the flavor does not accept
    #[error("command '{name}' in flavor '{flavor}' does not start with a configured command letter")]
    UnknownCommandLetter {
        /// The flavor being built.
        flavor: String,
        /// The offending command name.
        name: String,
    },

    /// Command letter is not a single upper-case ASCII letter
    #[error("invalid command letter '{letter}' in flavor '{flavor}'")]
    InvalidCommandLetter {
        /// The flavor being built.
        flavor: String,
        /// The offending letter entry.
        letter: String,
    },

    /// The same command is listed twice
    #[error("command '{name}' is defined more than once in flavor '{flavor}'")]
    DuplicateCommand {
        /// The flavor being built.
        flavor: String,
        /// The repeated command name.
        name: String,
    },

    /// No flavor with this name is registered
    #[error("unknown flavor '{0}'")]
    UnknownFlavor(String),

    /// Flavor file is not valid TOML for the flavor schema
    #[error("failed to parse flavor TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
