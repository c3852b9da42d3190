//! Flavor Schema Types
//!
//! A flavor is the vocabulary a parser works with: which letters start a
//! command, which commands are decomposed into parameters, and which of
//! those carry free text instead.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::FlavorError;

static COMMAND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]*$").expect("valid command name regex"));

static BUILTIN_FLAVOR: LazyLock<Flavor> = LazyLock::new(|| {
    let content = include_str!("../../resources/flavors/octolapse.gcode-flavor.toml");
    Flavor::from_toml(content).unwrap_or_else(|e| {
        log::warn!(
            "Failed to parse embedded flavor: {}. Using minimal fallback.",
            e
        );
        Flavor::minimal()
    })
});

/// Root flavor file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlavorFile {
    pub flavor: FlavorMeta,
    #[serde(default)]
    pub commands: Vec<CommandDef>,
}

/// Flavor metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlavorMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_command_letters")]
    pub command_letters: Vec<char>,
}

fn default_command_letters() -> Vec<char> {
    vec!['G', 'M', 'T']
}

/// A command the flavor can decompose
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommandDef {
    pub name: String,
    pub description_short: Option<String>,
    /// Body is a single free-text payload rather than key/value pairs
    #[serde(default)]
    pub text_only: bool,
}

impl CommandDef {
    pub fn parsable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description_short: None,
            text_only: false,
        }
    }

    pub fn text_only(name: &str) -> Self {
        Self {
            text_only: true,
            ..Self::parsable(name)
        }
    }
}

/// Runtime flavor (optimized for lookups)
///
/// Immutable once built, so one flavor can back any number of parsers
/// on any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Flavor {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    command_letters: HashSet<char>,
    commands: HashMap<String, CommandDef>,
    text_only_commands: HashSet<String>,
}

impl Flavor {
    /// Build a flavor, validating every command against the command letters
    pub fn new(
        name: &str,
        command_letters: impl IntoIterator<Item = char>,
        commands: impl IntoIterator<Item = CommandDef>,
    ) -> Result<Self, FlavorError> {
        Self::try_from(FlavorFile {
            flavor: FlavorMeta {
                name: name.to_string(),
                version: None,
                description: None,
                command_letters: command_letters.into_iter().collect(),
            },
            commands: commands.into_iter().collect(),
        })
    }

    /// Parse and validate a flavor from TOML text
    pub fn from_toml(content: &str) -> Result<Self, FlavorError> {
        let file: FlavorFile = toml::from_str(content)?;
        Self::try_from(file)
    }

    /// The flavor embedded in the binary
    pub fn builtin() -> Self {
        BUILTIN_FLAVOR.clone()
    }

    /// Fallback with just the movement and tool-change commands
    fn minimal() -> Self {
        let commands: HashMap<String, CommandDef> = ["G0", "G1", "T"]
            .into_iter()
            .map(|name| (name.to_string(), CommandDef::parsable(name)))
            .collect();

        Self {
            name: crate::flavor::DEFAULT_FLAVOR.to_string(),
            version: Some("minimal-fallback".to_string()),
            description: Some("Minimal fallback flavor".to_string()),
            command_letters: default_command_letters().into_iter().collect(),
            commands,
            text_only_commands: HashSet::new(),
        }
    }

    pub fn is_command_letter(&self, letter: char) -> bool {
        self.command_letters.contains(&letter)
    }

    pub fn command_letters(&self) -> &HashSet<char> {
        &self.command_letters
    }

    /// Whether the command's body is decomposed at all
    pub fn is_parsable(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Whether the command's body is a single text payload
    pub fn is_text_only(&self, name: &str) -> bool {
        self.text_only_commands.contains(name)
    }

    pub fn get_command(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(name)
    }

    /// Parsable command names, in no particular order
    pub fn parsable_commands(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }
}

impl TryFrom<FlavorFile> for Flavor {
    type Error = FlavorError;

    fn try_from(file: FlavorFile) -> Result<Self, Self::Error> {
        let flavor_name = file.flavor.name;

        let mut command_letters = HashSet::new();
        for letter in file.flavor.command_letters {
            if !letter.is_ascii_uppercase() {
                return Err(FlavorError::InvalidCommandLetter {
                    flavor: flavor_name,
                    letter: letter.to_string(),
                });
            }
            command_letters.insert(letter);
        }

        let mut commands = HashMap::new();
        let mut text_only_commands = HashSet::new();
        for cmd in file.commands {
            if !COMMAND_NAME_RE.is_match(&cmd.name) {
                return Err(FlavorError::InvalidCommandName {
                    flavor: flavor_name,
                    name: cmd.name,
                });
            }

            let starts_with_letter = cmd
                .name
                .chars()
                .next()
                .is_some_and(|letter| command_letters.contains(&letter));
            if !starts_with_letter {
                return Err(FlavorError::UnknownCommandLetter {
                    flavor: flavor_name,
                    name: cmd.name,
                });
            }

            if commands.contains_key(&cmd.name) {
                return Err(FlavorError::DuplicateCommand {
                    flavor: flavor_name,
                    name: cmd.name,
                });
            }

            if cmd.text_only {
                text_only_commands.insert(cmd.name.clone());
            }
            commands.insert(cmd.name.clone(), cmd);
        }

        Ok(Self {
            name: flavor_name,
            version: file.flavor.version,
            description: file.flavor.description,
            command_letters,
            commands,
            text_only_commands,
        })
    }
}
