//! Parsed G-code data types
//!
//! Plain values produced fresh for every line. Nothing in here parses;
//! the scanner, classifier and decomposer build these.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

/// Key under which a text-only command's payload is rendered
pub const TEXT_KEY: &str = "TEXT";

/// A typed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Decimal value, the default for every parameter
    Float(f64),
    /// Whole number, only produced for the tool-change operand
    Integer(i64),
    /// Raw value text that failed numeric conversion
    Text(String),
    /// The parameter letter had no value after it
    Absent,
}

impl ParameterValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(value) => Some(*value),
            ParameterValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParameterValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ParameterValue::Absent)
    }
}

/// Non-finite floats render as text ("inf", "-inf", "NaN") so they stay
/// distinguishable from an absent value.
impl Serialize for ParameterValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParameterValue::Float(value) if !value.is_finite() => {
                serializer.serialize_str(&value.to_string())
            }
            ParameterValue::Float(value) => serializer.serialize_f64(*value),
            ParameterValue::Integer(value) => serializer.serialize_i64(*value),
            ParameterValue::Text(text) => serializer.serialize_str(text),
            ParameterValue::Absent => serializer.serialize_none(),
        }
    }
}

/// Parameters of one command, keyed by their letter
///
/// A letter that appears twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<char, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value, replacing any earlier value for the same key
    pub fn insert(&mut self, key: char, value: ParameterValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: char) -> Option<&ParameterValue> {
        self.values.get(&key)
    }

    pub fn contains_key(&self, key: char) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &ParameterValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

impl FromIterator<(char, ParameterValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (char, ParameterValue)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl Serialize for ParameterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

/// Body of a parsable command that had something after its name
#[derive(Debug, Clone, PartialEq)]
pub enum CommandBody {
    /// Letter-prefixed values
    Parameters(ParameterSet),
    /// Free text payload of a text-only command
    Text(String),
}

/// Outcome of parsing one line
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Blank after cleaning, or not starting with a command letter
    NotGcode,
    /// A syntactically valid command the flavor does not know how to decompose.
    /// Its parameters are unknown, which is not the same as having none.
    Unparsed(String),
    /// A known command, with `None` when nothing followed the name
    Parsed(String, Option<CommandBody>),
}

impl ParseResult {
    /// Command name, if the line was G-code at all
    pub fn command_name(&self) -> Option<&str> {
        match self {
            ParseResult::NotGcode => None,
            ParseResult::Unparsed(name) | ParseResult::Parsed(name, _) => Some(name),
        }
    }

    pub fn is_gcode(&self) -> bool {
        !matches!(self, ParseResult::NotGcode)
    }

    pub fn parameters(&self) -> Option<&ParameterSet> {
        match self {
            ParseResult::Parsed(_, Some(CommandBody::Parameters(params))) => Some(params),
            _ => None,
        }
    }

    pub fn parameter(&self, key: char) -> Option<&ParameterValue> {
        self.parameters()?.get(key)
    }

    /// Payload of a text-only command
    pub fn text(&self) -> Option<&str> {
        match self {
            ParseResult::Parsed(_, Some(CommandBody::Text(text))) => Some(text),
            _ => None,
        }
    }
}

/// Single-entry map used to render a text payload
struct TextPayload<'a>(&'a str);

impl Serialize for TextPayload<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(TEXT_KEY, self.0)?;
        map.end()
    }
}

/// Marker map for commands whose parameters were not decomposed
struct ParametersUnavailable;

impl Serialize for ParametersUnavailable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("parameters", &false)?;
        map.end()
    }
}

/// Renders as `false`, or as a `[name, body]` pair
impl Serialize for ParseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParseResult::NotGcode => serializer.serialize_bool(false),
            ParseResult::Unparsed(name) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(name)?;
                pair.serialize_element(&ParametersUnavailable)?;
                pair.end()
            }
            ParseResult::Parsed(name, body) => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(name)?;
                match body {
                    None => pair.serialize_element(&Option::<()>::None)?,
                    Some(CommandBody::Parameters(params)) => pair.serialize_element(params)?,
                    Some(CommandBody::Text(text)) => {
                        pair.serialize_element(&TextPayload(text))?
                    }
                }
                pair.end()
            }
        }
    }
}
