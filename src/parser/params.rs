//! Parameter decomposition
//!
//! Walks a command body as a run of `<key><value>` tokens, e.g. `X10Y-2.5E`.
//! Each value is typed as precisely as its text allows and never fails:
//! text that does not convert is kept verbatim, and a key with no value
//! text is recorded as absent.

use crate::parser::ast::{ParameterSet, ParameterValue};
use crate::parser::scanner::numeric_span_end;

/// Split `body` from `start` into typed parameters
///
/// Only a `T` at offset 0 is treated as a tool-change operand and parsed as
/// an integer. Every other value, including a `T` key inside another
/// command, is parsed as a float.
pub fn decompose(body: &str, start: usize) -> ParameterSet {
    let mut params = ParameterSet::new();
    let mut offset = start;

    while let Some(key) = body.get(offset..).and_then(|rest| rest.chars().next()) {
        let value_start = offset + key.len_utf8();
        let tool_change = offset == 0 && key == 'T';

        let value_end = if tool_change {
            tool_change_operand_end(body, value_start)
        } else {
            numeric_span_end(body, value_start)
        };

        let value = if value_end == value_start {
            ParameterValue::Absent
        } else {
            convert_value(&body[value_start..value_end], tool_change)
        };
        params.insert(key, value);

        offset = value_end;
    }

    params
}

/// The operand is the numeric span after `T`, or the single next character
/// when no number follows, so a malformed operand still surfaces as text.
fn tool_change_operand_end(body: &str, value_start: usize) -> usize {
    let end = numeric_span_end(body, value_start);
    if end > value_start {
        return end;
    }
    body[value_start..]
        .chars()
        .next()
        .map_or(value_start, |ch| value_start + ch.len_utf8())
}

/// Integer for tool changes, float otherwise, text when conversion fails
///
/// A tool operand too large for `i64` fails conversion and is kept as text.
/// Float operands too large for `f64` become infinite.
fn convert_value(text: &str, tool_change: bool) -> ParameterValue {
    let converted = if tool_change {
        text.parse::<i64>().ok().map(ParameterValue::Integer)
    } else {
        text.parse::<f64>().ok().map(ParameterValue::Float)
    };
    converted.unwrap_or_else(|| ParameterValue::Text(text.to_string()))
}
