//! Line parsing behaviour through the public API, using the built-in flavor
use gcode_line_parser::flavor::{CommandDef, Flavor};
use gcode_line_parser::parser::CommandBody;
use gcode_line_parser::{GcodeParser, ParameterValue, ParseError, ParseResult};
use serde_json::json;

fn parser() -> GcodeParser {
    GcodeParser::default()
}

#[test]
fn test_blank_lines_are_not_gcode() {
    for line in ["", "   ", "\r\n", "; layer 2", "*42", "\t; comment"] {
        assert_eq!(parser().parse(line), ParseResult::NotGcode, "line {:?}", line);
    }
}

#[test]
fn test_non_command_letters_are_not_gcode() {
    for line in ["X10", "N10 G1 X1", "@pause", "1234", "g28"] {
        assert_eq!(parser().parse(line), ParseResult::NotGcode, "line {:?}", line);
    }
}

#[test]
fn test_move_command() {
    let result = parser().parse("G1 X10 Y-2.5");

    let expected: gcode_line_parser::ParameterSet = [
        ('X', ParameterValue::Float(10.0)),
        ('Y', ParameterValue::Float(-2.5)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        result,
        ParseResult::Parsed("G1".to_string(), Some(CommandBody::Parameters(expected)))
    );
}

#[test]
fn test_typical_slicer_output() {
    let result = parser().parse("G1 X123.456 Y789.012 Z0.3 E2.85714 F1500 ; perimeter");
    let params = result.parameters().expect("parameters");

    assert_eq!(params.len(), 5);
    assert_eq!(params.get('E'), Some(&ParameterValue::Float(2.85714)));
    assert_eq!(params.get('F'), Some(&ParameterValue::Float(1500.0)));
}

#[test]
fn test_tool_change() {
    let result = parser().parse("T3");
    assert_eq!(result.command_name(), Some("T"));
    assert_eq!(result.parameter('T'), Some(&ParameterValue::Integer(3)));

    let result = parser().parse("T10 ; second extruder bank");
    assert_eq!(result.parameter('T'), Some(&ParameterValue::Integer(10)));
}

#[test]
fn test_tool_change_invalid_operand_is_text() {
    let result = parser().parse("Tx");
    assert_eq!(
        result.parameter('T'),
        Some(&ParameterValue::Text("x".to_string()))
    );
}

#[test]
fn test_tool_key_in_temperature_command_is_float() {
    let result = parser().parse("M104 S210 T1");

    assert_eq!(result.command_name(), Some("M104"));
    assert_eq!(result.parameter('T'), Some(&ParameterValue::Float(1.0)));
}

#[test]
fn test_home_axes_without_values() {
    let result = parser().parse("G28 X Y");
    let params = result.parameters().expect("parameters");

    assert!(params.get('X').unwrap().is_absent());
    assert!(params.get('Y').unwrap().is_absent());
}

#[test]
fn test_value_letter_without_digits() {
    let result = parser().parse("G1 X");
    assert_eq!(result.parameter('X'), Some(&ParameterValue::Absent));
}

#[test]
fn test_display_message() {
    let result = parser().parse("M117 Hello World");
    assert_eq!(result.command_name(), Some("M117"));
    assert_eq!(result.text(), Some("Hello World"));

    let result = parser().parse("M117 Layer 12/240;progress\n");
    assert_eq!(result.text(), Some("Layer 12/240"));
}

#[test]
fn test_unknown_command_parameters_unavailable() {
    let result = parser().parse("G999");

    assert_eq!(result, ParseResult::Unparsed("G999".to_string()));
    assert_ne!(result, ParseResult::Parsed("G999".to_string(), None));
    assert!(result.parameters().is_none());
}

#[test]
fn test_known_command_without_body() {
    assert_eq!(
        parser().parse("G90"),
        ParseResult::Parsed("G90".to_string(), None)
    );
}

#[test]
fn test_duplicate_key_last_wins() {
    let result = parser().parse("G1 X1 X2");
    let params = result.parameters().expect("parameters");

    assert_eq!(params.len(), 1);
    assert_eq!(params.get('X'), Some(&ParameterValue::Float(2.0)));
}

#[test]
fn test_parse_twice_is_equal() {
    let parser = parser();
    for line in ["G1 X1 Y2", "T0", "M117 hi", "G999", "", "G1 X-"] {
        assert_eq!(parser.parse(line), parser.parse(line));
    }
}

#[test]
fn test_missing_input_is_distinct_from_not_gcode() {
    assert_eq!(parser().parse_input(None), Err(ParseError::MissingInput));
    assert_eq!(parser().parse_input(Some("")), Ok(ParseResult::NotGcode));
}

#[test]
fn test_independent_flavors() {
    let strict = GcodeParser::new(
        Flavor::new("strict", ['G'], [CommandDef::parsable("G1")]).unwrap(),
    );
    let messages = GcodeParser::new(
        Flavor::new("messages", ['M'], [CommandDef::text_only("M118")]).unwrap(),
    );

    assert_eq!(strict.parse("M118 hi"), ParseResult::NotGcode);
    assert_eq!(messages.parse("M118 hi").text(), Some("hi"));
    assert!(parser().parse("M118 hi").parameters().is_some());
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = std::sync::Arc::new(parser());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse(&format!("T{}", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.parameter('T'), Some(&ParameterValue::Integer(i as i64)));
    }
}

#[test]
fn test_json_rendering() {
    let cases = [
        ("G1 X10 Y-2.5", json!(["G1", {"X": 10.0, "Y": -2.5}])),
        ("G28 X", json!(["G28", {"X": null}])),
        ("T3", json!(["T", {"T": 3}])),
        ("M117 Hello", json!(["M117", {"TEXT": "Hello"}])),
        ("G999 X1", json!(["G999", {"parameters": false}])),
        ("G90", json!(["G90", null])),
        ("; nothing", json!(false)),
    ];

    for (line, expected) in cases {
        let value = serde_json::to_value(parser().parse(line)).unwrap();
        assert_eq!(value, expected, "line {:?}", line);
    }
}

#[test]
fn test_overflowing_float_renders_as_text() {
    let line = format!("G1 X{} Y1", "9".repeat(400));
    let result = parser().parse(&line);
    assert_eq!(result.parameter('X'), Some(&ParameterValue::Float(f64::INFINITY)));

    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value, json!(["G1", {"X": "inf", "Y": 1.0}]));
}
