use gcode_line_parser::GcodeParser;

fn main() {
    println!("=== G-code Line Parser Demo ===");

    let parser = GcodeParser::default();
    let test_lines = [
        "G1 X10 Y20.5 Z0.2 ; linear move",
        "M104 S200 T0 ; set temperature",
        "T1",
        "M117 Printing layer 3",
        "G28 X Y",
        "M851 Z-0.4",
        "; another comment",
        "",
    ];

    for line in test_lines {
        println!("\nInput: '{}'", line);
        let result = parser.parse(line);
        println!("Parsed: {:?}", result);
        match serde_json::to_string(&result) {
            Ok(json) => println!("JSON:   {}", json),
            Err(e) => println!("JSON:   <error: {}>", e),
        }
    }
}
