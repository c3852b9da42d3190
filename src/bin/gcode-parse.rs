use anyhow::Result;
use gcode_line_parser::cli::run;

fn main() -> Result<()> {
    run()
}
