//! `gcode-parse` entry point
//!
//! Parses every input line and prints one JSON rendering per line.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::config::{Config, InputSource};
use crate::error::{FlavorError, ParseError};
use crate::flavor::{DEFAULT_FLAVOR, Flavor, FlavorRegistry};
use crate::parser::GcodeParser;

/// Run the CLI with arguments from the process
pub fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_with_config(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Parse the configured input and write the results to `out`
///
/// Fails with `ParseError::MissingInput` when neither lines nor a file
/// were given.
pub fn run_with_config<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let input = config.input.as_ref().ok_or(ParseError::MissingInput)?;
    let document = read_input(input)?;

    let mut registry = FlavorRegistry::with_builtin();
    for dir in &config.flavor_dirs {
        let count = registry.load_directory(dir)?;
        if count > 0 {
            log::info!("Loaded {} flavors from {}", count, dir.display());
        }
    }

    let flavor = select_flavor(config, &mut registry, &document)?;
    log::debug!("Using flavor '{}'", flavor.name);
    let parser = GcodeParser::new(flavor.clone());

    write_results(&parser, document.lines(), config.pretty, out)
}

/// Collect the input into one document, one G-code line per line
fn read_input(input: &InputSource) -> Result<String> {
    match input {
        InputSource::Lines(lines) => Ok(lines.join("\n")),
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read G-code file: {}", path.display())),
        InputSource::Stdin => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

/// Activate the flavor to parse with and return it
///
/// Priority: CLI flag > document modeline > built-in default.
pub fn select_flavor<'r>(
    config: &Config,
    registry: &'r mut FlavorRegistry,
    document: &str,
) -> Result<&'r Flavor, FlavorError> {
    let name = config
        .get_effective_flavor()
        .or_else(|| registry.detect_modeline_flavor(document))
        .unwrap_or_else(|| DEFAULT_FLAVOR.to_string());

    if !registry.set_active_flavor(&name) {
        return Err(FlavorError::UnknownFlavor(name));
    }
    registry
        .get_active_flavor()
        .ok_or(FlavorError::UnknownFlavor(name))
}

/// Parse each line and write its JSON rendering on its own line
pub fn write_results<'a, W: Write>(
    parser: &GcodeParser,
    lines: impl IntoIterator<Item = &'a str>,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    for line in lines {
        let result = parser.parse(line);
        if pretty {
            serde_json::to_writer_pretty(&mut *out, &result)?;
        } else {
            serde_json::to_writer(&mut *out, &result)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
