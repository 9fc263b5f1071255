//! @acp:module "Parse Command"
//! @acp:summary "Parses raw docstrings and reports their dialect"
//! @acp:domain docs
//! @acp:layer handler
//!
//! Implements `exdoc parse` and `exdoc detect`.

use std::path::PathBuf;

use anyhow::Result;

use super::output::{print_json, read_input};
use crate::config::Config;
use crate::docstring::{Dialect, DocstringParser, ParsedDocstring};
use crate::error::unit_name;

/// Options for the parse and detect commands
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Docstring text file, or `-` for stdin
    pub input: PathBuf,
    /// Name used to identify the docstring in errors
    pub name: Option<String>,
}

/// @acp:summary "Parse docstring text with the configured dialect selection"
pub fn parse_text(text: &str, name: Option<&str>, config: &Config) -> Result<ParsedDocstring> {
    let parser = DocstringParser::new(&config.docstring);
    let text = config.docstring.clean(Some(text));
    Ok(parser.parse(&text, &unit_name(None, name))?)
}

/// @acp:summary "Detect the dialect of docstring text"
pub fn detect_text(text: &str, name: Option<&str>, config: &Config) -> Result<Dialect> {
    let parser = DocstringParser::new(&config.docstring);
    let text = config.docstring.clean(Some(text));
    Ok(parser.detector().detect(&text, &unit_name(None, name))?)
}

/// Execute the parse command
pub fn execute_parse(options: ParseOptions, config: Config) -> Result<()> {
    let text = read_input(&options.input)?;
    let parsed = parse_text(&text, options.name.as_deref(), &config)?;
    print_json(&parsed, config.output.pretty)
}

/// Execute the detect command
pub fn execute_detect(options: ParseOptions, config: Config) -> Result<()> {
    let text = read_input(&options.input)?;
    println!("{}", detect_text(&text, options.name.as_deref(), &config)?);
    Ok(())
}
