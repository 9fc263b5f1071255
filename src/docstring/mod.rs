//! @acp:module "Docstring Parsing"
//! @acp:summary "Detects and parses the two supported docstring dialects"
//! @acp:domain docs
//! @acp:layer service
//!
//! # Docstring Parsing
//!
//! Two markup dialects are understood:
//!
//! - **Tag dialect**: one `:tag argument:` field per line (Sphinx/reST fields)
//! - **Section dialect**: `Title:` lines followed by an indented block (Google style)
//!
//! ## Core Components
//!
//! - [`scanner`]: splits text at markers, yielding sections last-to-first
//! - [`DialectDetector`]: decides which dialect a docstring uses
//! - [`tags`] / [`sections`]: the per-dialect parsers
//! - [`DocstringParser`]: detection plus dispatch
//!
//! ## Usage
//!
//! ```rust
//! use exdoc::docstring::{DocstringParser, ParserConfig};
//!
//! let parser = DocstringParser::new(&ParserConfig::default());
//! let parsed = parser.parse("Add numbers.\n\n:param a: First\n:rtype: int", "add")?;
//! assert_eq!(parsed.description, "Add numbers.");
//! assert_eq!(parsed.args[0].name, "a");
//! # Ok::<(), exdoc::ExdocError>(())
//! ```

pub mod config;
pub mod detector;
pub mod scanner;
pub mod sections;
pub mod tags;

pub use config::{DocstringStyle, ParserConfig};
pub use detector::{DialectDetector, Probe};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{ArgumentDoc, ExceptionRecord, ReturnRecord};

/// @acp:summary "Docstring markup dialect"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `:param name:` style fields
    Tag,
    /// `Args:` style indented sections
    Section,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Tag => write!(f, "tag"),
            Dialect::Section => write!(f, "section"),
        }
    }
}

/// @acp:summary "Documentation-sourced fields of one docstring"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocstring {
    /// Dialect the text was parsed with
    pub dialect: Dialect,
    /// Free text not claimed by any section
    pub description: String,
    /// Documented arguments, in the order written
    pub args: Vec<ArgumentDoc>,
    /// Documented return value
    pub ret: Option<ReturnRecord>,
    /// Documented exceptions, in the order written
    pub exc: Vec<ExceptionRecord>,
    /// Example block, verbatim
    pub example: Option<String>,
}

impl ParsedDocstring {
    /// @acp:summary "Create an empty result for a dialect"
    pub fn empty(dialect: Dialect) -> Self {
        Self {
            dialect,
            description: String::new(),
            args: Vec::new(),
            ret: None,
            exc: Vec::new(),
            example: None,
        }
    }
}

/// @acp:summary "Detects a docstring's dialect and dispatches to its parser"
pub struct DocstringParser {
    detector: DialectDetector,
}

impl DocstringParser {
    /// @acp:summary "Create a parser from configuration"
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            detector: DialectDetector::new(config),
        }
    }

    /// The detector used for dialect selection
    pub fn detector(&self) -> &DialectDetector {
        &self.detector
    }

    /// @acp:summary "Parse a cleaned docstring; `unit` names the owner in errors"
    pub fn parse(&self, text: &str, unit: &str) -> Result<ParsedDocstring> {
        let dialect = self.detector.detect(text, unit)?;
        tracing::debug!(unit, %dialect, "parsing docstring");

        match dialect {
            Dialect::Tag => Ok(tags::parse(text)),
            Dialect::Section => sections::parse(text, unit),
        }
    }
}

/// Number of leading spaces/tabs on a line
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// @acp:summary "Remove the common leading whitespace from every line"
///
/// Whitespace-only lines are normalized to empty and ignored when computing
/// the common prefix.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(indent_width)
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|l| if l.trim().is_empty() { "" } else { &l[indent..] })
        .collect::<Vec<_>>()
        .join("\n")
}

/// @acp:summary "Clean a docstring the way the host runtime's doc getter does"
///
/// The first line loses its leading whitespace, the remaining lines lose
/// their common indentation, and leading/trailing blank lines are dropped.
pub fn cleandoc(text: &str) -> String {
    let mut lines = text.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };
    let rest: Vec<&str> = lines.collect();

    let indent = rest
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = Vec::with_capacity(rest.len() + 1);
    out.push(first.trim_start());
    for line in rest {
        if line.trim().is_empty() {
            out.push("");
        } else {
            out.push(&line[indent..]);
        }
    }

    while out.first().is_some_and(|l| l.trim().is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }

    out.join("\n")
}
