//! @acp:module "Dialect Detector"
//! @acp:summary "Decides whether a docstring uses tag or section markup"
//! @acp:domain docs
//! @acp:layer service
//!
//! Four probes run independently: tag strict, section strict, tag relaxed and
//! section relaxed. The strict section probe leaves out `Example`/`Examples`,
//! which show up in ordinary prose too often. If any strict probe matches,
//! the relaxed results are ignored.

use regex::Regex;

use super::config::{DocstringStyle, ParserConfig};
use super::{dedent, sections, tags, Dialect};
use crate::error::{ExdocError, Result};

/// @acp:summary "Outcome of the four detection probes"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Probe {
    pub tag_strict: bool,
    pub section_strict: bool,
    pub tag_relaxed: bool,
    pub section_relaxed: bool,
}

impl Probe {
    /// @acp:summary "Resolve the probes into (tag applies, section applies)"
    pub fn applicable(&self) -> (bool, bool) {
        if self.tag_strict || self.section_strict {
            (self.tag_strict, self.section_strict)
        } else {
            (self.tag_relaxed, self.section_relaxed)
        }
    }
}

/// @acp:summary "Detects the docstring dialect from content"
pub struct DialectDetector {
    style: DocstringStyle,
    // Compiled regexes for detection
    tag_strict: Regex,
    section_strict: Regex,
    tag_relaxed: Regex,
    section_relaxed: Regex,
}

impl DialectDetector {
    /// @acp:summary "Create a new dialect detector with configuration"
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            style: config.style,
            tag_strict: tags::tag_pattern(),
            section_strict: sections::section_pattern(false),
            // Tags have no relaxed form
            tag_relaxed: tags::tag_pattern(),
            section_relaxed: sections::section_pattern(true),
        }
    }

    /// @acp:summary "Run all four probes against the dedented text"
    pub fn probe(&self, text: &str) -> Probe {
        let text = dedent(text);
        Probe {
            tag_strict: self.tag_strict.is_match(&text),
            section_strict: self.section_strict.is_match(&text),
            tag_relaxed: self.tag_relaxed.is_match(&text),
            section_relaxed: self.section_relaxed.is_match(&text),
        }
    }

    /// @acp:summary "Detect the dialect; fails when both apply"
    ///
    /// A configured style short-circuits detection. Text with no markup at
    /// all is treated as the tag dialect, which then yields the whole text
    /// as the description.
    pub fn detect(&self, text: &str, unit: &str) -> Result<Dialect> {
        if let Some(forced) = self.style.forced() {
            return Ok(forced);
        }

        match self.probe(text).applicable() {
            (true, true) => Err(ExdocError::AmbiguousFormat {
                unit: unit.to_string(),
            }),
            (false, true) => Ok(Dialect::Section),
            _ => Ok(Dialect::Tag),
        }
    }
}
