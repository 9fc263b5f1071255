//! @acp:module "Section Scanner"
//! @acp:summary "Splits text at line-anchored markers, yielding sections last-to-first"
//! @acp:domain docs
//! @acp:layer parser
//!
//! All marker spans are collected in one forward pass; iteration then walks
//! them backwards by index. Each yielded body runs from the end of its marker
//! to the start of the marker after it, so bodies never contain markers that
//! were already consumed.
//!
//! Pattern conventions:
//! - group 1 is the marker (tag or section title)
//! - group 2, when present and matched, is the inline argument
//! - a named group `body`, when present, moves the body start back from the
//!   end of the match to the start of that group

use regex::Regex;

/// @acp:summary "One marker and the text it owns"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Matched marker text
    pub marker: &'a str,
    /// Inline argument following the marker (e.g. parameter name)
    pub arg: Option<&'a str>,
    /// Text between this marker and the next one, trimmed
    pub body: &'a str,
    /// The same span untrimmed, for callers that need relative indentation
    pub raw: &'a str,
    /// Text before this marker, trimmed
    pub rest: &'a str,
}

#[derive(Debug, Clone, Copy)]
struct Span<'a> {
    marker: &'a str,
    arg: Option<&'a str>,
    start: usize,
    body_start: usize,
}

/// @acp:summary "Reverse-order iterator over marker sections"
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    text: &'a str,
    spans: Vec<Span<'a>>,
    /// Everything at or after this offset has been handed out
    end: usize,
}

impl<'a> Sections<'a> {
    /// @acp:summary "Text not claimed by any section yielded so far"
    ///
    /// Once the iterator is exhausted this is the leading free text. With no
    /// markers at all it is the whole (trimmed) input.
    pub fn remainder(&self) -> &'a str {
        self.text[..self.end].trim()
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.spans.pop()?;
        let raw = &self.text[span.body_start..self.end];
        self.end = span.start;

        tracing::trace!(marker = span.marker, arg = ?span.arg, "scanned section");

        Some(Section {
            marker: span.marker,
            arg: span.arg,
            body: raw.trim(),
            raw,
            rest: self.text[..span.start].trim(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.spans.len(), Some(self.spans.len()))
    }
}

impl ExactSizeIterator for Sections<'_> {}

/// @acp:summary "Scan text for markers and iterate their sections last-to-first"
pub fn scan<'a>(pattern: &Regex, text: &'a str) -> Sections<'a> {
    let spans = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let marker = caps.get(1).map_or(whole.as_str(), |m| m.as_str());
            let arg = caps.get(2).map(|m| m.as_str());
            let body_start = caps.name("body").map_or(whole.end(), |m| m.start());
            Some(Span {
                marker,
                arg,
                start: whole.start(),
                body_start,
            })
        })
        .collect();

    Sections {
        text,
        spans,
        end: text.len(),
    }
}
