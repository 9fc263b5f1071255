//! @acp:module "Section Dialect Parser"
//! @acp:summary "Parses `Args:` style indented sections"
//! @acp:domain docs
//! @acp:layer parser
//!
//! A section is a known title at column 0, a colon, a line break, and a
//! block indented at least one level. Structured sections (arguments,
//! exceptions, attributes) hold `name:` or `name (type):` items at the
//! block's own column 0; any other text inside them is an error.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner;
use super::{cleandoc, dedent, Dialect, ParsedDocstring};
use crate::error::{ExdocError, Result};
use crate::record::{ArgumentDoc, ExceptionRecord, ReturnRecord};

/// @acp:summary "Normalized section kind"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Args,
    Excs,
    Attrs,
    Examples,
    Ret,
}

/// Section title vocabulary, longest spelling of each prefix first
const SECTION_TITLES: &[(&str, SectionKind)] = &[
    ("Arguments", SectionKind::Args),
    ("Args", SectionKind::Args),
    ("Parameters", SectionKind::Args),
    ("Params", SectionKind::Args),
    ("Raises", SectionKind::Excs),
    ("Exceptions", SectionKind::Excs),
    ("Except", SectionKind::Excs),
    ("Attributes", SectionKind::Attrs),
    ("Examples", SectionKind::Examples),
    ("Example", SectionKind::Examples),
    ("Returns", SectionKind::Ret),
    ("Yields", SectionKind::Ret),
];

/// Regex for section titles, full vocabulary
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| section_pattern(true));

/// Regex for item headers inside a structured section
/// Matches: `name:` or `name (type):` at column 0
/// Groups: 1=name, 2=type
static ITEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\*{0,2}[A-Za-z_][\w.]*)(?:[ \t]*\(([^)\n]*)\))?[ \t]*:").unwrap()
});

/// Regex for an optional `type:` prefix on a returns body
static RET_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\s:]+):(?:\s+|$)").unwrap());

/// @acp:summary "Look up a section title in the vocabulary"
pub fn section_kind(title: &str) -> Option<SectionKind> {
    SECTION_TITLES
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, kind)| *kind)
}

/// @acp:summary "Build the section title regex"
///
/// `with_examples = false` gives the strict vocabulary used for detection.
/// Groups: 1=title; `body` marks where the indented block starts.
pub fn section_pattern(with_examples: bool) -> Regex {
    let titles: Vec<&str> = SECTION_TITLES
        .iter()
        .filter(|(_, kind)| with_examples || *kind != SectionKind::Examples)
        .map(|(title, _)| *title)
        .collect();

    Regex::new(&format!(
        r"(?m)^({}):[ \t]*\r?\n(?P<body>[ \t]+)\S",
        titles.join("|")
    ))
    .unwrap()
}

/// @acp:summary "Parse a section-dialect docstring"
pub fn parse(text: &str, unit: &str) -> Result<ParsedDocstring> {
    let text = dedent(text);
    let mut result = ParsedDocstring::empty(Dialect::Section);

    // Collected in scan order (last in text first), reversed at the end
    let mut args: Vec<ArgumentDoc> = Vec::new();
    let mut exc: Vec<ExceptionRecord> = Vec::new();

    let mut sections = scanner::scan(&SECTION_PATTERN, &text);
    for section in sections.by_ref() {
        let kind = section_kind(section.marker).ok_or_else(|| ExdocError::UnknownSection {
            section: section.marker.to_string(),
            unit: unit.to_string(),
        })?;

        match kind {
            SectionKind::Args => {
                for (name, r#type, doc) in parse_items(section.marker, section.raw, unit)? {
                    args.push(ArgumentDoc {
                        name: name.trim_start_matches('*').to_string(),
                        doc,
                        r#type,
                    });
                }
            }
            SectionKind::Excs => {
                for (name, _, doc) in parse_items(section.marker, section.raw, unit)? {
                    exc.push(ExceptionRecord { name, doc });
                }
            }
            SectionKind::Attrs => {
                // Validated but not part of the output record
                let attrs = parse_items(section.marker, section.raw, unit)?;
                tracing::trace!(unit, count = attrs.len(), "ignoring attributes section");
            }
            SectionKind::Examples => {
                result.example = Some(block(section.raw));
            }
            SectionKind::Ret => {
                result.ret = Some(parse_returns(section.raw));
            }
        }
    }

    args.reverse();
    exc.reverse();

    result.description = sections.remainder().to_string();
    result.args = args;
    result.exc = exc;
    Ok(result)
}

/// Dedent a section block, dropping blank edges but keeping relative indentation
fn block(raw: &str) -> String {
    dedent(raw).trim_start_matches('\n').trim_end().to_string()
}

/// Items of a structured section as (name, type, doc), last item first
fn parse_items(
    section: &str,
    raw: &str,
    unit: &str,
) -> Result<Vec<(String, Option<String>, String)>> {
    let body = block(raw);
    let mut items = Vec::new();

    let mut scanned = scanner::scan(&ITEM_PATTERN, &body);
    for item in scanned.by_ref() {
        let r#type = item
            .arg
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        items.push((item.marker.to_string(), r#type, cleandoc(item.body)));
    }

    let residue = scanned.remainder();
    if !residue.is_empty() {
        return Err(ExdocError::UnparsedSection {
            section: section.to_string(),
            unit: unit.to_string(),
            residue: residue.to_string(),
        });
    }

    Ok(items)
}

/// Split an optional leading `type:` from a returns body
fn parse_returns(raw: &str) -> ReturnRecord {
    let body = block(raw);
    match RET_TYPE_PATTERN.captures(&body) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            ReturnRecord {
                doc: cleandoc(body[end..].trim()),
                r#type: caps.get(1).map(|m| m.as_str().to_string()),
            }
        }
        None => ReturnRecord {
            doc: body,
            r#type: None,
        },
    }
}
