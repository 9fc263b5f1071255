//! @acp:module "Tag Dialect Parser"
//! @acp:summary "Parses `:param name:` style field lists"
//! @acp:domain docs
//! @acp:layer parser

use std::sync::LazyLock;

use regex::Regex;

use super::scanner;
use super::{dedent, Dialect, ParsedDocstring};
use crate::record::{ArgumentDoc, ExceptionRecord, ReturnRecord};

/// Known tag spellings, longest first so alternation never stops on a prefix
const KNOWN_TAGS: &[&str] = &[
    "exception", "returns", "except", "return", "raises", "param", "rtype", "raise", "type",
];

/// Regex for tag markers anywhere at the start of a line
/// Matches: `:tag:` or `:tag argument:`
/// Groups: 1=tag, 2=argument
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(tag_pattern);

/// @acp:summary "Build the tag marker regex"
pub fn tag_pattern() -> Regex {
    Regex::new(&format!(
        r"(?m)^\s*:({})\s*([^\s:]+)?\s*:",
        KNOWN_TAGS.join("|")
    ))
    .unwrap()
}

/// @acp:summary "Normalized tag kind"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Arg,
    ArgType,
    Ret,
    RetType,
    Exc,
}

impl Tag {
    /// Normalize a tag spelling; `None` for unknown tags
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "param" => Some(Tag::Arg),
            "type" => Some(Tag::ArgType),
            "return" | "returns" => Some(Tag::Ret),
            "rtype" => Some(Tag::RetType),
            "exception" | "except" | "raise" | "raises" => Some(Tag::Exc),
            _ => None,
        }
    }
}

/// @acp:summary "Parse a tag-dialect docstring"
///
/// Only one return value is supported: a repeated `:return:` or `:rtype:`
/// overwrites the earlier field. Arguments and exceptions come back in the
/// order they were written.
pub fn parse(text: &str) -> ParsedDocstring {
    let text = dedent(text);
    let mut result = ParsedDocstring::empty(Dialect::Tag);

    // Collected in scan order (last in text first), reversed at the end
    let mut args: Vec<ArgumentDoc> = Vec::new();
    let mut ret: Option<ReturnRecord> = None;
    let mut exc: Vec<ExceptionRecord> = Vec::new();

    let mut sections = scanner::scan(&TAG_PATTERN, &text);
    for section in sections.by_ref() {
        let Some(tag) = Tag::from_marker(section.marker) else {
            tracing::warn!(tag = section.marker, "skipping unknown docstring tag");
            continue;
        };
        let value = section.body.to_string();

        match tag {
            Tag::Exc => exc.push(ExceptionRecord {
                name: section.arg.unwrap_or_default().to_string(),
                doc: value,
            }),
            Tag::Ret => ret.get_or_insert_with(ReturnRecord::default).doc = value,
            Tag::RetType => ret.get_or_insert_with(ReturnRecord::default).r#type = Some(value),
            Tag::Arg | Tag::ArgType => {
                let Some(name) = section.arg else {
                    tracing::warn!(tag = section.marker, "skipping argument tag without a name");
                    continue;
                };
                let index = match args.iter().position(|a| a.name == name) {
                    Some(i) => i,
                    None => {
                        args.push(ArgumentDoc {
                            name: name.to_string(),
                            ..Default::default()
                        });
                        args.len() - 1
                    }
                };
                if tag == Tag::Arg {
                    args[index].doc = value;
                } else {
                    args[index].r#type = Some(value);
                }
            }
        }
    }

    args.reverse();
    exc.reverse();

    result.description = sections.remainder().to_string();
    result.args = args;
    result.ret = ret;
    result.exc = exc;
    result
}
