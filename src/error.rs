//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for docstring parsing, extraction and schema reading"
//! @acp:domain docs
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Crate-wide result alias"
pub type Result<T> = std::result::Result<T, ExdocError>;

/// @acp:summary "Errors raised while extracting documentation"
///
/// Every documentation error is fatal: malformed docstrings are surfaced to
/// the caller instead of producing a partial record.
#[derive(Debug, Error)]
pub enum ExdocError {
    /// Both dialects matched the same docstring
    #[error("{unit}: ambiguous docstring format, both tag and section markup found")]
    AmbiguousFormat { unit: String },

    /// Leftover text inside an args/excs/attrs section after item extraction
    #[error("{unit}: unparsed text in section `{section}`: {residue:?}")]
    UnparsedSection {
        section: String,
        unit: String,
        residue: String,
    },

    /// A section title matched the vocabulary but has no handler
    #[error("{unit}: unsupported docstring section `{section}`")]
    UnknownSection { section: String, unit: String },

    /// Object is neither a routine, a class, nor a named object
    #[error("unsupported object kind: {0}")]
    UnsupportedObject(String),

    /// Column type has neither a portable name nor a compiled fallback
    #[error("column `{column}`: type has no portable name and no `{dialect}` rendering")]
    UnrenderableType { column: String, dialect: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// @acp:summary "Human-readable unit identifier for error messages"
///
/// `module.qualname` when the module is known, the bare qualified name
/// otherwise, and `<docstring>` for anonymous text.
pub fn unit_name(module: Option<&str>, qualname: Option<&str>) -> String {
    match (module, qualname) {
        (Some(m), Some(q)) => format!("{}.{}", m, q),
        (None, Some(q)) => q.to_string(),
        (Some(m), None) => m.to_string(),
        (None, None) => "<docstring>".to_string(),
    }
}
