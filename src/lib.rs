#![forbid(unsafe_code)]

//! @acp:module "exdoc Library"
//! @acp:summary "Structured documentation extraction from signatures and docstrings"
//! @acp:domain docs
//! @acp:layer api
//! @acp:stability stable
//!
//! # exdoc
//!
//! Extracts structured documentation from introspected program objects by
//! merging their runtime signatures with their parsed docstrings.
//!
//! ## Features
//!
//! - **Two dialects**: `:param x:` tag fields and `Args:` indented sections,
//!   detected automatically
//! - **Signature-first merging**: runtime parameters decide existence and
//!   order, documentation contributes prose and missing types
//! - **JSON Output**: records ready for templated reference documentation
//! - **Schema mirror**: tables, columns, keys and relationships of mapped models
//!
//! ## Example
//!
//! ```rust
//! use exdoc::{doc, Config, ObjectInfo, ObjectKind};
//! use exdoc::inspect::{ParamSpec, Signature};
//!
//! let mut f = ObjectInfo::new(ObjectKind::Function, "greet");
//! f.doc = Some("Say hello.\n\nArgs:\n    name (str): Who to greet.".to_string());
//! f.signature = Some(Signature {
//!     params: vec![ParamSpec::new("name")],
//!     returns: Some("None".to_string()),
//! });
//!
//! let record = doc(&f, &Config::default())?;
//! assert_eq!(record.doc, "Say hello.");
//! assert_eq!(record.args[0].r#type.as_deref(), Some("str"));
//! assert_eq!(record.tsignature.as_deref(), Some("greet(name: str) -> None"));
//! # Ok::<(), exdoc::ExdocError>(())
//! ```

pub mod commands;
pub mod config;
pub mod docstring;
pub mod error;
pub mod extract;
pub mod inspect;
pub mod record;
pub mod schema;

// Re-exports
pub use config::Config;
pub use docstring::{
    cleandoc, dedent, Dialect, DialectDetector, DocstringParser, DocstringStyle, ParsedDocstring,
    ParserConfig,
};
pub use error::{ExdocError, Result};
pub use extract::{doc, Extractor};
pub use inspect::{getmembers, subclasses, Introspect, ObjectInfo, ObjectKind};
pub use record::{
    ArgumentDoc, DefaultValue, ExceptionRecord, ParameterRecord, ParsedDoc, ReturnRecord,
};
pub use schema::{describe, ModelDoc, ModelInfo, SchemaProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
