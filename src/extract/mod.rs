//! @acp:module "Extraction"
//! @acp:summary "Turns an introspected object into a normalized documentation record"
//! @acp:domain docs
//! @acp:layer service
//!
//! # Extraction
//!
//! Combines the two sources of truth for a callable:
//!
//! - its runtime signature, via [`Introspect`]
//! - its docstring, via [`DocstringParser`]
//!
//! ## Core Components
//!
//! - [`merger`]: parameter, return and class/constructor merging
//! - [`formatter`]: the derived signature strings
//! - [`Extractor`]: dispatch per object kind
//!
//! ## Usage
//!
//! ```rust
//! use exdoc::extract::doc;
//! use exdoc::inspect::{ObjectInfo, ObjectKind, ParamSpec, Signature};
//! use exdoc::Config;
//!
//! let mut f = ObjectInfo::new(ObjectKind::Function, "add");
//! f.doc = Some("Add numbers.\n\n:param a: First\n:rtype: int".to_string());
//! f.signature = Some(Signature {
//!     params: vec![ParamSpec::new("a"), ParamSpec::new("b")],
//!     returns: None,
//! });
//!
//! let record = doc(&f, &Config::default())?;
//! assert_eq!(record.signature.as_deref(), Some("add(a, b)"));
//! assert_eq!(record.tsignature.as_deref(), Some("add(a, b) -> int"));
//! # Ok::<(), exdoc::ExdocError>(())
//! ```

pub mod formatter;
pub mod merger;

pub use formatter::update_signatures;

use crate::config::Config;
use crate::docstring::{DocstringParser, ParsedDocstring};
use crate::error::{unit_name, ExdocError, Result};
use crate::inspect::{getdoc, qualified_name, Introspect, ObjectKind, Signature};
use crate::record::ParsedDoc;

/// @acp:summary "Extracts documentation records from introspected objects"
pub struct Extractor {
    config: Config,
    parser: DocstringParser,
}

impl Extractor {
    /// @acp:summary "Create a new extractor with configuration"
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            parser: DocstringParser::new(&config.docstring),
        }
    }

    /// @acp:summary "Document one object"
    pub fn doc<T: Introspect>(&self, obj: &T) -> Result<ParsedDoc> {
        let kind = obj.kind();
        match &kind {
            ObjectKind::Class => self.doc_class(obj),
            ObjectKind::Property => self.doc_routine(obj, true),
            k if k.is_routine() => self.doc_routine(obj, false),
            _ => self.doc_plain(obj, &kind),
        }
    }

    /// Functions, methods and properties
    fn doc_routine<T: Introspect>(&self, obj: &T, property: bool) -> Result<ParsedDoc> {
        let kind = obj.kind();
        let (mut record, unit) = self.new_record(obj, &kind)?;

        let parsed = self.parser.parse(&getdoc(obj, &self.config.docstring), &unit)?;
        let empty = Signature::default();
        let signature = obj.signature().unwrap_or(&empty);

        self.fill(&mut record, parsed, signature, kind.has_receiver(), &unit);
        formatter::update_signatures(&mut record, property);
        Ok(record)
    }

    /// Classes document their constructor, named after the class
    fn doc_class<T: Introspect>(&self, obj: &T) -> Result<ParsedDoc> {
        let (mut record, unit) = self.new_record(obj, &ObjectKind::Class)?;
        let docstring = &self.config.docstring;

        let class = self.parser.parse(&getdoc(obj, docstring), &unit)?;
        let ctor = obj.constructor();
        let mut parsed = match ctor {
            Some(init) => self.parser.parse(&getdoc(init, docstring), &unit)?,
            None => ParsedDocstring::empty(class.dialect),
        };
        record.clsdoc = merger::merge_class(&mut parsed, class);

        let empty = Signature::default();
        let (signature, drop_receiver) = match (obj.signature(), ctor) {
            (Some(sig), _) => (sig, false),
            (None, Some(init)) => (init.signature().unwrap_or(&empty), true),
            (None, None) => (&empty, false),
        };

        self.fill(&mut record, parsed, signature, drop_receiver, &unit);
        formatter::update_signatures(&mut record, false);
        Ok(record)
    }

    /// Modules and other named non-callables
    fn doc_plain<T: Introspect>(&self, obj: &T, kind: &ObjectKind) -> Result<ParsedDoc> {
        let name = obj
            .name()
            .ok_or_else(|| ExdocError::UnsupportedObject(kind.to_string()))?;
        tracing::debug!(name, %kind, "documenting non-callable object");

        let mut record = ParsedDoc::new(None, name, name);
        record.doc = getdoc(obj, &self.config.docstring);
        Ok(record)
    }

    /// Empty record with names set, plus the unit identifier for errors
    fn new_record<T: Introspect>(
        &self,
        obj: &T,
        kind: &ObjectKind,
    ) -> Result<(ParsedDoc, String)> {
        let name = obj
            .name()
            .ok_or_else(|| ExdocError::UnsupportedObject(kind.to_string()))?;
        let qualname = qualified_name(obj).unwrap_or_else(|| name.to_string());
        let module = obj.module().map(str::to_string);

        let unit = unit_name(module.as_deref(), Some(&qualname));
        Ok((ParsedDoc::new(module, name, &qualname), unit))
    }

    /// Merge parsed documentation and the runtime signature into the record
    fn fill(
        &self,
        record: &mut ParsedDoc,
        parsed: ParsedDocstring,
        signature: &Signature,
        drop_receiver: bool,
        unit: &str,
    ) {
        let runtime = merger::runtime_params(signature, drop_receiver, unit);
        record.args = merger::merge_params(&runtime, &parsed.args, unit);
        record.ret = merger::merge_return(parsed.ret, signature.returns.as_deref());
        record.doc = parsed.description;
        record.exc = parsed.exc;
        record.example = parsed.example;
    }
}

/// @acp:summary "Document one object with the given configuration"
pub fn doc<T: Introspect>(obj: &T, config: &Config) -> Result<ParsedDoc> {
    Extractor::new(config).doc(obj)
}
