//! @acp:module "Introspection"
//! @acp:summary "Signature and documentation providers for introspected objects"
//! @acp:domain docs
//! @acp:layer model
//!
//! # Introspection
//!
//! The host runtime's reflection is an external collaborator. It is reached
//! through the [`Introspect`] trait; [`ObjectInfo`] is the data-backed
//! implementation an external introspector writes as JSON:
//!
//! ```json
//! {
//!   "kind": "method",
//!   "name": "f",
//!   "module": "app.models",
//!   "owner": "C",
//!   "doc": "Do things.\n\n:param a: A value",
//!   "signature": {
//!     "params": [{"name": "self"}, {"name": "a", "default": 1, "annotation": "int"}],
//!     "returns": null
//!   }
//! }
//! ```

pub mod members;

pub use members::{getmembers, is_public, subclasses, Predicate};

use serde::{Deserialize, Serialize};

use crate::docstring::ParserConfig;
use crate::record::types::present_default;
use crate::record::DefaultValue;

/// @acp:summary "Kind of an introspected object"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectKind {
    Function,
    Class,
    /// Ordinary instance method
    Method,
    StaticMethod,
    ClassMethod,
    Property,
    Module,
    /// Anything else, keeping the reported kind name
    Other(String),
}

impl ObjectKind {
    /// Get string representation for serialization
    pub fn as_str(&self) -> &str {
        match self {
            ObjectKind::Function => "function",
            ObjectKind::Class => "class",
            ObjectKind::Method => "method",
            ObjectKind::StaticMethod => "staticmethod",
            ObjectKind::ClassMethod => "classmethod",
            ObjectKind::Property => "property",
            ObjectKind::Module => "module",
            ObjectKind::Other(kind) => kind,
        }
    }

    /// Routines produce a full signature record
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            ObjectKind::Function
                | ObjectKind::Method
                | ObjectKind::StaticMethod
                | ObjectKind::ClassMethod
        )
    }

    /// @acp:summary "Whether the runtime signature starts with an implicit receiver"
    pub fn has_receiver(&self) -> bool {
        matches!(
            self,
            ObjectKind::Method | ObjectKind::ClassMethod | ObjectKind::Property
        )
    }

    /// Members of a class, qualified by the class name when known
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            ObjectKind::Method
                | ObjectKind::StaticMethod
                | ObjectKind::ClassMethod
                | ObjectKind::Property
        )
    }
}

impl From<String> for ObjectKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "function" | "builtin" => ObjectKind::Function,
            "class" | "type" => ObjectKind::Class,
            "method" => ObjectKind::Method,
            "staticmethod" => ObjectKind::StaticMethod,
            "classmethod" => ObjectKind::ClassMethod,
            "property" => ObjectKind::Property,
            "module" => ObjectKind::Module,
            _ => ObjectKind::Other(s),
        }
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "How a runtime parameter binds arguments"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    Positional,
    /// Variadic positional (`*args`)
    Varargs,
    /// Variadic keyword (`**kwargs`)
    Kwargs,
}

/// @acp:summary "One runtime parameter as reported by the signature provider"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Bare parameter name
    pub name: String,
    #[serde(default)]
    pub kind: ParamKind,
    /// Default value; a missing key means "no default"
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_default"
    )]
    pub default: Option<DefaultValue>,
    /// Declared type annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl ParamSpec {
    /// @acp:summary "Create a positional parameter without default or annotation"
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::Positional,
            default: None,
            annotation: None,
        }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotation = Some(annotation.to_string());
        self
    }

    pub fn varargs(name: &str) -> Self {
        Self {
            kind: ParamKind::Varargs,
            ..Self::new(name)
        }
    }

    pub fn kwargs(name: &str) -> Self {
        Self {
            kind: ParamKind::Kwargs,
            ..Self::new(name)
        }
    }

    /// @acp:summary "Displayed name, with `*`/`**` prefixes for variadic parameters"
    pub fn display_name(&self) -> String {
        match self.kind {
            ParamKind::Positional => self.name.clone(),
            ParamKind::Varargs => format!("*{}", self.name),
            ParamKind::Kwargs => format!("**{}", self.name),
        }
    }
}

/// @acp:summary "A routine's runtime signature"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamSpec>,
    /// Declared return annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl Signature {
    /// @acp:summary "Parameters in canonical order"
    ///
    /// Declared order is kept, keyword-only parameters after `*args`
    /// included. The only correction is a variadic-keyword parameter reported
    /// ahead of the variadic-positional one; the two swap places.
    pub fn ordered_params(&self) -> Vec<&ParamSpec> {
        let mut params: Vec<&ParamSpec> = self.params.iter().collect();
        let varargs = params.iter().position(|p| p.kind == ParamKind::Varargs);
        let kwargs = params.iter().position(|p| p.kind == ParamKind::Kwargs);
        if let (Some(varargs), Some(kwargs)) = (varargs, kwargs) {
            if kwargs < varargs {
                params.swap(kwargs, varargs);
            }
        }
        params
    }
}

/// @acp:summary "Reflection interface over host objects"
///
/// Implement for any source of runtime metadata. Extraction only reads
/// through this trait.
pub trait Introspect {
    /// Object kind
    fn kind(&self) -> ObjectKind;

    /// Simple name, if the object has one
    fn name(&self) -> Option<&str>;

    /// Name of the module the object was defined in
    fn module(&self) -> Option<&str>;

    /// Qualified name of the enclosing class, for class members
    fn owner(&self) -> Option<&str>;

    /// Explicit qualified name; overrides the owner-derived one
    fn qualname(&self) -> Option<&str> {
        None
    }

    /// Raw documentation text, if any
    fn doc_text(&self) -> Option<&str>;

    /// Runtime signature of a routine (or of calling a class)
    fn signature(&self) -> Option<&Signature>;

    /// A class's constructor, if it defines one
    fn constructor(&self) -> Option<&Self>
    where
        Self: Sized;

    /// Named members of the object
    fn members(&self) -> &[Self]
    where
        Self: Sized;

    /// Direct subtypes of a class
    fn subtypes(&self) -> &[Self]
    where
        Self: Sized;
}

/// @acp:summary "Data-backed object description written by an external introspector"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub kind: ObjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Qualified name of the enclosing class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Explicit qualified name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    /// Constructor of a class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<Box<ObjectInfo>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ObjectInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subclasses: Vec<ObjectInfo>,
}

impl ObjectInfo {
    /// @acp:summary "Create a bare object of the given kind"
    pub fn new(kind: ObjectKind, name: &str) -> Self {
        Self {
            kind,
            name: Some(name.to_string()),
            module: None,
            owner: None,
            qualname: None,
            doc: None,
            signature: None,
            init: None,
            members: Vec::new(),
            subclasses: Vec::new(),
        }
    }
}

impl Introspect for ObjectInfo {
    fn kind(&self) -> ObjectKind {
        self.kind.clone()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn qualname(&self) -> Option<&str> {
        self.qualname.as_deref()
    }

    fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    fn constructor(&self) -> Option<&Self> {
        self.init.as_deref()
    }

    fn members(&self) -> &[Self] {
        &self.members
    }

    fn subtypes(&self) -> &[Self] {
        &self.subclasses
    }
}

/// @acp:summary "Qualified name of an object"
///
/// An explicit qualified name wins; class members with a known owner are
/// qualified by it; everything else uses its simple name.
pub fn qualified_name<T: Introspect>(obj: &T) -> Option<String> {
    if let Some(qualname) = obj.qualname() {
        return Some(qualname.to_string());
    }
    let name = obj.name()?;
    match obj.owner() {
        Some(owner) if obj.kind().is_member() => Some(format!("{}.{}", owner, name)),
        _ => Some(name.to_string()),
    }
}

/// @acp:summary "Cleaned documentation text of an object, empty when absent"
///
/// Boilerplate docs the host attaches to undocumented objects are masked
/// to the empty string.
pub fn getdoc<T: Introspect>(obj: &T, config: &ParserConfig) -> String {
    config.clean(obj.doc_text())
}
