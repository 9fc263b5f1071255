//! @acp:module "Record Types"
//! @acp:summary "Normalized documentation records and their JSON shape"
//! @acp:domain docs
//! @acp:layer model
//!
//! These types serialize directly to the output contract consumed by
//! templating tools. Optional fields serialize as `null` rather than being
//! omitted, with one exception: a parameter's `default` key is only present
//! when the parameter has a default, since "no default" and "default is
//! null" are distinct.

use serde::{Deserialize, Deserializer, Serialize};

/// @acp:summary "A parameter default value as reported by the signature provider"
///
/// JSON shape: `null`, a boolean, a number, a string, `{"class": "Name"}` for
/// class-valued defaults, or `{"repr": "..."}` for values that only have an
/// opaque textual representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Host null (`None`)
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A class object; rendered by its own name
    Class { class: String },
    /// Any other value, rendered verbatim
    Repr { repr: String },
}

impl DefaultValue {
    /// @acp:summary "Render the value the way the host runtime's repr() would"
    pub fn repr(&self) -> String {
        match self {
            DefaultValue::Null => "None".to_string(),
            DefaultValue::Bool(true) => "True".to_string(),
            DefaultValue::Bool(false) => "False".to_string(),
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Float(f) => float_repr(*f),
            DefaultValue::Str(s) => quote(s),
            DefaultValue::Class { class } => class.clone(),
            DefaultValue::Repr { repr } => repr.clone(),
        }
    }
}

fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = f.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        // Debug keeps a trailing `.0` on integral floats
        return format!("{:?}", f);
    }

    // Exponent carries an explicit sign and at least two digits: 1e+16, 1e-05
    let sci = format!("{:e}", f);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => sci,
    }
}

/// Single quotes unless the text contains a single quote and no double quote
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Deserialize a present-but-null field as `Some(DefaultValue::Null)`
///
/// Used together with `#[serde(default)]` so a missing key stays `None`.
pub(crate) fn present_default<'de, D>(deserializer: D) -> Result<Option<DefaultValue>, D::Error>
where
    D: Deserializer<'de>,
{
    DefaultValue::deserialize(deserializer).map(Some)
}

/// @acp:summary "Documentation for one argument, as written in a docstring"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDoc {
    /// Argument name as documented (may carry `*`/`**`)
    pub name: String,
    /// Description text
    #[serde(default)]
    pub doc: String,
    /// Documented type, if any
    #[serde(rename = "type", default)]
    pub r#type: Option<String>,
}

impl ArgumentDoc {
    /// Name with variadic markers stripped, used for matching
    pub fn bare_name(&self) -> &str {
        self.name.trim_start_matches('*')
    }
}

/// @acp:summary "A merged parameter: runtime existence and order, documented prose"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Name, prefixed with `*` or `**` for variadic parameters
    pub name: String,
    /// Declared type, or the documented type when none was declared
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    /// Description text
    #[serde(default)]
    pub doc: String,
    /// Default value; absent when the parameter has no default
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_default"
    )]
    pub default: Option<DefaultValue>,
}

/// @acp:summary "Documentation for a return value"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// Description text
    #[serde(default)]
    pub doc: String,
    /// Return type, if any
    #[serde(rename = "type")]
    pub r#type: Option<String>,
}

/// @acp:summary "Documentation for a raised exception"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionRecord {
    /// Exception name
    pub name: String,
    /// Description text
    #[serde(default)]
    pub doc: String,
}

/// @acp:summary "Normalized documentation for one object"
///
/// Field order matches the output contract. Signature strings are derived by
/// the formatter and are `None` for non-callable objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDoc {
    /// Originating module name
    pub module: Option<String>,
    /// Simple name
    pub name: String,
    /// Dotted path reflecting lexical nesting
    pub qualname: String,
    /// Free-text description
    pub doc: String,
    /// Class-level description (constructors only; empty otherwise)
    pub clsdoc: String,
    pub signature: Option<String>,
    pub qsignature: Option<String>,
    pub tsignature: Option<String>,
    pub qtsignature: Option<String>,
    pub rtsignature: Option<String>,
    pub qrtsignature: Option<String>,
    /// Return value, if documented or annotated
    pub ret: Option<ReturnRecord>,
    /// Parameters in runtime order
    pub args: Vec<ParameterRecord>,
    /// Exceptions in the order they were written
    pub exc: Vec<ExceptionRecord>,
    /// Example block, verbatim
    pub example: Option<String>,
}

impl ParsedDoc {
    /// @acp:summary "Create an empty record for a named object"
    pub fn new(module: Option<String>, name: &str, qualname: &str) -> Self {
        Self {
            module,
            name: name.to_string(),
            qualname: qualname.to_string(),
            ..Default::default()
        }
    }
}
