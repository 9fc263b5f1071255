//! @acp:module "Merge Engine"
//! @acp:summary "Merges runtime signatures with parsed documentation"
//! @acp:domain docs
//! @acp:layer service
//!
//! The runtime signature is authoritative for which parameters exist and in
//! what order. Documentation only contributes prose, and types where the
//! runtime declared none.

use crate::docstring::ParsedDocstring;
use crate::inspect::{ParamKind, ParamSpec, Signature};
use crate::record::{ArgumentDoc, ParameterRecord, ReturnRecord};

/// @acp:summary "Runtime parameters in canonical order, receiver removed if asked"
///
/// The receiver is only dropped when the first declared parameter is a plain
/// positional one.
pub fn runtime_params<'a>(
    signature: &'a Signature,
    drop_receiver: bool,
    unit: &str,
) -> Vec<&'a ParamSpec> {
    let mut params = signature.ordered_params();
    if drop_receiver && params.first().is_some_and(|p| p.kind == ParamKind::Positional) {
        let receiver = params.remove(0);
        tracing::debug!(unit, receiver = %receiver.name, "dropping receiver parameter");
    }
    params
}

/// @acp:summary "Merge runtime parameters with documented arguments"
///
/// One record per runtime parameter, in runtime order. Documentation is
/// looked up by bare name; documented arguments with no runtime counterpart
/// are dropped.
pub fn merge_params(
    runtime: &[&ParamSpec],
    documented: &[ArgumentDoc],
    unit: &str,
) -> Vec<ParameterRecord> {
    for doc in documented {
        if !runtime.iter().any(|p| p.name == doc.bare_name()) {
            tracing::debug!(
                unit,
                param = %doc.name,
                "dropping documented parameter missing from signature"
            );
        }
    }

    runtime
        .iter()
        .map(|param| {
            let doc = documented.iter().find(|d| d.bare_name() == param.name);
            ParameterRecord {
                name: param.display_name(),
                // Declared type wins over documented type
                r#type: param
                    .annotation
                    .clone()
                    .or_else(|| doc.and_then(|d| d.r#type.clone())),
                doc: doc.map(|d| d.doc.clone()).unwrap_or_default(),
                default: param.default.clone(),
            }
        })
        .collect()
}

/// @acp:summary "Merge a documented return value with the declared annotation"
///
/// The annotation overwrites the documented type. An annotation with nothing
/// documented still produces a record so the type is kept.
pub fn merge_return(
    documented: Option<ReturnRecord>,
    annotation: Option<&str>,
) -> Option<ReturnRecord> {
    match (documented, annotation) {
        (Some(mut ret), Some(annotation)) => {
            ret.r#type = Some(annotation.to_string());
            Some(ret)
        }
        (None, Some(annotation)) => Some(ReturnRecord {
            doc: String::new(),
            r#type: Some(annotation.to_string()),
        }),
        (documented, None) => documented,
    }
}

/// @acp:summary "Fold class-level documentation into a constructor's"
///
/// Returns the class description, which is kept as a separate field. The
/// constructor's own description falls back to it when empty. Class-level
/// exceptions are appended; a class-level parameter entry replaces both the
/// doc and the documented type of the constructor's.
pub fn merge_class(ctor: &mut ParsedDocstring, class: ParsedDocstring) -> String {
    let clsdoc = class.description;
    if ctor.description.is_empty() {
        ctor.description = clsdoc.clone();
    }

    ctor.exc.extend(class.exc);

    for arg in class.args {
        match ctor.args.iter_mut().find(|a| a.bare_name() == arg.bare_name()) {
            Some(existing) => {
                existing.doc = arg.doc;
                existing.r#type = arg.r#type;
            }
            None => ctor.args.push(arg),
        }
    }

    if ctor.example.is_none() {
        ctor.example = class.example;
    }

    clsdoc
}
