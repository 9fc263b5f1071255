//! @acp:module "Signature Formatter"
//! @acp:summary "Renders the derived signature strings of a merged record"
//! @acp:domain docs
//! @acp:layer service

use crate::record::{ParameterRecord, ParsedDoc};

/// Parameter rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Typed,
}

fn render_param(param: &ParameterRecord, style: Style) -> String {
    let annotated = match (&param.r#type, style) {
        (Some(t), Style::Typed) => Some(format!("{}: {}", param.name, t)),
        _ => None,
    };

    match (&param.default, annotated) {
        (None, None) => param.name.clone(),
        (None, Some(annotated)) => annotated,
        (Some(default), None) => format!("{}={}", param.name, default.repr()),
        (Some(default), Some(annotated)) => format!("{} = {}", annotated, default.repr()),
    }
}

fn render_params(params: &[ParameterRecord], style: Style) -> String {
    params
        .iter()
        .map(|p| render_param(p, style))
        .collect::<Vec<_>>()
        .join(", ")
}

/// @acp:summary "Fill in all six signature strings from args and ret"
///
/// Pure function of the record's name, qualname, args and ret, so calling it
/// again yields the same strings. Properties render as bare names.
pub fn update_signatures(doc: &mut ParsedDoc, property: bool) {
    let ret_suffix = doc
        .ret
        .as_ref()
        .and_then(|r| r.r#type.as_deref())
        .map(|t| format!(" -> {}", t))
        .unwrap_or_default();

    let (plain, typed) = if property {
        (String::new(), String::new())
    } else {
        (
            format!("({})", render_params(&doc.args, Style::Plain)),
            format!("({})", render_params(&doc.args, Style::Typed)),
        )
    };

    doc.signature = Some(format!("{}{}", doc.name, plain));
    doc.qsignature = Some(format!("{}{}", doc.qualname, plain));
    doc.tsignature = Some(format!("{}{}{}", doc.name, typed, ret_suffix));
    doc.qtsignature = Some(format!("{}{}{}", doc.qualname, typed, ret_suffix));
    doc.rtsignature = Some(format!("{}{}{}", doc.name, plain, ret_suffix));
    doc.qrtsignature = Some(format!("{}{}{}", doc.qualname, plain, ret_suffix));
}
