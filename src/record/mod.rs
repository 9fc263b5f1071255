//! @acp:module "Records"
//! @acp:summary "Normalized output records shared by parsing, merging and formatting"
//! @acp:domain docs
//! @acp:layer model

pub mod types;

pub use types::{
    ArgumentDoc, DefaultValue, ExceptionRecord, ParameterRecord, ParsedDoc, ReturnRecord,
};
