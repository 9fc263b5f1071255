//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain docs
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule; all print JSON to stdout.

pub mod doc;
pub mod output;
pub mod parse;
pub mod schema;

pub use doc::{execute_doc, execute_subclasses, DocOptions, SubclassesOptions};
pub use output::{print_json, read_input, read_json};
pub use parse::{execute_detect, execute_parse, ParseOptions};
pub use schema::{execute_schema, SchemaOptions};
