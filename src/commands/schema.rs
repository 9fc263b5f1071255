//! @acp:module "Schema Command"
//! @acp:summary "Documents a relational model from its metadata"
//! @acp:domain docs
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;

use super::output::{print_json, read_json};
use crate::config::Config;
use crate::schema::{describe, ModelInfo};

/// Options for the schema command
#[derive(Debug, Clone)]
pub struct SchemaOptions {
    /// ModelInfo JSON file, or `-` for stdin
    pub input: PathBuf,
}

/// Execute the schema command
pub fn execute_schema(options: SchemaOptions, config: Config) -> Result<()> {
    let model: ModelInfo = read_json(&options.input)?;
    let record = describe(&model, &config)?;
    print_json(&record, config.output.pretty)
}
