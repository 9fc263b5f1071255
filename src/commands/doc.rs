//! @acp:module "Doc Command"
//! @acp:summary "Documents introspected objects and lists their subtypes"
//! @acp:domain docs
//! @acp:layer handler
//!
//! Implements `exdoc doc` and `exdoc subclasses`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use super::output::{print_json, read_json};
use crate::config::Config;
use crate::error::unit_name;
use crate::extract::Extractor;
use crate::inspect::{getmembers, qualified_name, subclasses, Introspect, ObjectInfo};
use crate::record::ParsedDoc;

/// Key under which `--members` output stores the object itself
pub const SELF_KEY: &str = "__module__";

/// Options for the doc command
#[derive(Debug, Clone)]
pub struct DocOptions {
    /// ObjectInfo JSON file, or `-` for stdin
    pub input: PathBuf,
    /// Also document every public member
    pub members: bool,
}

/// Options for the subclasses command
#[derive(Debug, Clone)]
pub struct SubclassesOptions {
    /// ObjectInfo JSON file of the root type, or `-` for stdin
    pub input: PathBuf,
    /// Only list types without further subtypes
    pub leaves: bool,
}

/// Execute the doc command
pub fn execute_doc(options: DocOptions, config: Config) -> Result<()> {
    let obj: ObjectInfo = read_json(&options.input)?;
    let extractor = Extractor::new(&config);

    if options.members {
        let docs = document_members(&extractor, &obj)?;
        print_json(&docs, config.output.pretty)
    } else {
        print_json(&extractor.doc(&obj)?, config.output.pretty)
    }
}

/// @acp:summary "Document an object and its public members, keyed by name"
pub fn document_members<T: Introspect>(
    extractor: &Extractor,
    obj: &T,
) -> Result<BTreeMap<String, ParsedDoc>> {
    let mut docs = BTreeMap::new();
    for (name, member) in getmembers(obj, &[]) {
        docs.insert(name.to_string(), extractor.doc(member)?);
    }
    docs.insert(SELF_KEY.to_string(), extractor.doc(obj)?);
    Ok(docs)
}

/// Execute the subclasses command
pub fn execute_subclasses(options: SubclassesOptions, config: Config) -> Result<()> {
    let root: ObjectInfo = read_json(&options.input)?;

    let names: Vec<String> = subclasses(&root, options.leaves)
        .into_iter()
        .map(|cls| unit_name(cls.module(), qualified_name(cls).as_deref()))
        .collect();
    tracing::debug!(count = names.len(), leaves = options.leaves, "listed subclasses");

    print_json(&names, config.output.pretty)
}
