//! @acp:module "Schema Reader"
//! @acp:summary "Documents relational models from schema provider metadata"
//! @acp:domain docs
//! @acp:layer service
//!
//! # Schema Reader
//!
//! Mirrors a mapped model's tables, columns, keys and relationships into a
//! [`ModelDoc`]. The mapping layer itself is an external collaborator reached
//! through [`SchemaProvider`]; [`ModelInfo`] is the JSON-backed provider.
//!
//! ```rust
//! use exdoc::schema::{describe, ModelInfo, RelationshipInfo};
//! use exdoc::Config;
//!
//! let model = ModelInfo {
//!     name: "User".to_string(),
//!     relationships: vec![RelationshipInfo {
//!         key: "devices".to_string(),
//!         model: "Device".to_string(),
//!         pairs: vec![("uid".to_string(), "uid".to_string())],
//!         uselist: true,
//!         doc: None,
//!     }],
//!     ..Default::default()
//! };
//!
//! let record = describe(&model, &Config::default())?;
//! assert_eq!(record.relations[0].key, "devices[]");
//! assert_eq!(record.relations[0].target, "Device(uid)");
//! # Ok::<(), exdoc::ExdocError>(())
//! ```

pub mod types;

pub use types::{
    ColumnDoc, ColumnInfo, ColumnType, ForeignKeyDoc, ForeignKeyInfo, ModelDoc, ModelInfo,
    RelationDoc, RelationshipInfo, TableInfo,
};

use crate::config::Config;
use crate::error::{ExdocError, Result};

/// @acp:summary "Relational mapping metadata interface"
pub trait SchemaProvider {
    /// Model class name
    fn model_name(&self) -> &str;

    /// Raw model documentation text
    fn doc_text(&self) -> Option<&str>;

    fn tables(&self) -> &[TableInfo];

    fn columns(&self) -> &[ColumnInfo];

    /// Primary key column keys, in key order
    fn primary_key(&self) -> &[String];

    fn relationships(&self) -> &[RelationshipInfo];
}

impl SchemaProvider for ModelInfo {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn tables(&self) -> &[TableInfo] {
        &self.tables
    }

    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    fn relationships(&self) -> &[RelationshipInfo] {
        &self.relationships
    }
}

/// @acp:summary "Build the schema record of a model"
pub fn describe<S: SchemaProvider>(model: &S, config: &Config) -> Result<ModelDoc> {
    let tables = model.tables();
    tracing::debug!(model = model.model_name(), tables = tables.len(), "describing model");

    Ok(ModelDoc {
        name: model.model_name().to_string(),
        table: tables.iter().map(|t| t.name.clone()).collect(),
        doc: config.docstring.clean(model.doc_text()),
        primary: model.primary_key().to_vec(),
        unique: tables
            .iter()
            .flat_map(|t| t.unique_constraints.iter().cloned())
            .collect(),
        foreign: tables
            .iter()
            .flat_map(|t| t.foreign_keys.iter())
            .map(|fk| ForeignKeyDoc {
                key: fk.key.clone(),
                target: fk.target.clone(),
                onupdate: fk.onupdate.clone(),
                ondelete: fk.ondelete.clone(),
            })
            .collect(),
        columns: model
            .columns()
            .iter()
            .filter(|c| !c.key.starts_with('_'))
            .map(|c| column_doc(c, &config.schema.fallback_dialect))
            .collect::<Result<Vec<_>>>()?,
        relations: model.relationships().iter().map(relation_doc).collect(),
    })
}

/// @acp:summary "Render a column type with its nullability suffix"
///
/// The portable type name is preferred; otherwise the type as compiled for
/// the fallback dialect.
pub fn column_type(column: &ColumnInfo, dialect: &str) -> Result<String> {
    let name = column
        .r#type
        .name
        .as_deref()
        .or_else(|| column.r#type.compiled.get(dialect).map(String::as_str))
        .ok_or_else(|| ExdocError::UnrenderableType {
            column: column.key.clone(),
            dialect: dialect.to_string(),
        })?;

    let null = if column.nullable { "NULL" } else { "NOT NULL" };
    Ok(format!("{} {}", name, null))
}

fn column_doc(column: &ColumnInfo, dialect: &str) -> Result<ColumnDoc> {
    Ok(ColumnDoc {
        key: column.key.clone(),
        r#type: column_type(column, dialect)?,
        doc: column.doc.clone().unwrap_or_default(),
    })
}

/// @acp:summary "Render a relationship's `Model(pairs)` target expression"
///
/// A pair renders as the bare column name when both sides share it, else as
/// `local=remote`.
pub fn relation_target(relation: &RelationshipInfo) -> String {
    let pairs: Vec<String> = relation
        .pairs
        .iter()
        .map(|(local, remote)| {
            if local == remote {
                local.clone()
            } else {
                format!("{}={}", local, remote)
            }
        })
        .collect();
    format!("{}({})", relation.model, pairs.join(", "))
}

fn relation_doc(relation: &RelationshipInfo) -> RelationDoc {
    let key = if relation.uselist {
        format!("{}[]", relation.key)
    } else {
        relation.key.clone()
    };

    RelationDoc {
        key,
        model: relation.model.clone(),
        target: relation_target(relation),
        doc: relation.doc.clone().unwrap_or_default(),
    }
}
