//! @acp:module "Schema Types"
//! @acp:summary "Relational model metadata (input) and schema records (output)"
//! @acp:domain docs
//! @acp:layer model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Input: model metadata as reported by the schema provider
// ============================================================================

/// @acp:summary "Metadata of one mapped model"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Backing tables, in mapping order
    #[serde(default)]
    pub tables: Vec<TableInfo>,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    /// Primary key column keys
    #[serde(default)]
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<RelationshipInfo>,
}

/// @acp:summary "One backing table with its constraints"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub name: String,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyInfo>,
    /// Each constraint is a tuple of column keys
    #[serde(default)]
    pub unique_constraints: Vec<Vec<String>>,
}

/// @acp:summary "A foreign key and its referential actions"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyInfo {
    pub key: String,
    /// Fully qualified target column, e.g. `users.uid`
    pub target: String,
    #[serde(default)]
    pub onupdate: Option<String>,
    #[serde(default)]
    pub ondelete: Option<String>,
}

/// @acp:summary "Column type: a portable name and/or per-dialect compiled forms"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dialect name to the type string that dialect's compiler produces
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub compiled: BTreeMap<String, String>,
}

/// @acp:summary "One mapped column"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub key: String,
    #[serde(rename = "type", default)]
    pub r#type: ColumnType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// @acp:summary "A relationship to another model"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipInfo {
    pub key: String,
    /// Target model name
    pub model: String,
    /// (local column, remote column) pairs
    #[serde(default)]
    pub pairs: Vec<(String, String)>,
    /// Yields a list of related records
    #[serde(default)]
    pub uselist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

// ============================================================================
// Output: schema records
// ============================================================================

/// @acp:summary "Documentation record of a mapped model"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDoc {
    pub name: String,
    /// Backing table names
    pub table: Vec<String>,
    pub doc: String,
    /// Primary key column tuple
    pub primary: Vec<String>,
    /// Unique constraint tuples
    pub unique: Vec<Vec<String>>,
    pub foreign: Vec<ForeignKeyDoc>,
    pub columns: Vec<ColumnDoc>,
    pub relations: Vec<RelationDoc>,
}

/// Foreign key descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDoc {
    pub key: String,
    pub target: String,
    pub onupdate: Option<String>,
    pub ondelete: Option<String>,
}

/// Column descriptor; `type` carries a `NULL`/`NOT NULL` suffix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDoc {
    pub key: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub doc: String,
}

/// Relationship descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDoc {
    /// Relationship key, with `[]` appended when it yields a list
    pub key: String,
    pub model: String,
    /// `Model(pairs)` expression
    pub target: String,
    pub doc: String,
}
