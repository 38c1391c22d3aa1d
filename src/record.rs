//! Record types - the unit of cross-domain search

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Domain a record belongs to. Drives facet filtering and result grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Document,
    Memory,
    Task,
    Activity,
}

impl DomainType {
    /// All domain types, in display order
    pub const ALL: [DomainType; 4] = [
        DomainType::Document,
        DomainType::Memory,
        DomainType::Task,
        DomainType::Activity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DomainType::Document => "document",
            DomainType::Memory => "memory",
            DomainType::Task => "task",
            DomainType::Activity => "activity",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single searchable item from any workspace domain.
///
/// `title`, `description`, and `content` are the indexed text fields,
/// matched in that priority order. `relevance` is a precomputed score in
/// [0, 1] attached at ingestion time; it is the ranking key and never
/// varies by query. `timestamp`, `category`, `source`, and `metadata`
/// are carried for display and collaborator filtering only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique, stable, opaque identifier
    pub id: String,
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Creation, due, or event time - display only, never used for ranking
    pub timestamp: DateTime<Utc>,
    /// Free-text facet label used by collaborator filtering, not by the core
    pub category: String,
    /// Precomputed static relevance in [0, 1]
    pub relevance: f32,
    /// Provenance label, display only
    pub source: String,
    /// Open key/value annotations, display only
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}
