//! Facet filtering by domain type

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::record::{DomainType, Record};

/// Domain-type narrowing for a query: everything, or exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Type(DomainType),
}

impl Facet {
    /// Whether a record passes this facet. `All` admits unconditionally.
    ///
    /// Applied before substring matching to shrink the candidate set;
    /// the order of application does not change the result set.
    pub fn admits(&self, record: &Record) -> bool {
        match self {
            Facet::All => true,
            Facet::Type(t) => record.domain_type == *t,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str("all"),
            Facet::Type(t) => f.write_str(t.label()),
        }
    }
}

impl FromStr for Facet {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Facet::All),
            "document" => Ok(Facet::Type(DomainType::Document)),
            "memory" => Ok(Facet::Type(DomainType::Memory)),
            "task" => Ok(Facet::Type(DomainType::Task)),
            "activity" => Ok(Facet::Type(DomainType::Activity)),
            _ => Err(SearchError::InvalidFacet { raw: s.to_string() }),
        }
    }
}
