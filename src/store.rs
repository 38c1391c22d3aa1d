//! RecordStore - validated in-memory corpus snapshot

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::SearchError;
use crate::record::{DomainType, Record};

/// The full set of records available to search at a given time.
///
/// The store is replaced whole (`replace`); the search core never mutates
/// records in place, and a query cycle only ever reads the snapshot.
/// Corpus order is significant: it is the tie-break for equal relevance.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the corpus snapshot.
    ///
    /// Validation is atomic: if any record has a duplicate id or an
    /// out-of-range relevance, the error names the offender and the
    /// previous snapshot stays live.
    pub fn replace(&mut self, records: Vec<Record>) -> Result<(), SearchError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(SearchError::DuplicateRecordId {
                    id: record.id.clone(),
                });
            }
            if !record.relevance.is_finite() || !(0.0..=1.0).contains(&record.relevance) {
                return Err(SearchError::InvalidRelevance {
                    id: record.id.clone(),
                    relevance: record.relevance,
                });
            }
        }

        self.records = records;
        Ok(())
    }

    /// Records in corpus order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-type record counts in fixed domain order, zeros included.
    /// Feeds the "All (n) / Documents (n) / ..." filter affordances.
    pub fn type_counts(&self) -> IndexMap<DomainType, usize> {
        let mut counts: IndexMap<DomainType, usize> =
            DomainType::ALL.iter().map(|t| (*t, 0)).collect();
        for record in &self.records {
            *counts.entry(record.domain_type).or_default() += 1;
        }
        counts
    }
}
