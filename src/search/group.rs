//! Per-type grouping of ranked results for display

use indexmap::IndexMap;

use crate::record::{DomainType, Record};

/// Partition a ranked (already-capped) result list into per-type groups.
///
/// One pass over the list; a group is created the first time its type
/// appears, so iterating the map yields groups in first-appearance order
/// and each group preserves rank order exactly.
pub fn group_results(results: &[Record]) -> IndexMap<DomainType, Vec<Record>> {
    let mut groups: IndexMap<DomainType, Vec<Record>> = IndexMap::new();
    for record in results {
        groups
            .entry(record.domain_type)
            .or_default()
            .push(record.clone());
    }
    groups
}
