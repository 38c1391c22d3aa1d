//! One synchronous query cycle

use super::facet::Facet;
use super::matcher::matches;
use super::normalize::normalize;
use super::rank::rank;
use crate::record::Record;
use crate::store::RecordStore;

/// Run the full pipeline for one query: normalize, facet-filter, match,
/// rank, cap. Facet filtering runs before substring matching so a
/// narrowed query never scans text it would discard anyway.
///
/// Empty or whitespace-only text short-circuits to an empty result list.
pub fn run(store: &RecordStore, query: &str, facet: Facet) -> Vec<Record> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<Record> = store
        .records()
        .iter()
        .filter(|r| facet.admits(r))
        .filter(|r| matches(r, &query))
        .cloned()
        .collect();

    rank(candidates)
}
