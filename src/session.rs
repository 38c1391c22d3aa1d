//! Per-session search state
//!
//! One session per open search surface. State is explicit and owned -
//! pipeline functions stay pure, and the engine is the only mutator:
//! completed cycles publish results and history, facet selection updates
//! the narrowing. Records in `results` are copies of store entries; the
//! session never holds references into the corpus.

use crate::record::Record;
use crate::search::{Facet, SearchHistory};

#[derive(Debug, Default)]
pub struct SearchSession {
    /// Last normalized query text a cycle ran with
    current_query: String,
    facet: Facet,
    /// Ranked, capped result list from the latest completed cycle
    results: Vec<Record>,
    history: SearchHistory,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.current_query
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    pub fn results(&self) -> &[Record] {
        &self.results
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Publish a completed cycle: result list, current query, and a
    /// history entry (subject to the history's own length/dedup rules).
    pub(crate) fn publish(&mut self, query: String, results: Vec<Record>) {
        self.history.record(&query);
        self.current_query = query;
        self.results = results;
    }

    /// Clear submission: empty the result list and forget the current
    /// query without touching history.
    pub(crate) fn clear_results(&mut self) {
        self.current_query.clear();
        self.results.clear();
    }

    pub(crate) fn select(&mut self, facet: Facet) {
        self.facet = facet;
    }
}
