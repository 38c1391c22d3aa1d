//! SearchEngine - the external interface of the search core
//!
//! Ties the corpus snapshot, the per-session state, and the debounce
//! scheduler together. Hosts submit query text as it changes and poll
//! from their event loop; a completed cycle comes back as a
//! [`QueryOutcome`] carrying the source text and the capped result list.

use std::time::Instant;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::record::{DomainType, Record};
use crate::scheduler::DebounceScheduler;
use crate::search::{self, Facet, Suggestion};
use crate::session::SearchSession;
use crate::store::RecordStore;

/// Result-ready notification for one completed query cycle.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    /// Normalized query text the cycle ran with
    pub query: String,
    /// Ranked, capped result list
    pub results: Vec<Record>,
}

pub struct SearchEngine {
    store: RecordStore,
    session: SearchSession,
    scheduler: DebounceScheduler,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            store: RecordStore::new(),
            session: SearchSession::new(),
            scheduler: DebounceScheduler::new(config.debounce_window),
        }
    }

    /// Replace the corpus snapshot wholesale.
    ///
    /// Incremental insert/update/delete is the record owners' problem;
    /// they call this again with a fresh snapshot. Rejection is atomic -
    /// on error the previous corpus keeps serving queries.
    pub fn set_corpus(&mut self, records: Vec<Record>) -> Result<(), SearchError> {
        match self.store.replace(records) {
            Ok(()) => {
                debug!(corpus_len = self.store.len(), "corpus replaced");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "corpus replacement rejected");
                Err(err)
            }
        }
    }

    /// Submit query text, starting (or restarting) the debounce window.
    pub fn submit(&mut self, text: &str) {
        self.submit_at(text, Instant::now());
    }

    /// Submit with an explicit clock, for deterministic hosts and tests.
    ///
    /// Empty or whitespace-only text is the "clear" input: it takes
    /// effect immediately, cancelling any pending cycle and emptying the
    /// result list. History is never touched by a clear.
    pub fn submit_at(&mut self, text: &str, now: Instant) {
        if self.scheduler.is_closed() {
            return;
        }
        let query = search::normalize(text);
        if query.is_empty() {
            self.scheduler.cancel();
            self.session.clear_results();
            return;
        }
        self.scheduler.submit(query, now);
    }

    /// Drive the scheduler; runs the pipeline if a debounce deadline has
    /// passed. Call from the host's event loop.
    pub fn poll(&mut self) -> Option<QueryOutcome> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<QueryOutcome> {
        let query = self.scheduler.fire_due(now)?;
        Some(self.execute(query))
    }

    /// Run any pending cycle immediately, skipping the remainder of the
    /// debounce window. For one-shot consumers like the CLI.
    pub fn flush(&mut self) -> Option<QueryOutcome> {
        let query = self.scheduler.flush()?;
        Some(self.execute(query))
    }

    /// Select the result-type narrowing from UI text.
    ///
    /// Unknown text fails with `InvalidFacet` and leaves the current
    /// selection unchanged. A successful change re-filters the live
    /// query synchronously, skipping the debounce window.
    pub fn select_type(&mut self, raw: &str) -> Result<Facet, SearchError> {
        let facet: Facet = raw.parse()?;
        self.session.select(facet);
        if !self.session.query().is_empty() && !self.scheduler.is_closed() {
            let query = self.session.query().to_string();
            self.execute(query);
        }
        Ok(facet)
    }

    /// Explicit clear: same effect as submitting empty text.
    pub fn clear(&mut self) {
        if self.scheduler.is_closed() {
            return;
        }
        self.scheduler.cancel();
        self.session.clear_results();
    }

    /// Close the session: cancels pending work permanently. Submissions
    /// and polls after this are no-ops; read accessors keep working.
    pub fn close(&mut self) {
        self.scheduler.close();
    }

    /// Current ranked result list (at most 20 entries)
    pub fn results(&self) -> &[Record] {
        self.session.results()
    }

    /// Current results partitioned by domain type, groups in
    /// first-appearance order
    pub fn grouped_results(&self) -> IndexMap<DomainType, Vec<Record>> {
        search::group_results(self.session.results())
    }

    /// Recent distinct queries, newest first (at most 10)
    pub fn history(&self) -> Vec<String> {
        self.session.history().snapshot()
    }

    pub fn selected_facet(&self) -> Facet {
        self.session.facet()
    }

    /// Title suggestions for partial input; undebounced and
    /// facet-independent
    pub fn suggest(&self, text: &str) -> Vec<Suggestion> {
        search::suggestions(&self.store, text)
    }

    /// Corpus-wide per-type counts for filter affordances
    pub fn type_counts(&self) -> IndexMap<DomainType, usize> {
        self.store.type_counts()
    }

    pub fn corpus_len(&self) -> usize {
        self.store.len()
    }

    fn execute(&mut self, query: String) -> QueryOutcome {
        let results = search::run(&self.store, &query, self.session.facet());
        debug!(query = %query, matches = results.len(), "query cycle complete");
        self.session.publish(query.clone(), results.clone());
        QueryOutcome { query, results }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn make_record(id: &str, title: &str, domain_type: DomainType, relevance: f32) -> Record {
        Record {
            id: id.to_string(),
            domain_type,
            title: title.to_string(),
            description: String::new(),
            content: String::new(),
            timestamp: Utc::now(),
            category: String::new(),
            relevance,
            source: String::new(),
            metadata: Default::default(),
        }
    }

    fn make_engine() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine
            .set_corpus(vec![
                make_record("1", "Gmail Configuration Reminder", DomainType::Task, 0.92),
                make_record(
                    "2",
                    "Nigeria Printing Business Model",
                    DomainType::Document,
                    0.95,
                ),
            ])
            .unwrap();
        engine
    }

    #[test]
    fn submit_flush_publishes_results() {
        let mut engine = make_engine();
        engine.submit("gmail");
        let outcome = engine.flush().unwrap();

        assert_eq!(outcome.query, "gmail");
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].id, "1");
        assert_eq!(engine.results().len(), 1);

        let groups = engine.grouped_results();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&DomainType::Task][0].id, "1");
    }

    #[test]
    fn clear_submission_takes_effect_immediately() {
        let mut engine = make_engine();
        engine.submit("gmail");
        engine.flush();
        assert_eq!(engine.results().len(), 1);
        engine.submit("gmail again");

        engine.submit("   ");
        assert!(engine.results().is_empty());
        // The pending "gmail again" cycle was cancelled along the way
        assert!(engine.flush().is_none());
        // History untouched by the clear
        assert_eq!(engine.history(), ["gmail"]);
    }

    #[test]
    fn resubmitting_same_query_is_idempotent() {
        let mut engine = make_engine();
        engine.submit("business");
        let first = engine.flush().unwrap();
        engine.submit("business");
        let second = engine.flush().unwrap();

        let ids = |outcome: &QueryOutcome| {
            outcome
                .results
                .iter()
                .map(|r| r.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(engine.history(), ["business"]);
    }

    #[test]
    fn debounce_collapses_rapid_submissions() {
        let base = Instant::now();
        let mut engine = make_engine();

        engine.submit_at("q1", base);
        engine.submit_at("q2", base + Duration::from_millis(100));
        engine.submit_at("gmail", base + Duration::from_millis(150));

        assert!(engine.poll_at(base + Duration::from_millis(200)).is_none());
        let outcome = engine.poll_at(base + Duration::from_millis(460)).unwrap();
        assert_eq!(outcome.query, "gmail");
        // One execution, one history entry
        assert_eq!(engine.history(), ["gmail"]);
        assert!(engine.poll_at(base + Duration::from_millis(900)).is_none());
    }

    #[test]
    fn invalid_facet_leaves_selection_unchanged() {
        let mut engine = make_engine();
        engine.select_type("document").unwrap();

        let err = engine.select_type("emails").unwrap_err();
        assert!(matches!(err, SearchError::InvalidFacet { .. }));
        assert_eq!(engine.selected_facet(), Facet::Type(DomainType::Document));
    }

    #[test]
    fn facet_change_refilters_live_query() {
        let mut engine = make_engine();
        // "i" matches both records
        engine.submit("i");
        engine.flush();
        assert_eq!(engine.results().len(), 2);

        engine.select_type("document").unwrap();
        assert_eq!(engine.results().len(), 1);
        assert_eq!(engine.results()[0].domain_type, DomainType::Document);

        engine.select_type("all").unwrap();
        assert_eq!(engine.results().len(), 2);
    }

    #[test]
    fn two_char_query_skips_history() {
        let mut engine = make_engine();
        engine.submit("bu");
        let outcome = engine.flush().unwrap();
        assert_eq!(outcome.results.len(), 1); // matches "Business"
        assert!(engine.history().is_empty());

        engine.submit("bus");
        engine.flush();
        assert_eq!(engine.history(), ["bus"]);
    }

    #[test]
    fn closed_engine_ignores_everything() {
        let mut engine = make_engine();
        engine.submit("gmail");
        engine.close();

        assert!(engine.flush().is_none());
        engine.submit("printing");
        assert!(engine.poll_at(Instant::now() + Duration::from_secs(5)).is_none());
        assert!(engine.results().is_empty());
    }

    #[test]
    fn rejected_corpus_keeps_previous_snapshot_serving() {
        let mut engine = make_engine();
        let err = engine.set_corpus(vec![
            make_record("x", "Replacement", DomainType::Memory, 0.5),
            make_record("x", "Duplicate", DomainType::Memory, 0.5),
        ]);
        assert!(err.is_err());

        engine.submit("gmail");
        let outcome = engine.flush().unwrap();
        assert_eq!(outcome.results[0].id, "1");
        assert_eq!(engine.corpus_len(), 2);
    }
}
