//! Incremental input suggestions
//!
//! Lighter than a full query cycle: undebounced, facet-independent, and
//! matched over `title` and `description` only. Results come back in
//! corpus order, not relevance order.

use serde::Serialize;

use super::normalize::normalize;
use crate::record::DomainType;
use crate::store::RecordStore;

/// Suggestions never exceed this many entries.
pub const SUGGESTION_CAP: usize = 5;

/// Inputs below this many chars are too short to suggest for.
const MIN_INPUT_CHARS: usize = 2;

/// A lightweight hint for partial input: the record's title plus enough
/// identity to open it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub domain_type: DomainType,
}

/// Titles of up to [`SUGGESTION_CAP`] records whose title or description
/// contains the normalized input. Empty for inputs under two characters.
pub fn suggestions(store: &RecordStore, raw: &str) -> Vec<Suggestion> {
    let query = normalize(raw);
    if query.chars().count() < MIN_INPUT_CHARS {
        return Vec::new();
    }

    store
        .records()
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&query)
                || r.description.to_lowercase().contains(&query)
        })
        .take(SUGGESTION_CAP)
        .map(|r| Suggestion {
            id: r.id.clone(),
            text: r.title.clone(),
            domain_type: r.domain_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::Utc;

    fn make_record(id: &str, title: &str, description: &str, content: &str) -> Record {
        Record {
            id: id.to_string(),
            domain_type: DomainType::Document,
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            category: String::new(),
            relevance: 0.5,
            source: String::new(),
            metadata: Default::default(),
        }
    }

    fn make_store(records: Vec<Record>) -> RecordStore {
        let mut store = RecordStore::new();
        store.replace(records).unwrap();
        store
    }

    #[test]
    fn short_input_yields_nothing() {
        let store = make_store(vec![make_record("a", "Gmail Reminder", "", "")]);
        assert!(suggestions(&store, "g").is_empty());
        assert_eq!(suggestions(&store, "gm").len(), 1);
    }

    #[test]
    fn content_matches_do_not_suggest() {
        let store = make_store(vec![make_record(
            "a",
            "Strategic Framework",
            "decision analysis",
            "hidden gmail mention",
        )]);
        assert!(suggestions(&store, "gmail").is_empty());
        assert_eq!(suggestions(&store, "decision").len(), 1);
    }

    #[test]
    fn capped_at_five_in_corpus_order() {
        let records: Vec<_> = (0..8)
            .map(|i| make_record(&format!("r{i}"), &format!("Budget item {i}"), "", ""))
            .collect();
        let store = make_store(records);

        let hits = suggestions(&store, "budget");
        assert_eq!(hits.len(), SUGGESTION_CAP);
        assert_eq!(hits[0].id, "r0");
        assert_eq!(hits[0].text, "Budget item 0");
    }
}
