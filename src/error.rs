//! Error taxonomy for the search core.
//!
//! The pipeline performs no I/O, so the taxonomy is narrow: bad facet
//! text from the UI and invalid corpus replacements. Empty query text is
//! not an error - it is the valid "clear results" input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Facet text did not name a known domain type or "all".
    /// The session's current selection is left unchanged.
    #[error("unknown record type {raw:?} (expected all, document, memory, task, or activity)")]
    InvalidFacet { raw: String },

    /// Corpus replacement carried two records with the same id.
    /// The replacement is rejected atomically; the previous snapshot stays live.
    #[error("duplicate record id {id:?} in corpus replacement")]
    DuplicateRecordId { id: String },

    /// A record's relevance score was non-finite or outside [0, 1].
    /// Rejected with the same atomicity as duplicate ids.
    #[error("record {id:?} has relevance {relevance} outside [0.0, 1.0]")]
    InvalidRelevance { id: String, relevance: f32 },
}
