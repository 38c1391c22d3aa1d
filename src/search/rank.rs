//! Relevance ranking and the hard result cap

use std::cmp::Ordering;

use crate::record::Record;

/// Result lists never exceed this many entries, for any corpus or query.
pub const RESULT_CAP: usize = 20;

/// Order candidates by relevance descending and truncate to [`RESULT_CAP`].
///
/// The sort is stable, so records with equal relevance keep their corpus
/// order. That tie-break is a requirement, not an accident: it makes
/// ranking deterministic for equal scores.
pub fn rank(mut candidates: Vec<Record>) -> Vec<Record> {
    candidates.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(RESULT_CAP);
    candidates
}
