//! Substring matching over a record's indexed text fields

use crate::record::Record;

/// Whether a record matches a normalized query.
///
/// Pure containment over `title`, `description`, and `content`, checked
/// in that order with short-circuit - the first field containing the
/// query satisfies the match, and which field hit is not recorded.
/// No tokenization, stemming, or fuzzy matching; case-insensitivity
/// comes from lower-casing both sides.
pub fn matches(record: &Record, query: &str) -> bool {
    record.title.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.content.to_lowercase().contains(query)
}
