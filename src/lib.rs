//! Cross-domain workspace search.
//!
//! Searches a heterogeneous in-memory corpus of workspace records
//! (documents, memories, tasks, activities) with debounced query
//! scheduling, relevance ranking, faceted filtering, display grouping,
//! and a bounded recent-query history.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod record;
pub mod scheduler;
pub mod search;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::SearchConfig;
pub use engine::{QueryOutcome, SearchEngine};
pub use error::SearchError;
pub use record::{DomainType, Record};
pub use search::{Facet, Suggestion};
pub use store::RecordStore;
