//! Search pipeline - pure query processing over a corpus snapshot
//!
//! Public interface:
//! - `run` for one synchronous query cycle (normalize -> filter -> match -> rank)
//! - `Facet` for domain-type narrowing
//! - `group_results` for the insertion-ordered display grouping
//! - `SearchHistory` for the bounded recent-query list
//! - `suggestions` for incremental input hints
//!
//! Every function here is pure over its inputs; session state lives in
//! `crate::session` and scheduling in `crate::scheduler`.

mod facet;
mod group;
mod history;
mod matcher;
mod normalize;
mod pipeline;
mod rank;
mod suggest;

pub use facet::Facet;
pub use group::group_results;
pub use history::{SearchHistory, HISTORY_CAP};
pub use matcher::matches;
pub use normalize::normalize;
pub use pipeline::run;
pub use rank::{rank, RESULT_CAP};
pub use suggest::{suggestions, Suggestion, SUGGESTION_CAP};
