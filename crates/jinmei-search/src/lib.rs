//! Incremental longest-match search over a Japanese name dictionary.
//!
//! Given free text starting at a name, the engine finds the longest
//! prefix the dictionary knows: it probes the full input first, fans each
//! probe out into equivalent spellings (prolonged sound marks expanded,
//! old kanji forms modernized), and shortens the probe until something
//! matches or nothing is left. Hits that share readings and translations
//! are merged into one result entry carrying every written form seen.
//!
//! - [`searcher`] -- [`NameSearcher`], the owning handle most callers
//!   want: normalizes raw input, then runs the search loop
//! - [`search`] -- the probe-shortening loop itself ([`name_search`]),
//!   for callers that normalize on their own terms
//! - [`collect`] -- grouping of raw dictionary hits into merged entries

pub mod collect;
pub mod search;
pub mod searcher;

pub use search::name_search;
pub use searcher::{DEFAULT_MAX_RESULTS, NameSearcher};

use jinmei_dict::DictError;

/// Error type for a failed search.
///
/// A dictionary failure aborts the whole search and discards anything
/// accepted so far: a failing backend means the index is gone, and a
/// partial result would be indistinguishable from a complete one.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Dictionary(#[from] DictError),
}
