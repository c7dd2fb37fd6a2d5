// Search output types.

use serde::Serialize;

use crate::entry::NameEntry;

/// A dictionary entry matched by a search, annotated with how much of
/// the original input it covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatch {
    #[serde(flatten)]
    pub entry: NameEntry,
    /// Length in characters of the matched portion of the original
    /// input, before any normalization.
    pub match_len: usize,
}

/// The result of a name search that found at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSearchResult {
    /// Matched entries in acceptance order.
    pub names: Vec<NameMatch>,
    /// True when the result was truncated at the caller's limit.
    pub more: bool,
    /// The longest `match_len` among `names`.
    pub match_len: usize,
}
