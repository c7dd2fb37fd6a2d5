// Owning search handle: normalization composed with the search loop.

use jinmei_core::NameSearchResult;
use jinmei_dict::NameDictionary;
use jinmei_jp::normalize_input;

use crate::SearchError;
use crate::search::name_search;

/// Number of entries a search returns unless configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// A configured search handle that owns its dictionary.
///
/// Raw input is welcome in any mix of scripts: katakana, half-width kana
/// and old kanji forms are all reduced to the dictionary's indexed
/// spelling before the probe loop runs. Reported match lengths count
/// characters of the raw input, not of the normalized text.
pub struct NameSearcher<D> {
    dict: D,
    max_results: usize,
    min_input_length: Option<usize>,
}

impl<D: NameDictionary> NameSearcher<D> {
    pub fn new(dict: D) -> Self {
        Self {
            dict,
            max_results: DEFAULT_MAX_RESULTS,
            min_input_length: None,
        }
    }

    /// Caps the number of returned entries. Zero is pinned to one; a
    /// search that cannot return anything is a contradiction.
    pub fn set_max_results(&mut self, max_results: usize) {
        self.max_results = max_results.max(1);
    }

    /// Requires matches to cover at least `min` characters of the raw
    /// input. Shorter probes are never looked up.
    pub fn set_min_input_length(&mut self, min: Option<usize>) {
        self.min_input_length = min;
    }

    /// Normalizes `input` and searches for its longest matching prefixes.
    pub fn search(&self, input: &str) -> Result<Option<NameSearchResult>, SearchError> {
        let (normalized, lengths) = normalize_input(input);
        if normalized.is_empty() {
            return Ok(None);
        }
        name_search(
            &self.dict,
            &normalized,
            &lengths,
            self.min_input_length,
            self.max_results,
        )
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jinmei_dict::MemoryDictionary;

    fn searcher() -> NameSearcher<MemoryDictionary> {
        let dict = MemoryDictionary::from_jsonl(
            r#"
{"id":1,"k":["山田"],"r":["やまだ"],"tr":[{"type":["surname"],"det":["Yamada"]}]}
{"id":2,"k":["山多"],"r":["やまだ"],"tr":[{"type":["surname"],"det":["Yamata"]}]}
"#,
        )
        .unwrap();
        NameSearcher::new(dict)
    }

    #[test]
    fn empty_input_finds_nothing() {
        let s = searcher();
        assert!(s.search("").unwrap().is_none());
    }

    #[test]
    fn katakana_input_matches_hiragana_reading() {
        let s = searcher();
        let result = s.search("ヤマダ").unwrap().unwrap();
        assert_eq!(result.names.len(), 2);
        assert_eq!(result.match_len, 3);
    }

    #[test]
    fn zero_max_results_is_pinned_to_one() {
        let mut s = searcher();
        s.set_max_results(0);
        let result = s.search("やまだ").unwrap().unwrap();
        assert_eq!(result.names.len(), 1);
    }

    #[test]
    fn min_input_length_suppresses_short_matches() {
        let mut s = searcher();
        s.set_min_input_length(Some(4));
        assert!(s.search("やまだ").unwrap().is_none());
        s.set_min_input_length(None);
        assert!(s.search("やまだ").unwrap().is_some());
    }
}
