// The probe-shortening search loop.

use jinmei_core::NameSearchResult;
use jinmei_dict::NameDictionary;
use jinmei_jp::{ends_in_yoon, expand_choon, kyuujitai_to_shinjitai};

use crate::SearchError;
use crate::collect::NameCollector;

/// Searches the dictionary for the longest matching prefixes of `input`.
///
/// The full input is probed first. Each probe is looked up as written and
/// as its equivalent spellings (prolonged sound marks expanded, old kanji
/// forms modernized when that changes the string), then shortened from
/// the end until the input is exhausted, the result holds `max_results`
/// entries, or the probe's effective length falls below
/// `min_input_length`.
///
/// `input_lengths[n]` must give the effective length of the first `n`
/// characters of `input` for every prefix length; the engine consults the
/// table, it never computes lengths itself. [`NameSearcher`] builds the
/// table during normalization so that effective lengths count characters
/// of the pre-normalization text.
///
/// Returns `Ok(None)` when the loop ran to completion without accepting a
/// single hit. The first dictionary error aborts the whole search and
/// discards anything accepted before it.
///
/// [`NameSearcher`]: crate::searcher::NameSearcher
pub fn name_search(
    dict: &dyn NameDictionary,
    input: &str,
    input_lengths: &[usize],
    min_input_length: Option<usize>,
    max_results: usize,
) -> Result<Option<NameSearchResult>, SearchError> {
    let mut collector = NameCollector::new(max_results);
    let mut probe: Vec<char> = input.chars().collect();

    while !probe.is_empty() {
        let effective_len = input_lengths[probe.len()];
        if min_input_length.is_some_and(|min| min > effective_len) {
            break;
        }

        let probe_str: String = probe.iter().collect();
        let mut variants = vec![probe_str.clone()];
        variants.extend(expand_choon(&probe_str));
        let modernized = kyuujitai_to_shinjitai(&probe_str);
        if modernized != probe_str {
            variants.push(modernized);
        }

        for variant in &variants {
            let hits = dict.lookup(variant)?;
            if hits.is_empty() {
                continue;
            }
            collector.note_match_len(effective_len);
            for hit in hits {
                collector.accept(hit, effective_len);
                if collector.is_full() {
                    return Ok(collector.into_result());
                }
            }
        }

        // Shortening follows the original input's characters; variant
        // substitutions never change which boundaries are tried next.
        let step = if ends_in_yoon(&probe_str) { 2 } else { 1 };
        probe.truncate(probe.len().saturating_sub(step));
    }

    Ok(collector.into_result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use hashbrown::HashMap;

    use jinmei_core::{NameEntry, NameTranslation, NameType};
    use jinmei_dict::DictError;

    fn entry(id: u32, kanji: &[&str], reading: &str, detail: &str) -> NameEntry {
        NameEntry {
            id,
            kanji: kanji.iter().map(|s| s.to_string()).collect(),
            readings: vec![reading.to_string()],
            translations: vec![NameTranslation {
                tags: vec![NameType::Surname],
                details: vec![detail.to_string()],
                xrefs: Vec::new(),
            }],
        }
    }

    fn identity_lengths(input: &str) -> Vec<usize> {
        (0..=input.chars().count()).collect()
    }

    /// Exact-match mock that records every key it is asked for.
    struct MockDictionary {
        entries: HashMap<String, Vec<NameEntry>>,
        log: Mutex<Vec<String>>,
    }

    impl MockDictionary {
        fn new() -> Self {
            Self {
                entries: HashMap::new(),
                log: Mutex::new(Vec::new()),
            }
        }

        fn with(mut self, key: &str, entry: NameEntry) -> Self {
            self.entries.entry(key.to_string()).or_default().push(entry);
            self
        }

        fn lookups(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    impl NameDictionary for MockDictionary {
        fn lookup(&self, key: &str) -> Result<Vec<NameEntry>, DictError> {
            self.log.lock().unwrap().push(key.to_string());
            Ok(self.entries.get(key).cloned().unwrap_or_default())
        }
    }

    /// Fails lookups of one specific key, answering the rest normally.
    struct FailingDictionary {
        inner: MockDictionary,
        fail_key: String,
    }

    impl NameDictionary for FailingDictionary {
        fn lookup(&self, key: &str) -> Result<Vec<NameEntry>, DictError> {
            if key == self.fail_key {
                return Err(DictError::Unavailable("index dropped".to_string()));
            }
            self.inner.lookup(key)
        }
    }

    #[test]
    fn longest_prefix_wins() {
        let dict =
            MockDictionary::new().with("やまだ", entry(1, &["山田"], "やまだ", "Yamada"));
        let input = "やまだです";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 1);
        assert_eq!(result.match_len, 3);
        assert_eq!(result.names[0].match_len, 3);
        // One lookup per probe: every prefix down to a single character.
        assert_eq!(
            dict.lookups(),
            vec!["やまだです", "やまだで", "やまだ", "やま", "や"]
        );
    }

    #[test]
    fn shorter_matches_follow_the_longest() {
        let dict = MockDictionary::new()
            .with("やまだ", entry(1, &["山田"], "やまだ", "Yamada"))
            .with("やま", entry(2, &["山"], "やま", "Yama"));
        let input = "やまだ";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 2);
        assert_eq!(result.names[0].entry.id, 1);
        assert_eq!(result.names[0].match_len, 3);
        assert_eq!(result.names[1].entry.id, 2);
        assert_eq!(result.names[1].match_len, 2);
        // The running match length stays at the longest match.
        assert_eq!(result.match_len, 3);
    }

    #[test]
    fn choon_expansion_reaches_spelled_vowels() {
        let dict =
            MockDictionary::new().with("おおさか", entry(1, &["大阪"], "おおさか", "Osaka"));
        let input = "おーさか";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 1);
        assert_eq!(result.match_len, 4);
        // The probe itself is tried first, then its expansions in order.
        assert_eq!(
            dict.lookups()[..3],
            ["おーさか", "おうさか", "おおさか"]
        );
    }

    #[test]
    fn both_choon_spellings_are_found() {
        let dict = MockDictionary::new()
            .with("おうさか", entry(1, &["逢坂"], "おうさか", "Osaka"))
            .with("おおさか", entry(2, &["大阪"], "おおさか", "Osaka"));
        let input = "おーさか";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 2);
        assert_eq!(result.names[0].entry.id, 1);
        assert_eq!(result.names[1].entry.id, 2);
        assert_eq!(result.names[0].match_len, 4);
        assert_eq!(result.names[1].match_len, 4);
    }

    #[test]
    fn same_entry_under_two_variants_merges() {
        // A dictionary indexed by several readings returns the entry once
        // per matching variant; the duplicates collapse to one group.
        let e = entry(1, &["逢坂"], "おうさか", "Osaka");
        let dict = MockDictionary::new()
            .with("おうさか", e.clone())
            .with("おおさか", e);
        let input = "おーさか";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 1);
        assert_eq!(result.names[0].entry.kanji, vec!["逢坂"]);
    }

    #[test]
    fn old_kanji_variant_matches() {
        let dict =
            MockDictionary::new().with("国枝", entry(1, &["国枝"], "くにえだ", "Kunieda"));
        let input = "國枝";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 1);
        assert_eq!(result.match_len, 2);
        // The modernized spelling is queried only where it differs.
        assert_eq!(dict.lookups(), vec!["國枝", "国枝", "國", "国"]);
    }

    #[test]
    fn yoon_shortening_skips_the_whole_unit() {
        let dict = MockDictionary::new().with("と", entry(1, &["戸"], "と", "To"));
        let input = "とうきょ";
        let result = name_search(&dict, input, &identity_lengths(input), None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.match_len, 1);
        // きょ is dropped as one unit; とうき is never probed.
        assert_eq!(dict.lookups(), vec!["とうきょ", "とう", "と"]);
    }

    #[test]
    fn max_results_cuts_off_mid_probe() {
        let dict = MockDictionary::new()
            .with("やまだ", entry(1, &["山田"], "やまだ", "Yamada"))
            .with("やまだ", entry(2, &["山多"], "やまだ", "Yamata"));
        let input = "やまだ";
        let result = name_search(&dict, input, &identity_lengths(input), None, 1)
            .unwrap()
            .unwrap();

        assert_eq!(result.names.len(), 1);
        assert_eq!(result.names[0].entry.id, 1);
        // The second hit of the same lookup is dropped and no further
        // lookup is ever issued.
        assert_eq!(dict.lookups().len(), 1);
    }

    #[test]
    fn merges_do_not_count_toward_max_results() {
        let dict = MockDictionary::new()
            .with("おおた", entry(1, &["大田"], "おおた", "Ota"))
            .with("おおた", entry(2, &["太田"], "おおた", "Ota"));
        let input = "おおた";
        let result = name_search(&dict, input, &identity_lengths(input), None, 2)
            .unwrap()
            .unwrap();

        // Both hits share one group, so the search keeps going to
        // shorter probes instead of stopping at a phantom second entry.
        assert_eq!(result.names.len(), 1);
        assert_eq!(result.names[0].entry.kanji, vec!["大田", "太田"]);
        assert!(dict.lookups().len() > 1);
    }

    #[test]
    fn min_input_length_blocks_all_lookups() {
        let dict =
            MockDictionary::new().with("やまだ", entry(1, &["山田"], "やまだ", "Yamada"));
        let input = "やまだ";
        let result =
            name_search(&dict, input, &identity_lengths(input), Some(4), 10).unwrap();

        assert!(result.is_none());
        assert!(dict.lookups().is_empty(), "too-short probes are never queried");
    }

    #[test]
    fn min_input_length_stops_shrinking() {
        let dict = MockDictionary::new().with("やま", entry(1, &["山"], "やま", "Yama"));
        let input = "やまだ";
        let result =
            name_search(&dict, input, &identity_lengths(input), Some(3), 10).unwrap();

        // やま would match, but its effective length is below the minimum.
        assert!(result.is_none());
        assert_eq!(dict.lookups(), vec!["やまだ"]);
    }

    #[test]
    fn lookup_failure_aborts_the_search() {
        let inner =
            MockDictionary::new().with("おーさか", entry(1, &["逢坂"], "おうさか", "Osaka"));
        let dict = FailingDictionary {
            inner,
            fail_key: "おうさか".to_string(),
        };
        let input = "おーさか";

        // The first variant already produced a hit; the failure on the
        // second variant still discards everything.
        let err = name_search(&dict, input, &identity_lengths(input), None, 10).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Dictionary(DictError::Unavailable(_))
        ));
    }

    #[test]
    fn nothing_found_is_absent_not_empty() {
        let dict = MockDictionary::new();
        let result = name_search(&dict, "ぞぞ", &identity_lengths("ぞぞ"), None, 10).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_input_is_absent() {
        let dict = MockDictionary::new();
        let result = name_search(&dict, "", &[0], None, 10).unwrap();
        assert!(result.is_none());
        assert!(dict.lookups().is_empty());
    }

    #[test]
    fn effective_lengths_come_from_the_table() {
        let dict = MockDictionary::new().with("ぺこ", entry(1, &[], "ぺこ", "Peko"));
        // Two normalized characters covering three source characters.
        let lengths = [0, 2, 3];
        let result = name_search(&dict, "ぺこ", &lengths, None, 10)
            .unwrap()
            .unwrap();

        assert_eq!(result.match_len, 3);
        assert_eq!(result.names[0].match_len, 3);
    }
}
