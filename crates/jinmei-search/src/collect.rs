// Grouping of raw dictionary hits into merged result entries.

use hashbrown::HashMap;

use jinmei_core::{NameEntry, NameMatch, NameSearchResult};

/// Accumulates the hits of one search call, merging entries that share
/// readings and translations into a single result entry.
///
/// The dictionary stores many single-spelling entries for what a reader
/// considers one name (いぶ喜 / いぶ希 / いぶ記, all read いぶき, all
/// "Ibuki"). Hits whose group keys are equal are folded together: the
/// later hit contributes only the written forms the earlier one lacks.
/// Groups keep their first-seen position, and the key-to-index map lives
/// no longer than the collector itself.
pub struct NameCollector {
    result: NameSearchResult,
    groups: HashMap<String, usize>,
    max_results: usize,
}

impl NameCollector {
    pub fn new(max_results: usize) -> Self {
        Self {
            result: NameSearchResult::default(),
            groups: HashMap::new(),
            max_results,
        }
    }

    /// Raises the running match length. Never lowers it; shorter probes
    /// come later.
    pub fn note_match_len(&mut self, len: usize) {
        if len > self.result.match_len {
            self.result.match_len = len;
        }
    }

    /// Folds one dictionary hit into the result: merges into the entry
    /// with the same group key if one exists, otherwise appends a new
    /// entry with the given match length.
    ///
    /// Merging extends the existing entry's written forms only; its
    /// readings, translations and match length stay as first seen. A
    /// kana-only hit whose key is already present merges as a no-op.
    pub fn accept(&mut self, entry: NameEntry, match_len: usize) {
        let key = entry_group_key(&entry);
        match self.groups.get(&key) {
            Some(&at) => {
                let forms = &mut self.result.names[at].entry.kanji;
                for form in entry.kanji {
                    if !forms.contains(&form) {
                        forms.push(form);
                    }
                }
            }
            None => {
                self.groups.insert(key, self.result.names.len());
                self.result.names.push(NameMatch { entry, match_len });
            }
        }
    }

    /// True once the result holds `max_results` entries.
    pub fn is_full(&self) -> bool {
        self.result.names.len() >= self.max_results
    }

    /// Consumes the collector. `None` when no hit was ever accepted --
    /// callers distinguish "found nothing" from an empty page.
    pub fn into_result(self) -> Option<NameSearchResult> {
        if self.result.names.is_empty() {
            None
        } else {
            Some(self.result)
        }
    }
}

/// Derives the grouping key of an entry: the readings joined with `-`,
/// a `#` separator, then each translation rendered as its tags, details
/// and (when present) cross-references, `,`-joined within and `-`-joined
/// between, with translations `;`-joined. Plain string equality of the
/// key decides group identity; written forms never enter the key.
fn entry_group_key(entry: &NameEntry) -> String {
    let translations: Vec<String> = entry
        .translations
        .iter()
        .map(|tr| {
            let tags: Vec<&str> = tr.tags.iter().map(|t| t.as_str()).collect();
            let mut rendered = format!("{}-{}", tags.join(","), tr.details.join(","));
            if !tr.xrefs.is_empty() {
                rendered.push('-');
                rendered.push_str(&tr.xrefs.join(","));
            }
            rendered
        })
        .collect();
    format!("{}#{}", entry.readings.join("-"), translations.join(";"))
}
