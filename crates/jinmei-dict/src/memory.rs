// In-memory dictionary with a surface-form index.

use std::fs;
use std::path::Path;

use hashbrown::HashMap;

use jinmei_core::NameEntry;

use crate::{DictError, NameDictionary};

/// A name dictionary held entirely in memory.
///
/// Every written form and every reading of an entry becomes an index key,
/// so a lookup matches whichever surface form the caller holds. Lookups
/// return entries in file order.
pub struct MemoryDictionary {
    entries: Vec<NameEntry>,
    index: HashMap<String, Vec<u32>>,
}

impl MemoryDictionary {
    pub fn new(entries: Vec<NameEntry>) -> Self {
        let mut index: HashMap<String, Vec<u32>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            let id = i as u32;
            for key in entry.kanji.iter().chain(entry.readings.iter()) {
                let ids = index.entry(key.clone()).or_default();
                // Ids are appended in ascending order, so an entry that
                // lists the same surface form twice lands adjacently.
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
        }
        MemoryDictionary { entries, index }
    }

    /// Parses a dictionary from JSONL text: one JSON entry per line, blank
    /// lines and `#` comment lines skipped. A parse failure reports the
    /// 1-based line number.
    pub fn from_jsonl(text: &str) -> Result<Self, DictError> {
        let mut entries = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry =
                serde_json::from_str(line).map_err(|source| DictError::Parse {
                    line: i + 1,
                    source,
                })?;
            entries.push(entry);
        }
        Ok(MemoryDictionary::new(entries))
    }

    /// Reads and parses a JSONL dictionary file.
    pub fn from_path(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        MemoryDictionary::from_jsonl(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameDictionary for MemoryDictionary {
    fn lookup(&self, key: &str) -> Result<Vec<NameEntry>, DictError> {
        let hits = match self.index.get(key) {
            Some(ids) => ids
                .iter()
                .map(|&i| self.entries[i as usize].clone())
                .collect(),
            None => Vec::new(),
        };
        Ok(hits)
    }
}
