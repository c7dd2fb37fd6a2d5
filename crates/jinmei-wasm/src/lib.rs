// WASM bindings for Japanese name search.
//
// Provides a `WasmNameSearch` class exported via wasm-bindgen that wraps
// the `NameSearcher` from jinmei-search. Search results are serialized
// to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const search = new WasmNameSearch(jsonlText);
//   search.search("山田太郎です");   // => { names: [...], more: false, matchLen: 2 }
//   search.search("ほげほげ");       // => null
//   search.normalize("ﾔﾏﾀﾞ");        // => { text: "やまだ", lengths: [0, 2, 3, 5] }
//   search.entryCount();             // => 740000

use serde::Serialize;
use wasm_bindgen::prelude::*;

use jinmei_dict::MemoryDictionary;
use jinmei_jp::normalize_input;
use jinmei_search::{DEFAULT_MAX_RESULTS, NameSearcher, SearchError};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable result of normalizing an input string.
///
/// `lengths[i]` is the number of characters of the original input that
/// produced the first `i` characters of `text`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsNormalized {
    text: String,
    lengths: Vec<usize>,
}

fn search_error_to_js(e: SearchError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmNameSearch
// ============================================================================

/// Japanese name-dictionary search engine for WebAssembly.
///
/// Finds the dictionary entries matching the longest prefix of a piece
/// of text, folding katakana, prolonged-vowel spellings and old kanji
/// forms into the lookup.
#[wasm_bindgen]
pub struct WasmNameSearch {
    searcher: NameSearcher<MemoryDictionary>,
}

#[wasm_bindgen]
impl WasmNameSearch {
    /// Create a new WasmNameSearch instance from dictionary data.
    ///
    /// - `jsonl`: the name dictionary, one JSON entry per line
    #[wasm_bindgen(constructor)]
    pub fn new(jsonl: &str) -> Result<WasmNameSearch, JsError> {
        let dict = MemoryDictionary::from_jsonl(jsonl).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmNameSearch {
            searcher: NameSearcher::new(dict),
        })
    }

    /// Look up names matching the longest prefix of `text`.
    ///
    /// Returns a result object with fields `names`, `more` and `matchLen`,
    /// or null when nothing in the dictionary matches. `maxResults` caps
    /// the number of result groups (default: 20).
    pub fn search(&mut self, text: &str, max_results: Option<usize>) -> Result<JsValue, JsError> {
        self.searcher
            .set_max_results(max_results.unwrap_or(DEFAULT_MAX_RESULTS));
        match self.searcher.search(text) {
            Ok(Some(result)) => {
                serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
            }
            Ok(None) => Ok(JsValue::NULL),
            Err(e) => Err(search_error_to_js(e)),
        }
    }

    /// Set the minimum number of input characters required before any
    /// lookup is attempted. Pass undefined (or omit) to clear it.
    #[wasm_bindgen(js_name = "setMinInputLength")]
    pub fn set_min_input_length(&mut self, value: Option<usize>) {
        self.searcher.set_min_input_length(value);
    }

    /// Normalize text to its hiragana lookup form.
    ///
    /// Returns an object with fields `text` (the normalized string) and
    /// `lengths` (the per-prefix character counts of the original input,
    /// useful for mapping match lengths back to source positions).
    pub fn normalize(&self, text: &str) -> Result<JsValue, JsError> {
        let (normalized, lengths) = normalize_input(text);
        let dto = JsNormalized {
            text: normalized,
            lengths,
        };
        serde_wasm_bindgen::to_value(&dto).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Number of entries in the loaded dictionary.
    #[wasm_bindgen(js_name = "entryCount")]
    pub fn entry_count(&self) -> usize {
        self.searcher.dictionary().len()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    /// In practice, WASM memory is managed by the garbage collector
    /// (or FinalizationRegistry), but this method allows explicit cleanup.
    pub fn terminate(self) {
        // Drop self, releasing the dictionary.
    }
}
