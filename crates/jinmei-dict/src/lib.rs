//! Indexed name dictionary backend.
//!
//! The search engine consumes dictionaries through the [`NameDictionary`]
//! trait, a single exact-match lookup method. Keeping the seam this
//! narrow lets tests drive the engine with trivial fakes and keeps every
//! indexing decision (which surface forms are keys, how duplicates
//! collapse) on this side of the boundary.
//!
//! - [`memory`] -- in-memory dictionary with a hashbrown surface-form
//!   index and a JSONL loader

pub mod memory;

pub use memory::MemoryDictionary;

use jinmei_core::NameEntry;

/// Error type for dictionary loading and lookup.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Exact-match lookup over an indexed name dictionary.
///
/// `lookup` returns every entry indexed under exactly `key` -- no prefix
/// or fuzzy matching -- as owned copies in a stable order. Implementations
/// must tolerate concurrent read access; one dictionary may serve several
/// searches at once.
pub trait NameDictionary: Send + Sync {
    fn lookup(&self, key: &str) -> Result<Vec<NameEntry>, DictError>;
}
