//! Japanese orthography utilities for name dictionary search.
//!
//! Dictionary readings are indexed in hiragana, so lookup candidates have
//! to be reduced to that form first and then fanned out into the spellings
//! a reader might actually encounter:
//!
//! - [`normalize`] -- katakana and half-width kana to hiragana, with a
//!   source length table so matches can be reported against the original
//!   text
//! - [`choon`] -- prolonged sound mark (ー) expansion into explicit vowels
//! - [`kyuujitai`] -- old-form (pre-reform) kanji to their modern
//!   equivalents
//! - [`yoon`] -- contracted sound detection, used to keep two-character
//!   sound units intact when shortening a lookup key

pub mod choon;
pub mod kyuujitai;
pub mod normalize;
pub mod yoon;

pub use choon::expand_choon;
pub use kyuujitai::kyuujitai_to_shinjitai;
pub use normalize::{katakana_to_hiragana, normalize_input};
pub use yoon::ends_in_yoon;
