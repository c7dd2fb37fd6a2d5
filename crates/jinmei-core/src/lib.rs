//! Shared types for Japanese name dictionary search.
//!
//! This crate holds the data model used across the jinmei workspace:
//!
//! - [`entry`] -- dictionary record types ([`NameEntry`], [`NameTranslation`],
//!   [`NameType`]) in the JMnedict-shaped wire format
//! - [`result`] -- search output types ([`NameMatch`], [`NameSearchResult`])
//! - [`script`] -- character-level Japanese script classification and kana
//!   conversion helpers

pub mod entry;
pub mod result;
pub mod script;

pub use entry::{NameEntry, NameTranslation, NameType};
pub use result::{NameMatch, NameSearchResult};
