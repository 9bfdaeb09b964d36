//! Merge per-language handbook documents into a single translation dictionary.
//!
//! The pipeline is linear: handbooks are discovered and resolved to a
//! language ([`i18n`]), parsed into sections and entries ([`handbook`]),
//! unioned by `(section, id)` ([`dictionary`]) and finally written out with
//! coverage statistics ([`report`]). [`generator`] drives the whole run.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod generator;
pub mod handbook;
pub mod i18n;
pub mod report;

pub use config::Config;
pub use dictionary::{merge, MergedEntry, TranslationDictionary};
pub use error::DictionaryError;
pub use generator::generate;
