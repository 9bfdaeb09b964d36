//! Cross-language translation dictionary.
//!
//! Per-language parsed handbooks are unioned into a flat list of
//! [`MergedEntry`] records keyed by `(section, id)`. Sections are visited in
//! the order they are first seen across the input languages, ids likewise
//! within each section, so identical input always yields identical output.

use crate::error::{DictionaryError, Result};
use crate::handbook::ParsedDocument;
use crate::i18n::Language;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Parsed handbooks keyed by language, in merge order.
pub type LanguageDocuments = IndexMap<Language, ParsedDocument>;

/// One `(section, id)` pair with the text every language supplied for it.
///
/// Serializes as a flat record: `{"id": .., "section": .., "<code>": ..}`.
/// Languages without an entry for the pair have no field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub id: String,
    pub section: String,
    #[serde(flatten)]
    pub translations: IndexMap<String, String>,
}

impl MergedEntry {
    /// Text for a language code, if that language defined this entry.
    pub fn translation(&self, code: &str) -> Option<&str> {
        self.translations.get(code).map(String::as_str)
    }

    /// Language codes present on this entry, in field order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

/// Ordered sequence of merged entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: Vec<MergedEntry>,
}

impl TranslationDictionary {
    pub fn entries(&self) -> &[MergedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergedEntry> {
        self.entries.iter()
    }

    /// Find the entry for a `(section, id)` pair.
    pub fn get(&self, section: &str, id: &str) -> Option<&MergedEntry> {
        self.entries
            .iter()
            .find(|entry| entry.section == section && entry.id == id)
    }

    /// Display text of `(section, id)` in the given language.
    pub fn lookup(&self, section: &str, id: &str, code: &str) -> Option<&str> {
        self.get(section, id)?.translation(code)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(DictionaryError::Serialize)
    }

    /// Minified JSON.
    pub fn to_compact_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(DictionaryError::Serialize)
    }

    /// Parse a dictionary from either artifact form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a previously written dictionary artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let load_error = |source: Box<dyn std::error::Error + Send + Sync>| DictionaryError::Load {
            path: path.to_path_buf(),
            source,
        };

        let json = std::fs::read_to_string(path).map_err(|e| load_error(Box::new(e)))?;
        Self::from_json(&json).map_err(|e| load_error(Box::new(e)))
    }
}

impl From<Vec<MergedEntry>> for TranslationDictionary {
    fn from(entries: Vec<MergedEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a TranslationDictionary {
    type Item = &'a MergedEntry;
    type IntoIter = std::slice::Iter<'a, MergedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Union all languages' handbooks into one dictionary.
///
/// Inputs are only borrowed; every entry owns copies of its strings. A pair
/// for which no language has non-empty text is dropped.
pub fn merge(documents: &LanguageDocuments) -> TranslationDictionary {
    let sections: IndexSet<&str> = documents
        .values()
        .flat_map(|doc| doc.keys().map(String::as_str))
        .collect();

    info!("Found sections: {:?}", sections);

    let mut entries = Vec::new();

    for section in sections {
        info!("Processing section: {}", section);

        let ids: IndexSet<&str> = documents
            .values()
            .filter_map(|doc| doc.get(section))
            .flat_map(|section_entries| section_entries.keys().map(String::as_str))
            .collect();

        for id in ids {
            let translations: IndexMap<String, String> = documents
                .iter()
                .filter_map(|(language, doc)| {
                    let text = doc.get(section)?.get(id)?;
                    (!text.is_empty()).then(|| (language.code().to_string(), text.clone()))
                })
                .collect();

            if translations.is_empty() {
                continue;
            }

            entries.push(MergedEntry {
                id: id.to_string(),
                section: section.to_string(),
                translations,
            });
        }
    }

    info!("Generated {} translation entries", entries.len());

    TranslationDictionary { entries }
}
