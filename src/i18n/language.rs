//! Language type: validated language resolved from the registry.
//!
//! A `Language` can only be constructed from an entry of the registry table,
//! either by handbook filename (the resolver used during generation) or by
//! canonical code.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Canonical language code (e.g., "en", "zhCN")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    /// Resolve a handbook filename to its language.
    ///
    /// Returns `None` for filenames that are not in the registry table. This is
    /// not an error: unrecognized files are simply excluded from processing.
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_filename("handbook_FR.md");
    /// assert_eq!(french.map(|l| l.code()), Some("fr"));
    /// ```
    pub fn from_filename(filename: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_filename(filename)
            .map(|config| Language { code: config.code })
    }

    /// Create a Language from a canonical code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_filename` or `from_code`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the handbook filename this language is read from.
    pub fn source_filename(&self) -> &'static str {
        self.config().filename
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
