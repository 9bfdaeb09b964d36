//! Language registry: Single source of truth for all supported handbook languages.
//!
//! This module provides a centralized registry of every language a handbook can
//! be written in, together with the source filename that identifies it. It uses
//! a singleton pattern with `OnceLock` to ensure thread-safe initialization and
//! access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains the canonical code used as the field name in merged entries, the
/// handbook filename it is resolved from, and display names.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Canonical language code (e.g., "en", "zhCN")
    pub code: &'static str,

    /// Handbook filename this language is read from (e.g., "handbook_EN.md")
    pub filename: &'static str,

    /// English name of the language (e.g., "English", "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "日本語")
    pub native_name: &'static str,
}

/// Global language registry singleton.
///
/// The table is closed: filenames that are not listed here are never
/// processed. Lookups are exact and case-sensitive.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its handbook filename.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the filename is in the table
    /// * `None` if the file is not a recognized handbook
    pub fn get_by_filename(&self, filename: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.filename == filename)
    }

    /// Get a language configuration by its canonical code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, in table order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

/// Default language configurations.
///
/// Indonesian is registered as `idID` so that it cannot collide with the
/// `id` field of a merged entry.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            filename: "handbook_EN.md",
            name: "English",
            native_name: "English",
        },
        LanguageConfig {
            code: "ja",
            filename: "handbook_JP.md",
            name: "Japanese",
            native_name: "日本語",
        },
        LanguageConfig {
            code: "zhCN",
            filename: "handbook_CHS.md",
            name: "Simplified Chinese",
            native_name: "简体中文",
        },
        LanguageConfig {
            code: "zhTW",
            filename: "handbook_CHT.md",
            name: "Traditional Chinese",
            native_name: "繁體中文",
        },
        LanguageConfig {
            code: "de",
            filename: "handbook_DE.md",
            name: "German",
            native_name: "Deutsch",
        },
        LanguageConfig {
            code: "es",
            filename: "handbook_ES.md",
            name: "Spanish",
            native_name: "Español",
        },
        LanguageConfig {
            code: "fr",
            filename: "handbook_FR.md",
            name: "French",
            native_name: "Français",
        },
        LanguageConfig {
            code: "idID",
            filename: "handbook_ID.md",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
        },
        LanguageConfig {
            code: "ko",
            filename: "handbook_KR.md",
            name: "Korean",
            native_name: "한국어",
        },
        LanguageConfig {
            code: "pt",
            filename: "handbook_PT.md",
            name: "Portuguese",
            native_name: "Português",
        },
        LanguageConfig {
            code: "ru",
            filename: "handbook_RU.md",
            name: "Russian",
            native_name: "Русский",
        },
        LanguageConfig {
            code: "th",
            filename: "handbook_TH.md",
            name: "Thai",
            native_name: "ไทย",
        },
        LanguageConfig {
            code: "vi",
            filename: "handbook_VI.md",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
        },
    ]
}
