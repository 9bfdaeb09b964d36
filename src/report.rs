//! Dictionary artifacts and coverage statistics.
//!
//! The dictionary is persisted twice (pretty and compact). Statistics only go
//! to the log and are never part of an artifact.

use crate::config::Config;
use crate::dictionary::TranslationDictionary;
use crate::error::{DictionaryError, Result};
use crate::i18n::LanguageRegistry;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the two artifacts were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub pretty: PathBuf,
    pub compact: PathBuf,
}

/// Coverage statistics for a generated dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Number of merged entries
    pub total_entries: usize,

    /// Section → entry count, in first-appearance order
    pub entries_per_section: IndexMap<String, usize>,

    /// Language code → number of entries with text in that language.
    /// Every registered language is listed, in table order.
    pub language_coverage: IndexMap<&'static str, usize>,
}

impl DictionaryStats {
    pub fn compute(dictionary: &TranslationDictionary) -> Self {
        let mut entries_per_section: IndexMap<String, usize> = IndexMap::new();
        let mut language_coverage: IndexMap<&'static str, usize> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|lang| (lang.code, 0))
            .collect();

        for entry in dictionary {
            *entries_per_section.entry(entry.section.clone()).or_insert(0) += 1;

            for (code, text) in &entry.translations {
                if text.is_empty() {
                    continue;
                }
                if let Some(count) = language_coverage.get_mut(code.as_str()) {
                    *count += 1;
                }
            }
        }

        Self {
            total_entries: dictionary.len(),
            entries_per_section,
            language_coverage,
        }
    }

    /// Emit the statistics block to the log.
    pub fn log(&self) {
        info!("Statistics:");
        info!("Total entries: {}", self.total_entries);

        info!("Entries per section:");
        for (section, count) in &self.entries_per_section {
            info!("  {}: {}", section, count);
        }

        info!("Language coverage:");
        for (code, count) in &self.language_coverage {
            info!("  {}: {} entries", code, count);
        }
    }
}

/// Write the pretty and compact artifacts to the configured output directory.
///
/// Both documents are serialized before anything touches the disk.
pub fn write_artifacts(
    config: &Config,
    dictionary: &TranslationDictionary,
) -> Result<WrittenArtifacts> {
    let pretty_json = dictionary.to_pretty_json()?;
    let compact_json = dictionary.to_compact_json()?;

    std::fs::create_dir_all(&config.output_dir).map_err(|source| {
        DictionaryError::WriteArtifact {
            path: config.output_dir.clone(),
            source,
        }
    })?;

    let pretty = config.pretty_output_path();
    write_file(&pretty, &pretty_json)?;
    info!("Translation dictionary saved to: {}", pretty.display());

    let compact = config.compact_output_path();
    write_file(&compact, &compact_json)?;
    info!("Compact version saved to: {}", compact.display());

    Ok(WrittenArtifacts { pretty, compact })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| DictionaryError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MergedEntry;

    fn entry(section: &str, id: &str, translations: &[(&str, &str)]) -> MergedEntry {
        MergedEntry {
            id: id.to_string(),
            section: section.to_string(),
            translations: translations
                .iter()
                .map(|(code, text)| (code.to_string(), text.to_string()))
                .collect(),
        }
    }

    fn sample() -> TranslationDictionary {
        TranslationDictionary::from(vec![
            entry("Weapons", "1", &[("en", "Sword"), ("ja", "剣")]),
            entry("Armor", "1", &[("en", "Shield")]),
            entry("Weapons", "2", &[("ja", "弓")]),
        ])
    }

    // ==================== Statistics Tests ====================

    #[test]
    fn test_stats_total() {
        assert_eq!(DictionaryStats::compute(&sample()).total_entries, 3);
    }

    #[test]
    fn test_stats_sections_in_first_appearance_order() {
        let stats = DictionaryStats::compute(&sample());
        let sections: Vec<_> = stats
            .entries_per_section
            .iter()
            .map(|(s, c)| (s.as_str(), *c))
            .collect();
        assert_eq!(sections, vec![("Weapons", 2), ("Armor", 1)]);
    }

    #[test]
    fn test_stats_language_coverage_lists_every_language() {
        let stats = DictionaryStats::compute(&sample());

        assert_eq!(stats.language_coverage.len(), 13);
        assert_eq!(stats.language_coverage.get_index(0), Some((&"en", &2)));
        assert_eq!(stats.language_coverage["ja"], 2);
        assert_eq!(stats.language_coverage["vi"], 0);
    }

    #[test]
    fn test_stats_ignore_unknown_and_empty_fields() {
        let dict = TranslationDictionary::from(vec![entry(
            "S",
            "1",
            &[("en", ""), ("xx", "unknown"), ("fr", "Oui")],
        )]);
        let stats = DictionaryStats::compute(&dict);

        assert_eq!(stats.language_coverage["en"], 0);
        assert_eq!(stats.language_coverage["fr"], 1);
        assert!(!stats.language_coverage.contains_key("xx"));
    }

    #[test]
    fn test_stats_empty_dictionary() {
        let stats = DictionaryStats::compute(&TranslationDictionary::default());
        assert_eq!(stats.total_entries, 0);
        assert!(stats.entries_per_section.is_empty());
        assert!(stats.language_coverage.values().all(|&count| count == 0));
    }

    // ==================== Writer Tests ====================

    #[test]
    fn test_write_artifacts_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_handbooks_dir(dir.path().join("handbooks"));

        let written = write_artifacts(&config, &sample()).unwrap();

        assert_eq!(written.pretty, dir.path().join("translation_dictionary.json"));
        assert_eq!(
            written.compact,
            dir.path().join("translation_dictionary_compact.json")
        );
        let pretty = std::fs::read_to_string(&written.pretty).unwrap();
        let compact = std::fs::read_to_string(&written.compact).unwrap();
        assert!(pretty.contains("\n  {"));
        assert!(!compact.contains('\n'));
        assert_eq!(
            TranslationDictionary::from_json(&pretty).unwrap(),
            TranslationDictionary::from_json(&compact).unwrap()
        );
    }

    #[test]
    fn test_write_artifacts_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            handbooks_dir: dir.path().join("handbooks"),
            output_dir: dir.path().join("nested").join("out"),
        };

        let written = write_artifacts(&config, &sample()).unwrap();
        assert!(written.pretty.exists());
        assert!(written.compact.exists());
    }

    #[test]
    fn test_write_artifacts_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = Config {
            handbooks_dir: dir.path().join("handbooks"),
            output_dir: blocker,
        };

        let result = write_artifacts(&config, &sample());
        assert!(matches!(result, Err(DictionaryError::WriteArtifact { .. })));
    }
}
