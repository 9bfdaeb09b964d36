//! End-to-end dictionary generation.
//!
//! Discovery → language resolution → parsing → merge → artifacts → statistics.
//! Nothing is written until every recognized handbook has been parsed.

use crate::config::Config;
use crate::dictionary::{merge, LanguageDocuments, TranslationDictionary};
use crate::error::{DictionaryError, Result};
use crate::handbook::parse_handbook_file;
use crate::i18n::Language;
use crate::report::{write_artifacts, DictionaryStats, WrittenArtifacts};
use std::path::Path;
use tracing::{debug, info};

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    pub dictionary: TranslationDictionary,
    pub stats: DictionaryStats,
    pub artifacts: WrittenArtifacts,
}

/// List the markdown files in the handbooks directory, sorted by name.
pub fn discover_handbooks(dir: &Path) -> Result<Vec<String>> {
    let read_dir_error = |source: std::io::Error| DictionaryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for dir_entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let dir_entry = dir_entry.map_err(read_dir_error)?;
        // Follows symlinks; a dangling link stays listed and fails when read
        if let Ok(metadata) = std::fs::metadata(dir_entry.path()) {
            if !metadata.is_file() {
                continue;
            }
        }
        // Non UTF-8 names can never match the language table
        let Ok(name) = dir_entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(".md") {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse every recognized handbook in `dir`, keyed by language.
pub fn load_handbooks(dir: &Path) -> Result<LanguageDocuments> {
    let files = discover_handbooks(dir)?;
    info!("Found handbook files: {:?}", files);

    let mut documents = LanguageDocuments::new();
    for file in &files {
        let Some(language) = Language::from_filename(file) else {
            debug!("Skipping unrecognized handbook {}", file);
            continue;
        };

        info!("Processing {} ({})...", file, language.code());
        let parsed = parse_handbook_file(&dir.join(file))?;
        documents.insert(language, parsed);
    }

    Ok(documents)
}

/// Run the whole pipeline for one configuration.
pub fn generate(config: &Config) -> Result<Generation> {
    let documents = load_handbooks(&config.handbooks_dir)?;
    let dictionary = merge(&documents);

    let artifacts = write_artifacts(config, &dictionary)?;

    let stats = DictionaryStats::compute(&dictionary);
    stats.log();

    Ok(Generation {
        dictionary,
        stats,
        artifacts,
    })
}
