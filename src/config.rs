use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the pretty-printed dictionary artifact
pub const PRETTY_FILE_NAME: &str = "translation_dictionary.json";

/// File name of the minified dictionary artifact
pub const COMPACT_FILE_NAME: &str = "translation_dictionary_compact.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-language handbook documents
    pub handbooks_dir: PathBuf,

    /// Directory the two dictionary artifacts are written to
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let handbooks_dir = PathBuf::from(
            std::env::var("HANDBOOKS_DIR").unwrap_or_else(|_| "handbooks".to_string()),
        );

        let output_dir = match std::env::var("DICTIONARY_OUTPUT_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                anyhow::bail!("DICTIONARY_OUTPUT_DIR is set but empty")
            }
            Ok(dir) => PathBuf::from(dir),
            Err(std::env::VarError::NotPresent) => default_output_dir(&handbooks_dir),
            Err(e) => return Err(e).context("DICTIONARY_OUTPUT_DIR is not valid unicode"),
        };

        Ok(Self {
            handbooks_dir,
            output_dir,
        })
    }

    /// Config rooted at a handbooks directory, writing next to it.
    pub fn for_handbooks_dir(handbooks_dir: impl Into<PathBuf>) -> Self {
        let handbooks_dir = handbooks_dir.into();
        let output_dir = default_output_dir(&handbooks_dir);
        Self {
            handbooks_dir,
            output_dir,
        }
    }

    /// Path of the pretty-printed artifact
    pub fn pretty_output_path(&self) -> PathBuf {
        self.output_dir.join(PRETTY_FILE_NAME)
    }

    /// Path of the minified artifact
    pub fn compact_output_path(&self) -> PathBuf {
        self.output_dir.join(COMPACT_FILE_NAME)
    }
}

/// Artifacts live in the parent of the handbooks directory.
fn default_output_dir(handbooks_dir: &Path) -> PathBuf {
    match handbooks_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HANDBOOKS_DIR");
        std::env::remove_var("DICTIONARY_OUTPUT_DIR");
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.handbooks_dir, PathBuf::from("handbooks"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    #[serial]
    fn test_from_env_output_defaults_to_parent() {
        clear_env();
        std::env::set_var("HANDBOOKS_DIR", "docs/handbooks");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.handbooks_dir, PathBuf::from("docs/handbooks"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_output_dir() {
        clear_env();
        std::env::set_var("HANDBOOKS_DIR", "docs/handbooks");
        std::env::set_var("DICTIONARY_OUTPUT_DIR", "public/i18n");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.output_dir, PathBuf::from("public/i18n"));
        assert_eq!(
            config.compact_output_path(),
            PathBuf::from("public/i18n/translation_dictionary_compact.json")
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_empty_output_dir() {
        clear_env();
        std::env::set_var("DICTIONARY_OUTPUT_DIR", "  ");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    // ==================== Path Tests ====================

    #[test]
    fn test_for_handbooks_dir_output_paths() {
        let config = Config::for_handbooks_dir("/srv/site/handbooks");

        assert_eq!(
            config.pretty_output_path(),
            PathBuf::from("/srv/site/translation_dictionary.json")
        );
        assert_eq!(
            config.compact_output_path(),
            PathBuf::from("/srv/site/translation_dictionary_compact.json")
        );
    }

    #[test]
    fn test_default_output_dir_for_bare_name() {
        assert_eq!(default_output_dir(Path::new("handbooks")), PathBuf::from("."));
    }
}
