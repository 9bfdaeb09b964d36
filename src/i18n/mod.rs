//! Language resolution for handbook documents.
//!
//! # Architecture
//!
//! - `registry`: Closed table of supported languages and their handbook filenames
//! - `language`: Type-safe Language resolved from a filename or a code
//!
//! # Example
//!
//! ```rust,ignore
//! use handbook_dictionary::i18n::{Language, LanguageRegistry};
//!
//! // Resolve a handbook file
//! let japanese = Language::from_filename("handbook_JP.md");
//!
//! // List every supported language
//! let languages = LanguageRegistry::get().list_all();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
