//! Handbook document parsing.
//!
//! A handbook is a line-oriented markdown document. Level-2 headings
//! (`## <section>`) open a section and entry lines of the form
//! `ID:<digits> Name:<text><...>` add an entry to the current section.
//! Everything else is ignored; this is not a general markdown parser.

use crate::error::{DictionaryError, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Entry id → display text, in first-seen order.
pub type SectionEntries = IndexMap<String, String>;

/// Section name → entries, in first-seen order.
pub type ParsedDocument = IndexMap<String, SectionEntries>;

const SECTION_MARKER: &str = "## ";
const ENTRY_PREFIX: &str = "ID:";
const NAME_MARKER: &str = " Name:";

static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parse handbook content into sections and entries.
///
/// A repeated heading clears the entries already collected for that section.
/// Entry lines before the first heading are dropped. Duplicate ids inside a
/// section keep their first position and take the last name.
pub fn parse_handbook(content: &str) -> ParsedDocument {
    let mut data = ParsedDocument::new();
    let mut current_section = String::new();

    for (line_no, line) in content.lines().enumerate() {
        if let Some(section) = line.strip_prefix(SECTION_MARKER) {
            current_section = section.to_string();
            // `insert` keeps the section's original position but replaces its entries
            data.insert(current_section.clone(), SectionEntries::new());
        } else if line.starts_with(ENTRY_PREFIX) && line.contains(NAME_MARKER) {
            let Some((id, name)) = parse_entry_line(line) else {
                debug!("Skipping malformed entry on line {}", line_no + 1);
                continue;
            };
            if current_section.is_empty() {
                debug!("Skipping entry {} outside any section", id);
                continue;
            }
            if let Some(entries) = data.get_mut(&current_section) {
                entries.insert(id.to_string(), name.to_string());
            }
        }
    }

    data
}

/// Extract `(id, name)` from an entry line.
///
/// The name runs up to, but not including, the next `<` and is not trimmed.
fn parse_entry_line(line: &str) -> Option<(&str, &str)> {
    let regex = ENTRY_REGEX.get_or_init(|| {
        Regex::new(r"ID:([0-9]+) Name:([^<]+)").expect("entry pattern is valid")
    });

    let captures = regex.captures(line)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Read and parse a handbook file.
///
/// Invalid UTF-8 is decoded lossily; only I/O failures are errors.
pub fn parse_handbook_file(path: &Path) -> Result<ParsedDocument> {
    let bytes = std::fs::read(path).map_err(|source| DictionaryError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_handbook(&String::from_utf8_lossy(&bytes)))
}
