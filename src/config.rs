//! Vocabulary configuration loading
//!
//! The configuration is an INI-style file with one section per vocabulary:
//!
//! ```text
//! [myterms]
//! baseuri: http://www.ivoa.net/rdf/myterms
//! timestamp: 2016-08-17
//! title: My terms as an example
//! description: This is a collection of terms not actually used
//!   anywhere.
//! authors: John Doe; Fred Flintstone
//! ```
//!
//! Keys are case-insensitive and may be written as `key: value` or
//! `key = value`. Indented lines continue the previous value. Keys in a
//! `[DEFAULT]` section apply to every vocabulary. The terms of vocabulary
//! `myterms` are read from `myterms.terms` next to the configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::BuildError;
use crate::vocab::{AUTHOR_SEPARATOR, MANDATORY_KEYS, TERMS_EXTENSION};

/// Name of the section whose keys every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Metadata of one vocabulary, from one configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyMetadata {
    /// Section name; also the base name of every output file
    pub name: String,
    pub base_uri: String,
    /// Release timestamp, used verbatim as the release directory name
    pub timestamp: String,
    pub title: String,
    pub description: String,
    /// Semicolon-separated author names, as written in the configuration
    pub authors: String,
    pub terms_file: PathBuf,
}

impl VocabularyMetadata {
    /// Author names, trimmed, empty entries dropped
    pub fn author_names(&self) -> Vec<&str> {
        self.authors
            .split(AUTHOR_SEPARATOR)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// Key/value pairs per section, sections in file order
pub type Sections = IndexMap<String, IndexMap<String, String>>;

/// Read the vocabulary configuration and return one metadata record per
/// section, in file order
pub fn read_meta(path: &Path) -> Result<Vec<VocabularyMetadata>, BuildError> {
    let content = fs::read_to_string(path).map_err(|source| BuildError::UnreadableConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let sections = parse_sections(&content).map_err(|(line, reason)| BuildError::ConfigSyntax {
        path: path.to_path_buf(),
        line,
        reason,
    })?;

    let terms_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut meta = Vec::new();
    for (name, values) in &sections {
        meta.push(make_vocab_meta(name, values, terms_dir)?);
    }
    debug!(config = %path.display(), vocabularies = meta.len(), "read configuration");
    Ok(meta)
}

/// Build the metadata for one section, checking mandatory keys and that
/// the implied terms file is readable
pub fn make_vocab_meta(
    name: &str,
    values: &IndexMap<String, String>,
    terms_dir: &Path,
) -> Result<VocabularyMetadata, BuildError> {
    let missing: Vec<String> = MANDATORY_KEYS
        .iter()
        .filter(|key| !values.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BuildError::MissingKeys {
            section: name.to_string(),
            keys: missing,
        });
    }

    let terms_file = terms_dir.join(format!("{}.{}", name, TERMS_EXTENSION));
    fs::read(&terms_file).map_err(|source| BuildError::UnreadableTerms {
        path: terms_file.clone(),
        source,
    })?;

    let get = |key: &str| values.get(key).cloned().unwrap_or_default();
    Ok(VocabularyMetadata {
        name: name.to_string(),
        base_uri: get("baseuri"),
        timestamp: get("timestamp"),
        title: get("title"),
        description: get("description"),
        authors: get("authors"),
        terms_file,
    })
}

/// Parse INI text into sections
///
/// `[DEFAULT]` keys are merged into every other section (section keys win)
/// and the default section itself is not returned. Errors carry the
/// 1-based line number and a reason.
pub fn parse_sections(content: &str) -> Result<Sections, (usize, String)> {
    let mut parser = IniParser::new();
    for (index, line) in content.lines().enumerate() {
        parser.feed_line(index + 1, line)?;
    }
    Ok(parser.finish())
}

/// Line-by-line INI reader with Python ConfigParser's continuation rules
///
/// - Blank lines, and lines with `#` or `;` in the first column, are skipped
/// - An indented line continues the last value, also after blank lines;
///   indented `#` or `;` lines are continuation text
/// - A repeated section header reopens the earlier section
struct IniParser {
    sections: Sections,
    defaults: IndexMap<String, String>,
    /// Section receiving keys; None before the first header
    current: Option<String>,
    /// Key that the next indented line continues
    last_key: Option<String>,
}

impl IniParser {
    fn new() -> Self {
        Self {
            sections: IndexMap::new(),
            defaults: IndexMap::new(),
            current: None,
            last_key: None,
        }
    }

    fn feed_line(&mut self, line_no: usize, line: &str) -> Result<(), (usize, String)> {
        if line.trim().is_empty() || line.starts_with(['#', ';']) {
            return Ok(());
        }

        if line.starts_with(char::is_whitespace) {
            if let Some(key) = self.last_key.clone() {
                if let Some(value) = self.target().get_mut(&key) {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(line.trim());
                }
                return Ok(());
            }
        }

        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            let name = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| (line_no, format!("malformed section header '{}'", trimmed)))?;
            if name != DEFAULT_SECTION {
                self.sections.entry(name.to_string()).or_default();
            }
            self.current = Some(name.to_string());
            self.last_key = None;
            return Ok(());
        }

        if self.current.is_none() {
            return Err((line_no, "key/value pair before any section header".to_string()));
        }

        let split = trimmed
            .find([':', '='])
            .ok_or_else(|| (line_no, format!("expected 'key: value', found '{}'", trimmed)))?;
        let key = trimmed[..split].trim().to_lowercase();
        if key.is_empty() {
            return Err((line_no, "empty key".to_string()));
        }
        let value = strip_quotes(trimmed[split + 1..].trim()).to_string();

        self.target().insert(key.clone(), value);
        self.last_key = Some(key);
        Ok(())
    }

    /// Key/value pairs of the section being read
    fn target(&mut self) -> &mut IndexMap<String, String> {
        match self.current.as_deref() {
            Some(name) if name != DEFAULT_SECTION => {
                self.sections.entry(name.to_string()).or_default()
            }
            _ => &mut self.defaults,
        }
    }

    fn finish(mut self) -> Sections {
        for values in self.sections.values_mut() {
            for (key, value) in &self.defaults {
                if !values.contains_key(key) {
                    values.insert(key.clone(), value.clone());
                }
            }
        }
        self.sections
    }
}

/// Strip one pair of surrounding double quotes
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
