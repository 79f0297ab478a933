//! Terms file parsing
//!
//! A terms file lists a vocabulary depth-first, one term per row:
//!
//! ```text
//! predicate; level; label; description; synonym
//! ```
//!
//! `level` is 1 for root terms, 2 for their children and so on. The
//! parent of each term is rebuilt from these levels with a stack holding
//! the ancestors of the current row. `synonym` is optional and names the
//! term that should be used instead.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{BuildError, TermsError};
use crate::id::normalize_reference;
use crate::term::Term;
use crate::vocab::TERMS_DELIMITER;

const PREDICATE: usize = 0;
const LEVEL: usize = 1;
const LABEL: usize = 2;
const DESCRIPTION: usize = 3;
const SYNONYM: usize = 4;

/// Parse terms from any reader, in input order
pub fn parse_terms<R: Read>(reader: R) -> Result<Vec<Term>, TermsError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(TERMS_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    // Ancestors of the current row; parents.len() == level - 1 after each row
    let mut parents: Vec<String> = Vec::new();
    let mut last_predicate: Option<String> = None;
    let mut previous_level = 0;
    let mut terms = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }

        if record.len() <= LEVEL {
            return Err(TermsError::MissingColumns {
                line,
                found: record.len(),
            });
        }
        let raw_predicate =
            field(&record, PREDICATE).ok_or(TermsError::EmptyPredicate { line })?;
        let level = parse_level(&record[LEVEL], line)?;

        if level > previous_level + 1 {
            return Err(TermsError::LevelJump {
                line,
                previous: previous_level,
                level,
            });
        }
        if level > previous_level {
            if let Some(previous) = &last_predicate {
                parents.push(previous.clone());
            }
        }
        parents.truncate(level - 1);

        let predicate = normalize_reference(raw_predicate);
        let term = Term {
            predicate: predicate.clone(),
            label: field(&record, LABEL).unwrap_or_default().to_string(),
            description: field(&record, DESCRIPTION).unwrap_or_default().to_string(),
            parent: parents.last().cloned(),
            synonym: field(&record, SYNONYM).map(normalize_reference),
        };
        terms.push(term);
        last_predicate = Some(predicate);
        previous_level = level;
    }

    Ok(terms)
}

/// Parse a terms file, attaching the file name to content errors
pub fn parse_terms_file(path: &Path) -> Result<Vec<Term>, BuildError> {
    let file = File::open(path).map_err(|source| BuildError::UnreadableTerms {
        path: path.to_path_buf(),
        source,
    })?;

    let terms = parse_terms(file).map_err(|source| BuildError::Terms {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(file = %path.display(), count = terms.len(), "parsed terms");
    Ok(terms)
}

/// A column's value; empty columns count as absent
fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|s| !s.is_empty())
}

fn parse_level(value: &str, line: u64) -> Result<usize, TermsError> {
    let level: usize = value
        .trim()
        .parse()
        .map_err(|source| TermsError::MalformedLevel {
            line,
            value: value.to_string(),
            source,
        })?;
    if level == 0 {
        return Err(TermsError::ZeroLevel { line });
    }
    Ok(level)
}
