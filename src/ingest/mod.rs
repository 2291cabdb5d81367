//! Clause sources: turn an already-extracted document on disk into [`Clause`] records.
//!
//! - [`json`] — `[{id, label, text}]` or `{document, clauses}`.
//! - [`toml_file`] — `document = ".."` plus `[[clause]]` tables.
//! - [`plain`] — blank-line separated paragraphs with optional `[ID] Label` headers.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::models::Clause;

pub mod json;
pub mod plain;
pub mod toml_file;

/// A parsed document: an optional name declared by the file and its clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: Option<String>,
    pub clauses: Vec<Clause>,
}

pub trait ClauseSource {
    fn load(&self, path: &Path) -> Result<Document>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
    Text,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Json => write!(f, "json"),
            InputFormat::Toml => write!(f, "toml"),
            InputFormat::Text => write!(f, "text"),
        }
    }
}

/// Pick a format from the file extension; anything unrecognised is plain text.
pub fn detect_format(path: &Path) -> InputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("json") => InputFormat::Json,
        Some("toml") => InputFormat::Toml,
        _ => InputFormat::Text,
    }
}

/// Load and validate the clauses in `path`.
pub fn load_document(path: &Path, format: InputFormat) -> Result<Document> {
    let doc = match format {
        InputFormat::Json => json::JsonSource::new().load(path)?,
        InputFormat::Toml => toml_file::TomlSource::new().load(path)?,
        InputFormat::Text => plain::TextSource::new().load(path)?,
    };

    check_unique_ids(&doc.clauses)?;
    Ok(doc)
}

fn check_unique_ids(clauses: &[Clause]) -> Result<()> {
    let mut seen = HashSet::new();
    for clause in clauses {
        if !seen.insert(clause.id.as_str()) {
            bail!("duplicate clause id '{}'", clause.id);
        }
    }
    Ok(())
}

/// Serialized clause record shared by the structured formats.
#[derive(Debug, Deserialize)]
struct RawClause {
    id: String,
    #[serde(default)]
    label: Option<String>,
    text: String,
}

impl RawClause {
    fn into_clause(self) -> Clause {
        let label = self
            .label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.id.clone());
        Clause::new(self.id, label, self.text)
    }
}
