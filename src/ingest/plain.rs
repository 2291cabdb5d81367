use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use super::Document;
use crate::models::Clause;

/// Reads clauses from plain text, one paragraph per clause.
///
/// A paragraph may open with a `[CL-05] Governing Law` header line that
/// supplies its id and label, provided clause text follows it. Other
/// paragraphs get sequential `CL-NN` ids, skipping ids a header claimed.
pub struct TextSource;

impl TextSource {
    pub fn new() -> Self {
        Self
    }
}

impl super::ClauseSource for TextSource {
    fn load(&self, path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Document {
            name: None,
            clauses: parse_text(&content)?,
        })
    }
}

/// Id and label declared by a paragraph header.
struct Header {
    id: String,
    label: String,
}

fn parse_text(content: &str) -> Result<Vec<Clause>> {
    let header_re = Regex::new(r"^\[\s*([A-Za-z][A-Za-z0-9]*-\d+)\s*\]\s*(.*)$")?;

    let parsed: Vec<(Option<Header>, Vec<&str>)> = paragraphs(content)
        .into_iter()
        .map(|paragraph| match header_re.captures(paragraph[0]) {
            // a header line alone is clause text, not a header
            Some(caps) if paragraph.len() > 1 => {
                let id = caps[1].to_string();
                let label = match caps[2].trim() {
                    "" => id.clone(),
                    l => l.to_string(),
                };
                (Some(Header { id, label }), paragraph[1..].to_vec())
            }
            _ => (None, paragraph),
        })
        .collect();

    let claimed: HashSet<String> = parsed
        .iter()
        .filter_map(|(header, _)| header.as_ref().map(|h| h.id.clone()))
        .collect();

    let mut next = 0usize;
    let mut clauses = Vec::with_capacity(parsed.len());
    for (header, body) in parsed {
        let text = body.join(" ");
        let clause = match header {
            Some(Header { id, label }) => Clause::new(id, label, text),
            None => {
                let id = loop {
                    next += 1;
                    let candidate = format!("CL-{:02}", next);
                    if !claimed.contains(&candidate) {
                        break candidate;
                    }
                };
                Clause::new(id, format!("Clause {}", next), text)
            }
        };
        clauses.push(clause);
    }

    Ok(clauses)
}

/// Non-empty trimmed lines grouped by blank-line separators.
fn paragraphs(content: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
