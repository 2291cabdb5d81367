use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Document, RawClause};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Bare(Vec<RawClause>),
    Named {
        #[serde(default)]
        document: Option<String>,
        clauses: Vec<RawClause>,
    },
}

/// Reads clause records from JSON.
pub struct JsonSource;

impl JsonSource {
    pub fn new() -> Self {
        Self
    }
}

impl super::ClauseSource for JsonSource {
    fn load(&self, path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_json(&content).with_context(|| format!("Invalid clause JSON in {}", path.display()))
    }
}

fn parse_json(content: &str) -> Result<Document> {
    let parsed: JsonDocument = serde_json::from_str(content)?;
    let doc = match parsed {
        JsonDocument::Bare(clauses) => Document {
            name: None,
            clauses: clauses.into_iter().map(RawClause::into_clause).collect(),
        },
        JsonDocument::Named { document, clauses } => Document {
            name: document,
            clauses: clauses.into_iter().map(RawClause::into_clause).collect(),
        },
    };
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ClauseSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bare_array() {
        let doc = parse_json(
            r#"[
                {"id": "CL-01", "label": "Indemnification", "text": "Mutual indemnity."},
                {"id": "CL-02", "text": "Net 45."}
            ]"#,
        )
        .unwrap();
        assert_eq!(doc.name, None);
        assert_eq!(doc.clauses.len(), 2);
        assert_eq!(doc.clauses[1].label, "CL-02");
    }

    #[test]
    fn test_named_document() {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"document": "msa.pdf", "clauses": [{{"id": "CL-09", "label": "Payment Terms", "text": "Upon receipt."}}]}}"#
        )
        .unwrap();

        let doc = JsonSource::new().load(f.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("msa.pdf"));
        assert_eq!(doc.clauses[0].id, "CL-09");
        assert_eq!(doc.clauses[0].label, "Payment Terms");
    }

    #[test]
    fn test_missing_text_rejected() {
        assert!(parse_json(r#"[{"id": "CL-01"}]"#).is_err());
    }
}
