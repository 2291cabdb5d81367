use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Document, RawClause};

#[derive(Debug, Deserialize)]
struct TomlDocument {
    #[serde(default)]
    document: Option<String>,
    #[serde(default, rename = "clause")]
    clauses: Vec<RawClause>,
}

/// Reads `[[clause]]` tables from TOML.
pub struct TomlSource;

impl TomlSource {
    pub fn new() -> Self {
        Self
    }
}

impl super::ClauseSource for TomlSource {
    fn load(&self, path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed: TomlDocument = toml::from_str(&content)
            .with_context(|| format!("Invalid clause TOML in {}", path.display()))?;

        Ok(Document {
            name: parsed.document,
            clauses: parsed.clauses.into_iter().map(RawClause::into_clause).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ClauseSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_clause_tables() {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            r#"
document = "Vendor_Service_Agreement_v4.pdf"

[[clause]]
id = "CL-05"
label = "Governing Law"
text = "This Agreement shall be governed by the laws of the State of California."

[[clause]]
id = "CL-09"
text = "Invoices are payable immediately upon receipt."
"#
        )
        .unwrap();

        let doc = TomlSource::new().load(f.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Vendor_Service_Agreement_v4.pdf"));
        assert_eq!(doc.clauses.len(), 2);
        assert_eq!(doc.clauses[0].label, "Governing Law");
        assert_eq!(doc.clauses[1].label, "CL-09");
    }

    #[test]
    fn test_empty_file_has_no_clauses() {
        let f = NamedTempFile::new().unwrap();
        let doc = TomlSource::new().load(f.path()).unwrap();
        assert!(doc.clauses.is_empty());
        assert_eq!(doc.name, None);
    }
}
