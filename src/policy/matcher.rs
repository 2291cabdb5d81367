use tracing::debug;

use crate::error::AuditError;
use crate::models::{Policy, PolicyCategory};
use crate::policy::catalog::PolicyCatalog;

/// Keyword sets in priority order. The first category with any keyword
/// contained in the lowercased clause text wins.
const MATCH_RULES: &[(PolicyCategory, &[&str])] = &[
    (PolicyCategory::Indemnification, &["indemnif", "hold harmless"]),
    (PolicyCategory::Jurisdiction, &["governing law", "jurisdiction"]),
    (PolicyCategory::PaymentTerms, &["payment", "invoice"]),
];

/// Maps free-text clause content to at most one catalog policy.
#[derive(Debug, Clone, Copy)]
pub struct PolicyMatcher<'c> {
    catalog: &'c PolicyCatalog,
}

impl<'c> PolicyMatcher<'c> {
    pub fn new(catalog: &'c PolicyCatalog) -> Self {
        Self { catalog }
    }

    /// Select the policy relevant to `clause_text`.
    ///
    /// `Ok(None)` means no keyword set matched; the clause is simply out of
    /// scope for the playbook. An error means the catalog has no policy for
    /// a category the rules resolved to.
    pub fn match_text(&self, clause_text: &str) -> Result<Option<&'c Policy>, AuditError> {
        let Some((category, keyword)) = match_category(clause_text) else {
            return Ok(None);
        };

        let policy = self.catalog.lookup(category)?;
        debug!(policy = policy.id, %category, keyword, "policy matched");
        Ok(Some(policy))
    }
}

/// The category and triggering keyword for `clause_text`, if any.
pub fn match_category(clause_text: &str) -> Option<(PolicyCategory, &'static str)> {
    let lower = clause_text.to_lowercase();
    MATCH_RULES.iter().find_map(|(category, keywords)| {
        keywords
            .iter()
            .find(|kw| lower.contains(*kw))
            .map(|kw| (*category, *kw))
    })
}
