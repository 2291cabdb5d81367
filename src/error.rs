use thiserror::Error;

use crate::models::PolicyCategory;

/// Consistency failures raised by the audit core.
///
/// These indicate drift between the catalog, the evaluator and the caller.
/// A clause that matches no policy is not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// No policy is registered for the requested category.
    #[error("no policy registered for category {category}")]
    NotFound { category: PolicyCategory },

    /// A policy id that no rule set covers.
    #[error("unsupported policy id: {id}")]
    UnsupportedPolicy { id: String },

    /// The caller required a non-empty document.
    #[error("document '{document}' contains no clauses")]
    EmptyInput { document: String },

    /// Two catalog entries share an id.
    #[error("duplicate policy id in catalog: {id}")]
    DuplicatePolicy { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = AuditError::NotFound {
            category: PolicyCategory::PaymentTerms,
        };
        assert!(err.to_string().contains("Payment Terms"));

        let err = AuditError::UnsupportedPolicy {
            id: "RISK-999".into(),
        };
        assert!(err.to_string().contains("RISK-999"));

        let err = AuditError::EmptyInput {
            document: "msa.pdf".into(),
        };
        assert!(err.to_string().contains("msa.pdf"));
    }
}
