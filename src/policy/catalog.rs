use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::AuditError;
use crate::models::{Policy, PolicyCategory};

const BUILTIN_POLICIES: [Policy; 3] = [
    Policy {
        id: "RISK-001",
        category: PolicyCategory::Indemnification,
        title: "Mutual Indemnification Required",
        description: "Any indemnification clause must be mutual. One-sided indemnification \
                      in favor of the vendor is heavily penalized.",
        acceptance: "Clause must reference mutual obligation, or name both parties as obligors.",
    },
    Policy {
        id: "RISK-002",
        category: PolicyCategory::Jurisdiction,
        title: "Governing Law: New York or Delaware",
        description: "We only accept NY or DE law. Foreign jurisdictions or California law \
                      require General Counsel approval.",
        acceptance: "Clause must name New York or Delaware as governing law.",
    },
    Policy {
        id: "RISK-003",
        category: PolicyCategory::PaymentTerms,
        title: "Net 45 or Net 60",
        description: "Standard payment terms are Net 45. Net 30 is acceptable for software \
                      under $50k. Immediate payment upon receipt is rejected.",
        acceptance: "Clause must specify Net 45 or Net 60; Net 30 tolerated at lower severity; \
                     \"upon receipt\" rejected.",
    },
];

/// Read-only registry of risk policies, in registration order.
#[derive(Debug, Clone)]
pub struct PolicyCatalog {
    policies: Vec<Policy>,
}

impl PolicyCatalog {
    /// The process-wide built-in playbook.
    pub fn builtin() -> &'static PolicyCatalog {
        static BUILTIN: OnceLock<PolicyCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| PolicyCatalog {
            policies: BUILTIN_POLICIES.to_vec(),
        })
    }

    /// Build a catalog from arbitrary policies. Ids must be unique
    /// (compared case-insensitively).
    pub fn from_policies(policies: Vec<Policy>) -> Result<Self, AuditError> {
        let mut seen = HashSet::new();
        for policy in &policies {
            if !seen.insert(policy.id.to_ascii_uppercase()) {
                return Err(AuditError::DuplicatePolicy {
                    id: policy.id.to_string(),
                });
            }
        }
        Ok(Self { policies })
    }

    /// The policy registered for `category`. When several share a category
    /// the first registered wins.
    pub fn lookup(&self, category: PolicyCategory) -> Result<&Policy, AuditError> {
        self.policies
            .iter()
            .find(|p| p.category == category)
            .ok_or(AuditError::NotFound { category })
    }

    /// Resolve a policy from its textual id, e.g. `risk-002`.
    pub fn by_id(&self, id: &str) -> Result<&Policy, AuditError> {
        let wanted = id.trim();
        self.policies
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AuditError::UnsupportedPolicy {
                id: wanted.to_string(),
            })
    }

    pub fn all(&self) -> &[Policy] {
        &self.policies
    }
}
