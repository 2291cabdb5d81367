use serde::{Deserialize, Serialize};

/// A named risk rule from the playbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub id: &'static str,
    pub category: PolicyCategory,
    pub title: &'static str,
    pub description: &'static str,
    /// Plain-language statement of what a compliant clause looks like.
    pub acceptance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyCategory {
    Indemnification,
    Jurisdiction,
    PaymentTerms,
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyCategory::Indemnification => write!(f, "Indemnification"),
            PolicyCategory::Jurisdiction => write!(f, "Jurisdiction"),
            PolicyCategory::PaymentTerms => write!(f, "Payment Terms"),
        }
    }
}

/// A single excerpted unit of contract text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub id: String,
    pub label: String,
    pub text: String,
}

impl Clause {
    pub fn new(id: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: text.into(),
        }
    }

    /// First `max` characters of the clause text, with an ellipsis when cut.
    pub fn preview(&self, max: usize) -> String {
        let text = self.text.trim();
        if text.chars().count() <= max {
            return text.to_string();
        }
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Ordered severity tier. `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// The scored outcome of evaluating one clause against its matched policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub clause_id: String,
    pub clause_label: String,
    pub policy_id: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub finding_text: String,
}

impl Finding {
    pub fn is_flagged(&self) -> bool {
        self.risk_score > 0
    }
}

/// Document-level result of one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub document_name: String,
    /// Number of clauses submitted, matched or not.
    pub clause_count: usize,
    /// In input clause order.
    pub findings: Vec<Finding>,
    /// Mean of finding scores truncated to an integer; `0` when there are no findings.
    pub aggregate_risk_score: u8,
    pub flagged_count: usize,
    /// Clauses that matched no policy, in input order.
    pub unmatched_clause_ids: Vec<String>,
}

impl AuditReport {
    /// True when the aggregate score comes from the empty-mean convention
    /// rather than from any evaluated clause.
    pub fn is_unscored(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn highest_level(&self) -> Option<RiskLevel> {
        self.findings.iter().map(|f| f.risk_level).max()
    }

    /// Findings whose score is strictly above `threshold`.
    pub fn critical_findings(&self, threshold: u8) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| f.risk_score > threshold)
    }
}
