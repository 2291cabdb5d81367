use serde::Serialize;
use tracing::debug;

use crate::models::{Policy, PolicyCategory, RiskLevel};

/// Score, severity and explanation for one clause against one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub finding_text: &'static str,
}

impl Evaluation {
    const fn new(risk_score: u8, risk_level: RiskLevel, finding_text: &'static str) -> Self {
        Self {
            risk_score,
            risk_level,
            finding_text,
        }
    }
}

const MUTUAL_INDEMNITY: Evaluation =
    Evaluation::new(10, RiskLevel::Low, "Clause is mutual. Compliant.");
const ONE_SIDED_INDEMNITY: Evaluation = Evaluation::new(
    85,
    RiskLevel::High,
    "One-sided indemnification detected. Violation of Policy.",
);

const APPROVED_JURISDICTION: Evaluation =
    Evaluation::new(0, RiskLevel::Low, "Jurisdiction is compliant.");
const OTHER_JURISDICTION: Evaluation = Evaluation::new(
    60,
    RiskLevel::Medium,
    "Non-standard jurisdiction. Requires legal review.",
);

const EXTENDED_PAYMENT: Evaluation = Evaluation::new(0, RiskLevel::Low, "Payment terms compliant.");
const IMMEDIATE_PAYMENT: Evaluation =
    Evaluation::new(95, RiskLevel::Critical, "Immediate payment terms rejected.");
const STANDARD_PAYMENT: Evaluation =
    Evaluation::new(25, RiskLevel::Low, "Standard Net 30 acceptable.");

/// Every outcome the evaluator can produce, grouped by category.
pub const OUTCOMES: &[(PolicyCategory, Evaluation)] = &[
    (PolicyCategory::Indemnification, MUTUAL_INDEMNITY),
    (PolicyCategory::Indemnification, ONE_SIDED_INDEMNITY),
    (PolicyCategory::Jurisdiction, APPROVED_JURISDICTION),
    (PolicyCategory::Jurisdiction, OTHER_JURISDICTION),
    (PolicyCategory::PaymentTerms, EXTENDED_PAYMENT),
    (PolicyCategory::PaymentTerms, IMMEDIATE_PAYMENT),
    (PolicyCategory::PaymentTerms, STANDARD_PAYMENT),
];

/// Applies a policy's acceptance rules to clause text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseEvaluator;

impl ClauseEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `clause_text` against `policy`. Matching is case-insensitive.
    pub fn evaluate(&self, clause_text: &str, policy: &Policy) -> Evaluation {
        let lower = clause_text.to_lowercase();

        let evaluation = match policy.category {
            PolicyCategory::Indemnification => evaluate_indemnification(&lower),
            PolicyCategory::Jurisdiction => evaluate_jurisdiction(&lower),
            PolicyCategory::PaymentTerms => evaluate_payment_terms(&lower),
        };

        debug!(
            policy = policy.id,
            score = evaluation.risk_score,
            level = %evaluation.risk_level,
            "clause evaluated"
        );
        evaluation
    }
}

fn evaluate_indemnification(lower: &str) -> Evaluation {
    let names_both_parties = lower.contains("vendor") && lower.contains("company");
    if lower.contains("mutual") || names_both_parties {
        MUTUAL_INDEMNITY
    } else {
        ONE_SIDED_INDEMNITY
    }
}

fn evaluate_jurisdiction(lower: &str) -> Evaluation {
    if lower.contains("new york") || lower.contains("delaware") {
        APPROVED_JURISDICTION
    } else {
        OTHER_JURISDICTION
    }
}

fn evaluate_payment_terms(lower: &str) -> Evaluation {
    if lower.contains("net 45") || lower.contains("net 60") {
        EXTENDED_PAYMENT
    } else if lower.contains("upon receipt") {
        IMMEDIATE_PAYMENT
    } else {
        STANDARD_PAYMENT
    }
}
