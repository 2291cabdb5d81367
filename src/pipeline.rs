use tracing::{debug, info};

use crate::error::AuditError;
use crate::models::{AuditReport, Clause, Finding, Policy};
use crate::policy::catalog::PolicyCatalog;
use crate::policy::evaluator::{ClauseEvaluator, Evaluation};
use crate::policy::matcher::PolicyMatcher;

/// Caller-level choices for an audit run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditOptions {
    /// Fail with [`AuditError::EmptyInput`] instead of returning an empty report.
    pub require_clauses: bool,
}

/// Progress hooks for a run. Implementations must not affect the result.
pub trait AuditObserver {
    fn clause_started(&mut self, _clause: &Clause) {}
    fn policy_matched(&mut self, _clause: &Clause, _policy: Option<&Policy>) {}
    fn finding_recorded(&mut self, _finding: &Finding) {}
}

struct NoopObserver;

impl AuditObserver for NoopObserver {}

/// Matches then evaluates each clause of a document and aggregates the result.
///
/// Holds no per-run state, so a single pipeline can serve concurrent runs.
#[derive(Debug, Clone, Copy)]
pub struct AuditPipeline<'c> {
    matcher: PolicyMatcher<'c>,
    evaluator: ClauseEvaluator,
    options: AuditOptions,
}

impl<'c> AuditPipeline<'c> {
    pub fn new(catalog: &'c PolicyCatalog, options: AuditOptions) -> Self {
        Self {
            matcher: PolicyMatcher::new(catalog),
            evaluator: ClauseEvaluator::new(),
            options,
        }
    }

    pub fn run(&self, document_name: &str, clauses: &[Clause]) -> Result<AuditReport, AuditError> {
        self.run_observed(document_name, clauses, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting progress to `observer`. Clauses are
    /// processed strictly in input order.
    pub fn run_observed(
        &self,
        document_name: &str,
        clauses: &[Clause],
        observer: &mut dyn AuditObserver,
    ) -> Result<AuditReport, AuditError> {
        if clauses.is_empty() && self.options.require_clauses {
            return Err(AuditError::EmptyInput {
                document: document_name.to_string(),
            });
        }

        let mut findings = Vec::new();
        let mut unmatched_clause_ids = Vec::new();

        for clause in clauses {
            observer.clause_started(clause);

            let policy = self.matcher.match_text(&clause.text)?;
            observer.policy_matched(clause, policy);

            let Some(policy) = policy else {
                debug!(clause = %clause.id, "no policy matched");
                unmatched_clause_ids.push(clause.id.clone());
                continue;
            };

            let evaluation = self.evaluator.evaluate(&clause.text, policy);
            let finding = to_finding(clause, policy, evaluation);
            observer.finding_recorded(&finding);
            findings.push(finding);
        }

        let aggregate_risk_score = aggregate_score(&findings);
        let flagged_count = findings.iter().filter(|f| f.is_flagged()).count();

        info!(
            document = document_name,
            clauses = clauses.len(),
            findings = findings.len(),
            unmatched = unmatched_clause_ids.len(),
            aggregate_risk_score,
            flagged_count,
            "audit complete"
        );

        Ok(AuditReport {
            document_name: document_name.to_string(),
            clause_count: clauses.len(),
            findings,
            aggregate_risk_score,
            flagged_count,
            unmatched_clause_ids,
        })
    }
}

fn to_finding(clause: &Clause, policy: &Policy, evaluation: Evaluation) -> Finding {
    Finding {
        clause_id: clause.id.clone(),
        clause_label: clause.label.clone(),
        policy_id: policy.id.to_string(),
        risk_score: evaluation.risk_score,
        risk_level: evaluation.risk_level,
        finding_text: evaluation.finding_text.to_string(),
    }
}

/// Mean finding score truncated to an integer; `0` for no findings.
fn aggregate_score(findings: &[Finding]) -> u8 {
    if findings.is_empty() {
        return 0;
    }
    let n = findings.len() as u64;
    let sum: u64 = findings.iter().map(|f| u64::from(f.risk_score)).sum();
    // every score is <= 100, so the mean is too
    (sum / n) as u8
}
