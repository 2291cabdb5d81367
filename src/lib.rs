//! `contract-auditr` — audit contract clauses against a legal risk playbook.
//!
//! # Flow
//! 1. Load clauses from a file ([`ingest`]) or the bundled sample ([`demo`]).
//! 2. Run the [`AuditPipeline`]: match each clause to a policy
//!    ([`policy::matcher`]) and score it ([`policy::evaluator`]).
//! 3. Render the resulting [`AuditReport`] ([`report`]), thresholds from [`config`].
//!
//! The `contract-auditr` binary wires these together and exits `1` when a
//! finding reaches the configured `fail_on` level.

pub mod config;
pub mod demo;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod policy;
pub mod report;

pub use error::AuditError;
pub use models::{AuditReport, Clause, Finding, Policy, PolicyCategory, RiskLevel};
pub use pipeline::{AuditObserver, AuditOptions, AuditPipeline};
pub use policy::catalog::PolicyCatalog;
