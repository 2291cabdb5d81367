//! Report renderers for audit results.
//!
//! - [`terminal`] — colored summary box, critical findings and a findings table;
//!   respects `--verbose` / `--quiet`. Also prints the policy playbook.
//!
//! JSON output is the serialized [`AuditReport`](crate::models::AuditReport).

pub mod terminal;
