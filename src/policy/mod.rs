//! The risk playbook and the two rule engines that apply it.
//!
//! - [`catalog`] — the fixed registry of [`Policy`](crate::models::Policy) records.
//! - [`matcher`] — keyword rules that pick at most one policy for a clause.
//! - [`evaluator`] — per-category acceptance rules that score a matched clause.

pub mod catalog;
pub mod evaluator;
pub mod matcher;
