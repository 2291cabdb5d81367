//! Command-line front end for [`contract_auditr`].

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, ReportFormat};
use contract_auditr::config::load_config;
use contract_auditr::ingest::{detect_format, load_document, Document};
use contract_auditr::models::{Clause, Finding, Policy, RiskLevel};
use contract_auditr::pipeline::{AuditObserver, AuditOptions, AuditPipeline};
use contract_auditr::policy::catalog::PolicyCatalog;
use contract_auditr::{demo, report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = PolicyCatalog::builtin();

    if cli.list_policies {
        report::terminal::render_policies(catalog.all());
        return Ok(());
    }
    if let Some(id) = &cli.explain {
        report::terminal::render_policy(catalog.by_id(id)?);
        return Ok(());
    }

    let working_dir = std::env::current_dir().context("Cannot resolve working directory")?;
    let mut config = load_config(&working_dir, cli.config.as_deref())?;
    if let Some(fail_on) = cli.fail_on {
        config.gate.fail_on = fail_on.into();
    }
    config.audit.require_clauses |= cli.require_clauses;

    // Load clauses
    let (document_name, clauses) = if cli.demo {
        let name = cli
            .name
            .clone()
            .unwrap_or_else(|| demo::DEMO_DOCUMENT_NAME.to_string());
        (name, demo::demo_clauses())
    } else {
        let Some(path) = cli.input.as_deref() else {
            anyhow::bail!("no input document given (pass a file or --demo)");
        };
        let format = cli.format.map(Into::into).unwrap_or_else(|| detect_format(path));
        debug!(path = %path.display(), %format, "loading clauses");

        let Document { name, clauses } = load_document(path, format)?;
        (resolve_name(cli.name.clone(), name, path), clauses)
    };

    let show_progress = !cli.quiet && matches!(cli.report, ReportFormat::Terminal);
    if show_progress {
        eprintln!(
            "  {} Ingested {}: {} clauses",
            "→".cyan(),
            document_name,
            clauses.len()
        );
    }

    // Audit
    let pipeline = AuditPipeline::new(
        catalog,
        AuditOptions {
            require_clauses: config.audit.require_clauses,
        },
    );
    let audit = if show_progress {
        let mut progress = ProgressObserver::new(clauses.len())?;
        let audit = pipeline.run_observed(&document_name, &clauses, &mut progress);
        progress.finish();
        audit
    } else {
        pipeline.run(&document_name, &clauses)
    };
    let audit = audit?;

    // Render report
    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&audit, &config.report, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&audit)?);
        }
    }

    if config.gate.is_tripped(&audit) {
        std::process::exit(1);
    }

    Ok(())
}

/// `--name` wins, then the name declared in the file, then the file name.
fn resolve_name(flag: Option<String>, declared: Option<String>, path: &Path) -> String {
    flag.or(declared).unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string()
    })
}

/// Drives an indicatif bar from pipeline events.
struct ProgressObserver {
    pb: ProgressBar,
}

impl ProgressObserver {
    fn new(len: usize) -> Result<Self> {
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Ok(Self { pb })
    }

    fn finish(self) {
        self.pb.finish_and_clear();
    }
}

impl AuditObserver for ProgressObserver {
    fn clause_started(&mut self, clause: &Clause) {
        self.pb
            .set_message(format!("{} ({}) \"{}\"", clause.id, clause.label, clause.preview(50)));
    }

    fn policy_matched(&mut self, clause: &Clause, policy: Option<&Policy>) {
        if policy.is_none() {
            self.pb.println(format!(
                "  {} {} no matching policy",
                "·".dimmed(),
                clause.id
            ));
            self.pb.inc(1);
        }
    }

    fn finding_recorded(&mut self, finding: &Finding) {
        let level = finding.risk_level.to_string();
        let level = if finding.risk_level == RiskLevel::Low {
            level.green()
        } else {
            level.red()
        };
        self.pb.println(format!(
            "  {} {} {} | Risk: {} | Score: {}",
            "→".yellow(),
            finding.clause_id,
            finding.policy_id,
            level,
            finding.risk_score
        ));
        self.pb.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name_precedence() {
        let path = Path::new("contracts/msa.json");
        assert_eq!(
            resolve_name(Some("Flag".into()), Some("Declared".into()), path),
            "Flag"
        );
        assert_eq!(resolve_name(None, Some("Declared".into()), path), "Declared");
        assert_eq!(resolve_name(None, None, path), "msa.json");
    }
}
