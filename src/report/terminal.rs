use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::config::{ReportConfig, ScoreBand};
use crate::models::{AuditReport, Finding, Policy, RiskLevel};

/// Inner width of the summary box, in visible characters.
const BOX_WIDTH: usize = 48;

/// Pads `rendered` to the box width using the length of its uncolored
/// text, so escape codes do not count against the padding.
fn box_line(visible: &str, rendered: impl std::fmt::Display) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible.chars().count());
    format!("{}{}", rendered, " ".repeat(pad))
}

fn summary_lines(report: &AuditReport, score: &ColoredString) -> Vec<String> {
    let title = "LEGAL RISK ASSESSMENT";
    let score_label = "Risk score         : ";
    let audited = format!("Clauses audited    : {:>4}", report.clause_count);
    let findings = format!("Findings           : {:>4}", report.findings.len());
    let flagged = format!("  Clauses flagged : {:>4}", report.flagged_count);
    let unmatched = format!("  No policy match : {:>4}", report.unmatched_clause_ids.len());

    vec![
        box_line(title, title.bold()),
        box_line(
            &format!("{}{}/100", score_label, report.aggregate_risk_score),
            format!("{}{}", score_label, score),
        ),
        box_line(&audited, &audited),
        box_line(&findings, &findings),
        box_line(&format!("⚠{}", flagged), format!("{}{}", "⚠".yellow(), flagged)),
        box_line(&format!("·{}", unmatched), format!("{}{}", "·".dimmed(), unmatched)),
    ]
}

/// Render a colored terminal report.
pub fn render(report: &AuditReport, cfg: &ReportConfig, verbose: bool, quiet: bool) -> Result<()> {
    let score = format!("{}/100", report.aggregate_risk_score);
    let score = match cfg.band(report.aggregate_risk_score) {
        ScoreBand::Acceptable => score.green(),
        ScoreBand::Elevated => score.yellow(),
        ScoreBand::Severe => score.red(),
    };

    if quiet {
        println!(
            "Document: {}  Risk: {}  Findings: {}  Flagged: {}  Unmatched: {}",
            report.document_name,
            score,
            report.findings.len(),
            report.flagged_count.to_string().red(),
            report.unmatched_clause_ids.len(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "contract-auditr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Document: {}\n", report.document_name);

    println!(" ┌────────────────────────────────────────────────────┐");
    for line in summary_lines(report, &score) {
        println!(" │  {}  │", line);
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    if report.is_unscored() {
        println!(
            " {} No clause matched a playbook policy; score reflects an empty audit.\n",
            "[INFO]".cyan().bold()
        );
    }

    let critical: Vec<&Finding> = report.critical_findings(cfg.critical_threshold).collect();
    if !critical.is_empty() {
        println!(" {} Critical findings:\n", "[CRITICAL]".red().bold());
        for f in &critical {
            println!(
                "  [x] Clause {}: {} ({})",
                f.clause_id,
                f.finding_text,
                format!("Risk: {}", f.risk_score).red()
            );
        }
        println!();
    }

    let shown: Vec<&Finding> = report
        .findings
        .iter()
        .filter(|f| verbose || f.is_flagged())
        .collect();
    if !shown.is_empty() {
        let title = if verbose { "All findings:" } else { "Flagged clauses:" };
        println!(" {} {}\n", "[FINDINGS]".yellow().bold(), title);
        render_findings_table(&shown);
        println!();
    }

    if verbose && !report.unmatched_clause_ids.is_empty() {
        println!(
            " {} No matching policy: {}\n",
            "[SKIPPED]".dimmed().bold(),
            report.unmatched_clause_ids.join(", ")
        );
    }

    Ok(())
}

fn render_findings_table(findings: &[&Finding]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Clause").add_attribute(Attribute::Bold),
            Cell::new("Label").add_attribute(Attribute::Bold),
            Cell::new("Policy").add_attribute(Attribute::Bold),
            Cell::new("Score").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Finding").add_attribute(Attribute::Bold),
        ]);

    for f in findings {
        table.add_row(vec![
            Cell::new(&f.clause_id),
            Cell::new(&f.clause_label),
            Cell::new(&f.policy_id),
            Cell::new(f.risk_score).set_alignment(CellAlignment::Right),
            Cell::new(f.risk_level.to_string())
                .fg(level_color(f.risk_level))
                .set_alignment(CellAlignment::Center),
            Cell::new(&f.finding_text),
        ]);
    }

    println!("{}", table);
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
        RiskLevel::Critical => Color::Magenta,
    }
}

/// Print the playbook as a table.
pub fn render_policies(policies: &[Policy]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Id").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Policy").add_attribute(Attribute::Bold),
            Cell::new("Acceptance").add_attribute(Attribute::Bold),
        ]);

    for p in policies {
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(p.category.to_string()),
            Cell::new(p.title),
            Cell::new(p.acceptance),
        ]);
    }

    println!("{}", table);
}

/// Print one policy in full.
pub fn render_policy(policy: &Policy) {
    println!("\n {} {}", policy.id.bold(), policy.title);
    println!(" Category   : {}", policy.category);
    println!(" Rationale  : {}", policy.description);
    println!(" Acceptance : {}\n", policy.acceptance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn report() -> AuditReport {
        AuditReport {
            document_name: "msa".into(),
            clause_count: 4,
            findings: vec![Finding {
                clause_id: "CL-09".into(),
                clause_label: "Payment Terms".into(),
                policy_id: "RISK-003".into(),
                risk_score: 95,
                risk_level: RiskLevel::Critical,
                finding_text: "Immediate payment terms rejected.".into(),
            }],
            aggregate_risk_score: 95,
            flagged_count: 1,
            unmatched_clause_ids: vec!["CL-02".into(), "CL-03".into(), "CL-04".into()],
        }
    }

    #[test]
    fn test_summary_lines_align_when_colored() {
        colored::control::set_override(true);
        let ansi = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        let score = "95/100".red();

        let lines = summary_lines(&report(), &score);
        assert_eq!(lines.len(), 6);
        for line in &lines {
            let visible = ansi.replace_all(line, "");
            assert_eq!(visible.chars().count(), BOX_WIDTH, "misaligned: {:?}", visible);
        }
        assert!(lines[1].contains("\x1b["));
        assert!(lines[1].contains("95/100"));
    }

    #[test]
    fn test_box_line_never_truncates() {
        let long = "x".repeat(BOX_WIDTH + 5);
        assert_eq!(box_line(&long, &long), long);
    }
}
