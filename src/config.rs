use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{AuditReport, RiskLevel};

/// Root configuration structure, deserialized from `.contract-auditr/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub audit: AuditConfig,
    pub report: ReportConfig,
    pub gate: GateConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Treat a document without clauses as an error.
    pub require_clauses: bool,
}

/// Thresholds used when presenting a report.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Findings scoring strictly above this are listed as critical.
    pub critical_threshold: u8,
    /// Aggregate scores above this are shown as elevated.
    pub elevated_score: u8,
    /// Aggregate scores above this are shown as severe.
    pub severe_score: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 50,
            elevated_score: 30,
            severe_score: 70,
        }
    }
}

/// Decides the process exit code from a finished report.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub fail_on: FailOn,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fail_on: FailOn::High,
        }
    }
}

/// Lowest finding level that fails the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    Low,
    Medium,
    High,
    Critical,
    /// Never fail on findings.
    #[serde(rename = "none")]
    Never,
}

impl FailOn {
    pub fn threshold(&self) -> Option<RiskLevel> {
        match self {
            FailOn::Low => Some(RiskLevel::Low),
            FailOn::Medium => Some(RiskLevel::Medium),
            FailOn::High => Some(RiskLevel::High),
            FailOn::Critical => Some(RiskLevel::Critical),
            FailOn::Never => None,
        }
    }
}

/// How an aggregate score reads against the configured bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Acceptable,
    Elevated,
    Severe,
}

impl ReportConfig {
    pub fn band(&self, score: u8) -> ScoreBand {
        if score > self.severe_score {
            ScoreBand::Severe
        } else if score > self.elevated_score {
            ScoreBand::Elevated
        } else {
            ScoreBand::Acceptable
        }
    }
}

impl GateConfig {
    /// True when any finding sits at or above the `fail_on` level.
    pub fn is_tripped(&self, report: &AuditReport) -> bool {
        match self.fail_on.threshold() {
            Some(threshold) => report.findings.iter().any(|f| f.risk_level >= threshold),
            None => false,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<working_dir>/.contract-auditr/config.toml`
/// 3. `~/.config/contract-auditr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = working_dir.join(".contract-auditr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("contract-auditr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Finding;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn report_with(levels: &[RiskLevel]) -> AuditReport {
        AuditReport {
            document_name: "msa".into(),
            clause_count: levels.len(),
            findings: levels
                .iter()
                .enumerate()
                .map(|(i, level)| Finding {
                    clause_id: format!("CL-{i}"),
                    clause_label: "x".into(),
                    policy_id: "RISK-001".into(),
                    risk_score: 10,
                    risk_level: *level,
                    finding_text: String::new(),
                })
                .collect(),
            aggregate_risk_score: 10,
            flagged_count: levels.len(),
            unmatched_clause_ids: vec![],
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(!cfg.audit.require_clauses);
        assert_eq!(cfg.report.critical_threshold, 50);
        assert_eq!(cfg.gate.fail_on, FailOn::High);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[gate]").unwrap();
        writeln!(f, "fail_on = \"critical\"").unwrap();

        let cfg = load_config(Path::new("."), Some(f.path())).unwrap();
        assert_eq!(cfg.gate.fail_on, FailOn::Critical);
        assert_eq!(cfg.report.severe_score, 70);
        assert!(!cfg.audit.require_clauses);
    }

    #[test]
    fn test_project_config_discovered() {
        let dir = TempDir::new().unwrap();
        let cfg_dir = dir.path().join(".contract-auditr");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[audit]\nrequire_clauses = true\n[report]\ncritical_threshold = 80\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert!(cfg.audit.require_clauses);
        assert_eq!(cfg.report.critical_threshold, 80);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[gate]\nfail_on = \"sometimes\"").unwrap();
        assert!(load_config(Path::new("."), Some(f.path())).is_err());
    }

    #[test]
    fn test_score_bands() {
        let report = ReportConfig::default();
        assert_eq!(report.band(30), ScoreBand::Acceptable);
        assert_eq!(report.band(31), ScoreBand::Elevated);
        assert_eq!(report.band(70), ScoreBand::Elevated);
        assert_eq!(report.band(80), ScoreBand::Severe);
    }

    #[test]
    fn test_gate() {
        let gate = GateConfig::default();
        assert!(gate.is_tripped(&report_with(&[RiskLevel::Low, RiskLevel::High])));
        assert!(!gate.is_tripped(&report_with(&[RiskLevel::Medium])));
        assert!(!gate.is_tripped(&report_with(&[])));

        let never = GateConfig {
            fail_on: FailOn::Never,
        };
        assert!(!never.is_tripped(&report_with(&[RiskLevel::Critical])));
    }
}
