use std::path::PathBuf;

use clap::Parser;

use contract_auditr::config::FailOn;
use contract_auditr::ingest::InputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "contract-auditr",
    about = "Audit contract clauses against a legal risk playbook",
    version
)]
pub struct Cli {
    /// Clause file to audit (.json, .toml, or plain text)
    #[arg(required_unless_present_any = ["demo", "list_policies", "explain"])]
    pub input: Option<PathBuf>,

    /// Audit the bundled sample vendor agreement
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// Input format [default: from file extension]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Document name shown in the report [default: file name]
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Config file [default: ./.contract-auditr/config.toml, fallback ~/.config/contract-auditr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with code 1 when any finding reaches this level (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<FailOnArg>,

    /// Treat a document without clauses as an error
    #[arg(long)]
    pub require_clauses: bool,

    /// Print the policy playbook and exit
    #[arg(long)]
    pub list_policies: bool,

    /// Print one policy by id (e.g. RISK-002) and exit
    #[arg(long, value_name = "POLICY_ID")]
    pub explain: Option<String>,

    /// Show compliant findings and unmatched clauses too
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter when RUST_LOG is unset (e.g. debug, contract_auditr=trace)
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Json,
    Toml,
    Text,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => InputFormat::Json,
            FormatArg::Toml => InputFormat::Toml,
            FormatArg::Text => InputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FailOnArg {
    Low,
    Medium,
    High,
    Critical,
    #[value(name = "none")]
    Never,
}

impl From<FailOnArg> for FailOn {
    fn from(arg: FailOnArg) -> Self {
        match arg {
            FailOnArg::Low => FailOn::Low,
            FailOnArg::Medium => FailOn::Medium,
            FailOnArg::High => FailOn::High,
            FailOnArg::Critical => FailOn::Critical,
            FailOnArg::Never => FailOn::Never,
        }
    }
}
