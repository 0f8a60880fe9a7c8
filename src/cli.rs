use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "shipcheck",
    version,
    about = "Production-readiness auditor for source repositories",
    long_about = "shipcheck scans a repository for hardcoded secrets, risky dependencies, exposed PII, and prompt-injection vulnerabilities, then scores its production readiness from 0 to 100."
)]
pub struct Cli {
    /// Repository path to audit
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Strict mode: Conditional Go also fails
    #[arg(short, long)]
    pub strict: bool,

    /// Verbose output: list every issue per file
    #[arg(short, long)]
    pub verbose: bool,
}
