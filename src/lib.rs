pub mod aggregator;
pub mod audit;
pub mod cli;
pub mod error;
pub mod report;
pub mod reporter;
pub mod rules;
pub mod scanner;
pub mod scoring;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use error::{AuditError, Result};
pub use report::{Categories, FileEntry, ScanReport, ScanSummary};
pub use reporter::{JsonReporter, Reporter, TerminalReporter};
pub use rules::{Category, Issue, Persona, Rule, Severity};
pub use scanner::{
    DependencyScanner, FileWalker, InjectionScanner, PiiScanner, Scanner, SecretScanner,
};
pub use scoring::{ScoreResult, SCORE_BANDS};
