//! Detection engine: one scanner per category, all sharing the walker
//! and the line-scan helper.

pub mod dependency;
pub mod injection;
pub mod pii;
pub mod secrets;
pub mod walker;

pub use dependency::DependencyScanner;
pub use injection::InjectionScanner;
pub use pii::PiiScanner;
pub use secrets::SecretScanner;
pub use walker::FileWalker;

use crate::error::{AuditError, Result};
use crate::rules::{Issue, Rule, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A category detector. Scanning never mutates the tree; the only fatal
/// error is a missing or non-directory root.
pub trait Scanner {
    type Report;

    fn scan(&self, root: &Path) -> Result<Self::Report>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretsReport {
    pub count: usize,
    pub critical: usize,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub count: usize,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiReport {
    pub count: usize,
    pub gdpr_issues: usize,
    pub soc2_issues: usize,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionReport {
    pub count: usize,
    pub critical: usize,
    pub issues: Vec<Issue>,
}

/// Validate the scan root before walking.
pub(crate) fn ensure_dir(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(AuditError::FileNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(AuditError::NotADirectory(root.display().to_string()));
    }
    Ok(())
}

/// Read a file as text, skipping anything unreadable or non-UTF-8.
pub(crate) fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            debug!(path = %path.display(), %err, "Skipping unreadable file");
            None
        }
    }
}

/// Run each rule over each line, emitting at most one issue per
/// (line, rule) pair. Rules iterate in registry order, lines inner, so
/// output order is stable across runs.
pub(crate) fn scan_lines(rules: &[Rule], file: &str, content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rule in rules {
        for (idx, line) in content.lines().enumerate() {
            if rule.matches_line(line) {
                issues.push(Issue::from_rule(rule, file, idx + 1, line));
            }
        }
    }
    issues
}

pub(crate) fn count_severity(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}
