//! PII exposure and GDPR/SOC2 compliance detection.

use crate::error::Result;
use crate::rules::pii::{
    self, MISSING_ENV_EXAMPLE_NAME, MISSING_ENV_EXAMPLE_PERSONAS, MISSING_ENV_EXAMPLE_REMEDIATION,
};
use crate::rules::{Category, Issue, Rule, Severity};
use crate::scanner::walker::{relative_path, FileWalker};
use crate::scanner::{ensure_dir, read_text, scan_lines, PiiReport, Scanner};
use std::path::Path;
use tracing::debug;

const EXTENSIONS: &[&str] = &[
    "js", "ts", "jsx", "tsx", "py", "rb", "go", "java", "php", "cs", "env", "yaml", "yml", "json",
    "html", "txt",
];

/// Scans for hardcoded personal data and compliance gaps. Line rules
/// carry GDPR/SOC2 applicability flags which end up on the issues; one
/// repository-wide presence check fires when `.env.example` is missing
/// at the root.
pub struct PiiScanner {
    rules: &'static [Rule],
}

impl PiiScanner {
    pub fn new() -> Self {
        Self::with_rules(pii::rules())
    }

    /// Scan with a custom rule set instead of the builtin registry.
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Skipped entirely for empty trees: an empty directory is not a
    /// repository missing its env documentation.
    fn missing_env_example(root: &Path) -> Option<Issue> {
        if root.join(".env.example").exists() || FileWalker::count_files(root) == 0 {
            return None;
        }
        Some(Issue {
            category: Category::Pii,
            name: MISSING_ENV_EXAMPLE_NAME.to_string(),
            severity: Severity::Medium,
            file: ".env.example".to_string(),
            line: None,
            snippet: "File not found".to_string(),
            remediation: MISSING_ENV_EXAMPLE_REMEDIATION.to_string(),
            persona: MISSING_ENV_EXAMPLE_PERSONAS.to_vec(),
            gdpr: Some(true),
            soc2: Some(true),
        })
    }
}

impl Default for PiiScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for PiiScanner {
    type Report = PiiReport;

    fn scan(&self, root: &Path) -> Result<PiiReport> {
        ensure_dir(root)?;

        let files = FileWalker::new().with_extensions(EXTENSIONS).walk(root);
        debug!(files = files.len(), "Scanning for PII");

        let mut issues = Vec::new();
        for path in &files {
            if let Some(content) = read_text(path) {
                let rel = relative_path(root, path);
                issues.extend(scan_lines(self.rules, &rel, &content));
            }
        }

        if let Some(issue) = Self::missing_env_example(root) {
            issues.push(issue);
        }

        let gdpr_issues = issues.iter().filter(|i| i.gdpr == Some(true)).count();
        let soc2_issues = issues.iter().filter(|i| i.soc2 == Some(true)).count();

        Ok(PiiReport {
            count: issues.len(),
            gdpr_issues,
            soc2_issues,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ssn_detected_with_compliance_flags() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.example"), "API_KEY=\n").unwrap();
        fs::write(dir.path().join("user.js"), "const ssn = '123-45-6789';\n").unwrap();

        let report = PiiScanner::new().scan(dir.path()).unwrap();
        assert_eq!(report.count, 1);
        let issue = &report.issues[0];
        assert_eq!(issue.name, "Social Security Number (SSN)");
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.gdpr, Some(true));
        assert_eq!(issue.soc2, Some(true));
        assert_eq!(report.gdpr_issues, 1);
        assert_eq!(report.soc2_issues, 1);
    }

    #[test]
    fn test_missing_env_example_presence_check() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.js"), "const ok = true;\n").unwrap();

        let report = PiiScanner::new().scan(dir.path()).unwrap();
        assert_eq!(report.count, 1);
        let issue = &report.issues[0];
        assert_eq!(issue.name, "Missing .env.example");
        assert_eq!(issue.file, ".env.example");
        assert_eq!(issue.line, None);
        assert_eq!(issue.snippet, "File not found");
        assert_eq!(issue.severity, Severity::Medium);
    }

    #[test]
    fn test_env_example_present_no_presence_issue() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.example"), "API_KEY=\n").unwrap();

        let report = PiiScanner::new().scan(dir.path()).unwrap();
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_gdpr_only_rule_counted_once() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.example"), "X=\n").unwrap();
        fs::write(dir.path().join("c.js"), "document.cookie = 'a=1';\n").unwrap();

        let report = PiiScanner::new().scan(dir.path()).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.gdpr_issues, 1);
        assert_eq!(report.soc2_issues, 0);
    }

    #[test]
    fn test_private_ips_not_flagged() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.example"), "X=\n").unwrap();
        fs::write(
            dir.path().join("net.js"),
            "const a = '192.168.1.1';\nconst b = '8.8.8.8';\n",
        )
        .unwrap();

        let report = PiiScanner::new().scan(dir.path()).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.issues[0].name, "IP Address (Hardcoded)");
        assert_eq!(report.issues[0].line, Some(2));
    }
}
