//! Report wire types. Field names here are the JSON contract; renames
//! are deliberate and load-bearing.

use crate::rules::{Issue, Severity};
use crate::scanner::{DependencyReport, InjectionReport, PiiReport, SecretsReport};
use crate::scoring::ScoreResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_files: usize,
    pub total_issues: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub secrets: SecretsReport,
    pub dependencies: DependencyReport,
    pub pii: PiiReport,
    pub prompt_injection: InjectionReport,
}

/// One file with at least one issue. Files without issues are never
/// materialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file: String,
    pub issues: Vec<Issue>,
    pub risk_level: Severity,
    pub issue_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub score: ScoreResult,
    pub categories: Categories,
    pub file_breakdown: Vec<FileEntry>,
    pub all_issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wire_names_are_camel_case() {
        let summary = ScanSummary {
            total_files: 3,
            total_issues: 1,
            critical: 1,
            high: 0,
            medium: 0,
            low: 0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalFiles"], 3);
        assert_eq!(json["totalIssues"], 1);
    }

    #[test]
    fn test_file_entry_wire_names() {
        let entry = FileEntry {
            file: "a.js".to_string(),
            issues: vec![],
            risk_level: Severity::High,
            issue_count: 0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["riskLevel"], "HIGH");
        assert_eq!(json["issueCount"], 0);
    }
}
