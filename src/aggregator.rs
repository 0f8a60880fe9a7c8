//! Merges the four category reports into one view of the repository.

use crate::report::{Categories, FileEntry, ScanReport, ScanSummary};
use crate::rules::{Issue, Severity};
use crate::scanner::walker::FileWalker;
use crate::scanner::{DependencyReport, InjectionReport, PiiReport, SecretsReport};
use crate::scoring::ScoreResult;
use std::path::Path;
use tracing::debug;

/// Everything except the score, which the caller computes from
/// `all_issues` and attaches via [`AggregatedScan::into_report`].
#[derive(Debug, Clone)]
pub struct AggregatedScan {
    pub summary: ScanSummary,
    pub categories: Categories,
    pub file_breakdown: Vec<FileEntry>,
    pub all_issues: Vec<Issue>,
}

impl AggregatedScan {
    pub fn into_report(self, score: ScoreResult) -> ScanReport {
        ScanReport {
            summary: self.summary,
            score,
            categories: self.categories,
            file_breakdown: self.file_breakdown,
            all_issues: self.all_issues,
        }
    }
}

/// Concatenates issues in fixed category order (secrets, dependencies,
/// pii, promptInjection), builds the per-file breakdown, and counts the
/// tree. Everything downstream relies on this order being stable.
pub fn aggregate(
    secrets: SecretsReport,
    dependencies: DependencyReport,
    pii: PiiReport,
    prompt_injection: InjectionReport,
    root: &Path,
) -> AggregatedScan {
    let mut all_issues = Vec::with_capacity(
        secrets.issues.len()
            + dependencies.issues.len()
            + pii.issues.len()
            + prompt_injection.issues.len(),
    );
    all_issues.extend(secrets.issues.iter().cloned());
    all_issues.extend(dependencies.issues.iter().cloned());
    all_issues.extend(pii.issues.iter().cloned());
    all_issues.extend(prompt_injection.issues.iter().cloned());

    let file_breakdown = file_breakdown(&all_issues);
    let total_files = FileWalker::count_files(root);
    debug!(
        total_files,
        total_issues = all_issues.len(),
        "Aggregated scan results"
    );

    let summary = ScanSummary {
        total_files,
        total_issues: all_issues.len(),
        critical: count(&all_issues, Severity::Critical),
        high: count(&all_issues, Severity::High),
        medium: count(&all_issues, Severity::Medium),
        low: count(&all_issues, Severity::Low),
    };

    AggregatedScan {
        summary,
        categories: Categories {
            secrets,
            dependencies,
            pii,
            prompt_injection,
        },
        file_breakdown,
        all_issues,
    }
}

fn count(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

/// Group issues by file in first-seen order, then stable-sort the
/// entries by descending risk. A file's risk level is its worst issue;
/// `Unknown` severities rank as LOW.
fn file_breakdown(all_issues: &[Issue]) -> Vec<FileEntry> {
    let mut entries: Vec<FileEntry> = Vec::new();
    for issue in all_issues {
        match entries.iter_mut().find(|e| e.file == issue.file) {
            Some(entry) => {
                entry.issues.push(issue.clone());
                entry.issue_count += 1;
            }
            None => entries.push(FileEntry {
                file: issue.file.clone(),
                issues: vec![issue.clone()],
                risk_level: Severity::Low,
                issue_count: 1,
            }),
        }
    }

    for entry in &mut entries {
        let max = entry
            .issues
            .iter()
            .map(|i| i.severity)
            .max()
            .unwrap_or(Severity::Low);
        entry.risk_level = if max <= Severity::Low {
            Severity::Low
        } else {
            max
        };
    }

    entries.sort_by_key(|e| std::cmp::Reverse(e.risk_level));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;
    use crate::test_utils::fixtures::create_issue as issue;
    use tempfile::TempDir;

    fn reports(
        secrets: Vec<Issue>,
        pii: Vec<Issue>,
    ) -> (SecretsReport, DependencyReport, PiiReport, InjectionReport) {
        (
            SecretsReport {
                count: secrets.len(),
                critical: 0,
                issues: secrets,
            },
            DependencyReport {
                count: 0,
                issues: vec![],
            },
            PiiReport {
                count: pii.len(),
                gdpr_issues: 0,
                soc2_issues: 0,
                issues: pii,
            },
            InjectionReport {
                count: 0,
                critical: 0,
                issues: vec![],
            },
        )
    }

    #[test]
    fn test_category_concat_order_is_fixed() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(
            vec![issue("a.js", "Secret", Severity::Low, Category::Secrets)],
            vec![issue("b.js", "Pii", Severity::Critical, Category::Pii)],
        );
        let agg = aggregate(s, d, p, i, dir.path());
        assert_eq!(agg.all_issues[0].name, "Secret");
        assert_eq!(agg.all_issues[1].name, "Pii");
    }

    #[test]
    fn test_file_breakdown_groups_and_sorts_by_risk() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(
            vec![
                issue("low.js", "A", Severity::Low, Category::Secrets),
                issue("hot.js", "B", Severity::Low, Category::Secrets),
            ],
            vec![issue("hot.js", "C", Severity::Critical, Category::Pii)],
        );
        let agg = aggregate(s, d, p, i, dir.path());
        assert_eq!(agg.file_breakdown.len(), 2);
        assert_eq!(agg.file_breakdown[0].file, "hot.js");
        assert_eq!(agg.file_breakdown[0].risk_level, Severity::Critical);
        assert_eq!(agg.file_breakdown[0].issue_count, 2);
        assert_eq!(agg.file_breakdown[1].risk_level, Severity::Low);
    }

    #[test]
    fn test_every_issue_lands_in_exactly_one_entry() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(
            vec![
                issue("a.js", "A", Severity::High, Category::Secrets),
                issue("a.js", "B", Severity::Medium, Category::Secrets),
                issue("b.js", "C", Severity::Low, Category::Secrets),
            ],
            vec![],
        );
        let agg = aggregate(s, d, p, i, dir.path());
        let grouped: usize = agg.file_breakdown.iter().map(|e| e.issue_count).sum();
        assert_eq!(grouped, agg.all_issues.len());
        for entry in &agg.file_breakdown {
            assert_eq!(entry.issue_count, entry.issues.len());
        }
    }

    #[test]
    fn test_unknown_risk_reported_as_low() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(
            vec![issue("a.js", "A", Severity::Unknown, Category::Secrets)],
            vec![],
        );
        let agg = aggregate(s, d, p, i, dir.path());
        assert_eq!(agg.file_breakdown[0].risk_level, Severity::Low);
    }

    #[test]
    fn test_summary_counts_by_severity() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(
            vec![
                issue("a.js", "A", Severity::Critical, Category::Secrets),
                issue("a.js", "B", Severity::Critical, Category::Secrets),
                issue("b.js", "C", Severity::Medium, Category::Secrets),
            ],
            vec![issue("c.js", "D", Severity::Low, Category::Pii)],
        );
        let agg = aggregate(s, d, p, i, dir.path());
        assert_eq!(agg.summary.total_issues, 4);
        assert_eq!(agg.summary.critical, 2);
        assert_eq!(agg.summary.high, 0);
        assert_eq!(agg.summary.medium, 1);
        assert_eq!(agg.summary.low, 1);
    }

    #[test]
    fn test_empty_reports_empty_breakdown() {
        let dir = TempDir::new().unwrap();
        let (s, d, p, i) = reports(vec![], vec![]);
        let agg = aggregate(s, d, p, i, dir.path());
        assert!(agg.file_breakdown.is_empty());
        assert_eq!(agg.summary.total_issues, 0);
        assert_eq!(agg.summary.total_files, 0);
    }
}
