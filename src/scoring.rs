//! Readiness scoring.
//!
//! Base score 100, per-issue deductions by severity, floor at 0. Bands
//! translate the number into a verdict. Category scores are re-derived
//! independently so one noisy category cannot hide another.

use crate::report::Categories;
use crate::rules::{Category, Issue, Severity};
use serde::Serialize;

const BASE_SCORE: u32 = 100;
const MAX_RECOMMENDATIONS: usize = 10;

/// Score band, matched inclusively on both ends.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
    pub verdict: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

pub static SCORE_BANDS: [Band; 3] = [
    Band {
        min: 0,
        max: 40,
        label: "DANGER",
        verdict: "No-Go",
        color: "#ff2d55",
        emoji: "🔴",
    },
    Band {
        min: 41,
        max: 70,
        label: "RISKY",
        verdict: "Conditional Go",
        color: "#ffa500",
        emoji: "🟡",
    },
    Band {
        min: 71,
        max: 100,
        label: "PRODUCTION READY",
        verdict: "Go",
        color: "#00ff88",
        emoji: "🟢",
    },
];

/// Band lookup falls back to the lowest band if the score somehow lands
/// outside every range.
pub fn band_for(score: u32) -> &'static Band {
    SCORE_BANDS
        .iter()
        .find(|b| score >= b.min && score <= b.max)
        .unwrap_or(&SCORE_BANDS[0])
}

/// Per-severity deduction sums. The UPPERCASE keys are the wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeductionBreakdown {
    #[serde(rename = "CRITICAL")]
    pub critical: u32,
    #[serde(rename = "HIGH")]
    pub high: u32,
    #[serde(rename = "MEDIUM")]
    pub medium: u32,
    #[serde(rename = "LOW")]
    pub low: u32,
}

impl DeductionBreakdown {
    fn add(&mut self, severity: Severity) {
        let deduction = severity.deduction();
        match severity {
            Severity::Critical => self.critical += deduction,
            Severity::High => self.high += deduction,
            Severity::Medium => self.medium += deduction,
            Severity::Low => self.low += deduction,
            Severity::Unknown => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub secrets: u32,
    pub dependencies: u32,
    pub pii: u32,
    pub prompt_injection: u32,
}

/// One deduplicated remediation suggestion, with how often the issue
/// recurs across the whole corpus.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub name: String,
    pub remediation: String,
    pub category: Category,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    pub total_deductions: u32,
    pub deduction_breakdown: DeductionBreakdown,
    pub label: &'static str,
    pub verdict: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub category_scores: CategoryScores,
    pub recommendations: Vec<Recommendation>,
}

/// Compute the readiness score for a finished scan. Pure function of
/// the issue lists; same input always produces the same result.
pub fn calculate(all_issues: &[Issue], categories: &Categories) -> ScoreResult {
    let mut total_deductions = 0;
    let mut breakdown = DeductionBreakdown::default();
    for issue in all_issues {
        total_deductions += issue.severity.deduction();
        breakdown.add(issue.severity);
    }

    let score = BASE_SCORE.saturating_sub(total_deductions);
    let band = band_for(score);

    ScoreResult {
        score,
        total_deductions,
        deduction_breakdown: breakdown,
        label: band.label,
        verdict: band.verdict,
        color: band.color,
        emoji: band.emoji,
        category_scores: CategoryScores {
            secrets: category_score(&categories.secrets.issues),
            dependencies: category_score(&categories.dependencies.issues),
            pii: category_score(&categories.pii.issues),
            prompt_injection: category_score(&categories.prompt_injection.issues),
        },
        recommendations: recommendations(all_issues),
    }
}

fn category_score(issues: &[Issue]) -> u32 {
    let deductions: u32 = issues.iter().map(|i| i.severity.deduction()).sum();
    BASE_SCORE.saturating_sub(deductions)
}

/// Severity-ordered, deduped by issue name, capped. The sort is stable
/// so issues of equal severity keep their scan order.
fn recommendations(all_issues: &[Issue]) -> Vec<Recommendation> {
    let mut sorted: Vec<&Issue> = all_issues.iter().collect();
    sorted.sort_by_key(|i| std::cmp::Reverse(i.severity));

    let mut out: Vec<Recommendation> = Vec::new();
    for issue in sorted {
        if out.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if out.iter().any(|r| r.name == issue.name) {
            continue;
        }
        out.push(Recommendation {
            severity: issue.severity,
            name: issue.name.clone(),
            remediation: issue.remediation.clone(),
            category: issue.category,
            occurrences: all_issues.iter().filter(|i| i.name == issue.name).count(),
        });
    }
    out
}
