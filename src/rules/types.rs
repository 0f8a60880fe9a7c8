use serde::{Deserialize, Serialize};

/// Issue severity. Ordering is significant: `Critical` is the maximum,
/// which is what per-file risk levels and recommendation sorting rely on.
///
/// `Unknown` absorbs malformed severity strings arriving through
/// deserialization. It deducts nothing from the score and sorts below
/// `Low`; the issue itself is still counted and listed. serde requires
/// the catch-all variant to be declared last, so the ordering is
/// written out by hand instead of derived from declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Severity {
    fn rank(&self) -> u8 {
        match self {
            Severity::Unknown => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// Points removed from the readiness score per issue of this severity.
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::Critical => 20,
            Severity::High => 10,
            Severity::Medium => 5,
            Severity::Low => 2,
            Severity::Unknown => 0,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "secrets")]
    Secrets,
    #[serde(rename = "dependencies")]
    Dependencies,
    #[serde(rename = "pii")]
    Pii,
    #[serde(rename = "promptInjection")]
    PromptInjection,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Secrets,
        Category::Dependencies,
        Category::Pii,
        Category::PromptInjection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Secrets => "secrets",
            Category::Dependencies => "dependencies",
            Category::Pii => "pii",
            Category::PromptInjection => "promptInjection",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intended audience for an issue's remediation guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Dev,
    Security,
    Compliance,
}

/// A static detection rule. Registries are ordered, immutable lists of
/// these; nothing mutates them after process start.
///
/// `exclusions` veto individual match occurrences, not whole lines: an
/// occurrence is dropped only when an exclusion regex matches starting
/// at the same position. A localhost URL and an external URL on one
/// line still flag the external one. This is how the negative-lookahead
/// cases (private IP ranges, localhost URLs, env-var references) are
/// expressed without lookahead support, so each exclusion pattern must
/// match from the same position its main pattern matches.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub severity: Severity,
    pub category: Category,
    pub patterns: Vec<regex::Regex>,
    pub exclusions: Vec<regex::Regex>,
    pub remediation: &'static str,
    pub gdpr: bool,
    pub soc2: bool,
    pub personas: &'static [Persona],
}

impl Rule {
    /// Whether the rule fires on this line at all: some pattern has at
    /// least one occurrence that no exclusion vetoes.
    pub fn matches_line(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| {
            p.find_iter(line)
                .any(|m| !self.excluded_at(line, m.start()))
        })
    }

    /// Whether any exclusion regex matches starting exactly at `start`.
    pub fn excluded_at(&self, line: &str, start: usize) -> bool {
        let rest = &line[start..];
        self.exclusions
            .iter()
            .any(|e| e.find(rest).is_some_and(|m| m.start() == 0))
    }
}

const SNIPPET_MAX: usize = 100;

/// One detection result. Issues are immutable once created; downstream
/// stages only filter and copy them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub category: Category,
    pub name: String,
    pub severity: Severity,
    pub file: String,
    pub line: Option<usize>,
    pub snippet: String,
    pub remediation: String,
    pub persona: Vec<Persona>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdpr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soc2: Option<bool>,
}

impl Issue {
    /// Build an issue from a rule firing on a specific line.
    pub fn from_rule(rule: &Rule, file: &str, line: usize, snippet: &str) -> Self {
        Self {
            category: rule.category,
            name: rule.name.to_string(),
            severity: rule.severity,
            file: file.to_string(),
            line: Some(line),
            snippet: truncate_snippet(snippet),
            remediation: rule.remediation.to_string(),
            persona: rule.personas.to_vec(),
            gdpr: if rule.category == Category::Pii {
                Some(rule.gdpr)
            } else {
                None
            },
            soc2: if rule.category == Category::Pii {
                Some(rule.soc2)
            } else {
                None
            },
        }
    }
}

/// Truncate matched text to the snippet cap, respecting char boundaries.
pub fn truncate_snippet(text: &str) -> String {
    text.trim().chars().take(SNIPPET_MAX).collect()
}
