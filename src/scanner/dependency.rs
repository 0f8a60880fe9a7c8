//! Dependency-risk detection: manifest audit plus dangerous call
//! patterns in source files.

use crate::error::Result;
use crate::rules::dependency::{self, UNPINNED_SEVERITY};
use crate::rules::{Category, Issue, Persona, Rule, Severity};
use crate::scanner::walker::{relative_path, FileWalker};
use crate::scanner::{ensure_dir, read_text, scan_lines, DependencyReport, Scanner};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const SOURCE_EXTENSIONS: &[&str] = &["js", "ts", "jsx", "tsx"];

const PERSONAS: &[Persona] = &[Persona::Dev, Persona::Security];

/// The manifest fields we audit. Anything else in package.json is
/// irrelevant here.
#[derive(Debug, Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Merge the three dependency tables. Later tables win on name
    /// collisions, and BTreeMap keeps the result alphabetical so issue
    /// order never depends on manifest layout.
    fn all_deps(self) -> BTreeMap<String, String> {
        let mut all = self.dependencies;
        all.extend(self.dev_dependencies);
        all.extend(self.peer_dependencies);
        all
    }
}

/// Audits every `package.json` for hallucinated, deprecated, and
/// unpinned packages, then scans JS/TS sources for risky call patterns.
/// Manifest findings carry no line number; their snippet is the
/// `"name": "range"` pair.
pub struct DependencyScanner {
    rules: &'static [Rule],
}

impl DependencyScanner {
    pub fn new() -> Self {
        Self::with_rules(dependency::rules())
    }

    /// Scan with custom call-pattern rules instead of the builtin
    /// registry. The package tables are not swappable.
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    fn manifest_issue(
        name: String,
        severity: Severity,
        file: &str,
        snippet: String,
        remediation: String,
    ) -> Issue {
        Issue {
            category: Category::Dependencies,
            name,
            severity,
            file: file.to_string(),
            line: None,
            snippet,
            remediation,
            persona: PERSONAS.to_vec(),
            gdpr: None,
            soc2: None,
        }
    }

    /// A single declared package can stack all three findings: a
    /// hallucinated name pinned to `*` yields both issues.
    fn check_package(file: &str, name: &str, range: &str, issues: &mut Vec<Issue>) {
        let snippet = format!("\"{name}\": \"{range}\"");

        if dependency::is_hallucinated(name) {
            issues.push(Self::manifest_issue(
                format!("Hallucinated Package: {name}"),
                Severity::High,
                file,
                snippet.clone(),
                format!(
                    "Package \"{name}\" appears to be a hallucinated/non-existent package. \
                     Verify it exists on npmjs.com and replace with the correct package."
                ),
            ));
        }

        if let Some(pkg) = dependency::deprecated_package(name) {
            issues.push(Self::manifest_issue(
                format!("Risky Package: {name}"),
                pkg.severity,
                file,
                snippet.clone(),
                pkg.reason.to_string(),
            ));
        }

        if range == "*" || range == "latest" {
            issues.push(Self::manifest_issue(
                format!("Unpinned Version: {name}"),
                UNPINNED_SEVERITY,
                file,
                snippet,
                format!(
                    "Pin dependency \"{name}\" to a specific semver version (e.g. \"^1.2.3\") \
                     to avoid supply chain attacks."
                ),
            ));
        }
    }

    fn scan_manifests(&self, root: &Path, issues: &mut Vec<Issue>) {
        for path in FileWalker::find_named(root, "package.json") {
            let Some(content) = read_text(&path) else {
                continue;
            };
            let manifest: Manifest = match serde_json::from_str(&content) {
                Ok(m) => m,
                Err(err) => {
                    debug!(path = %path.display(), %err, "Skipping malformed manifest");
                    continue;
                }
            };
            let rel = relative_path(root, &path);
            for (name, range) in manifest.all_deps() {
                Self::check_package(&rel, &name, &range, issues);
            }
        }
    }

    fn scan_sources(&self, root: &Path, issues: &mut Vec<Issue>) {
        let files = FileWalker::new()
            .with_extensions(SOURCE_EXTENSIONS)
            .walk(root);
        for path in &files {
            if let Some(content) = read_text(path) {
                let rel = relative_path(root, path);
                issues.extend(scan_lines(self.rules, &rel, &content));
            }
        }
    }
}

impl Default for DependencyScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for DependencyScanner {
    type Report = DependencyReport;

    fn scan(&self, root: &Path) -> Result<DependencyReport> {
        ensure_dir(root)?;

        let mut issues = Vec::new();
        self.scan_manifests(root, &mut issues);
        self.scan_sources(root, &mut issues);
        debug!(issues = issues.len(), "Dependency scan complete");

        Ok(DependencyReport {
            count: issues.len(),
            issues,
        })
    }
}
