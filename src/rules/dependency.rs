//! Dependency-risk registry: hallucinated package names, deprecated or
//! compromised packages, and dangerous call patterns in source files.

use crate::rules::compile;
use crate::rules::types::{Category, Persona, Rule, Severity};
use std::sync::LazyLock;

const PERSONAS: &[Persona] = &[Persona::Dev, Persona::Security];

/// Package names that do not exist on the registry but are commonly
/// emitted by AI code assistants (typosquats and pure hallucinations).
pub const HALLUCINATED_PACKAGES: &[&str] = &[
    // Typosquats of popular packages
    "lodahs",
    "expres",
    "expresss",
    "reakt",
    "rectjs",
    "mongoos",
    "mongoosee",
    "reqwest",
    "requesst",
    "axioos",
    "cooors",
    "webpack-cli2",
    "react-dom2",
    "eslint2",
    "node-fetch2",
    "dotenvv",
    "momentjs",
    "momnet",
    "bode",
    "nod",
    "exprees",
    "node-express",
    // Non-existent packages often hallucinated outright
    "openai-node",
    "gpt-api",
    "chatgpt-client",
    "openai-chat",
    "ai-helper",
    "llm-utils",
    "gpt-utils",
    "ai-sdk-node",
    "nextjs-auth",
    "react-auth-kit2",
    "express-auth-middleware",
    "db-connector",
    "mongo-helper",
    "sql-builder",
    "crypto-utils",
    "encrypt-helper",
    "hash-utils",
];

/// A deprecated or previously compromised package, with its own severity.
#[derive(Debug, Clone, Copy)]
pub struct DeprecatedPackage {
    pub name: &'static str,
    pub severity: Severity,
    pub reason: &'static str,
}

pub const DEPRECATED_PACKAGES: &[DeprecatedPackage] = &[
    DeprecatedPackage {
        name: "request",
        severity: Severity::Medium,
        reason: "Deprecated since 2020. Use axios or node-fetch instead.",
    },
    DeprecatedPackage {
        name: "node-uuid",
        severity: Severity::Low,
        reason: "Replaced by the uuid package.",
    },
    DeprecatedPackage {
        name: "crypto-js",
        severity: Severity::Medium,
        reason: "Use Node.js built-in crypto module instead.",
    },
    DeprecatedPackage {
        name: "md5",
        severity: Severity::High,
        reason: "MD5 is cryptographically broken. Use bcrypt or argon2.",
    },
    DeprecatedPackage {
        name: "sha1",
        severity: Severity::High,
        reason: "SHA-1 is deprecated. Use SHA-256+ instead.",
    },
    DeprecatedPackage {
        name: "gulp",
        severity: Severity::Low,
        reason: "Consider modern alternatives like esbuild or Vite.",
    },
    DeprecatedPackage {
        name: "bower",
        severity: Severity::Medium,
        reason: "Bower is deprecated. Use npm/yarn instead.",
    },
    DeprecatedPackage {
        name: "xmlhttprequest",
        severity: Severity::Low,
        reason: "Use fetch or axios in modern code.",
    },
    DeprecatedPackage {
        name: "colors",
        severity: Severity::High,
        reason: "Maintainer published malicious version. Use chalk instead.",
    },
    DeprecatedPackage {
        name: "event-stream",
        severity: Severity::High,
        reason: "Previously compromised. Avoid or vet carefully.",
    },
    DeprecatedPackage {
        name: "flatmap-stream",
        severity: Severity::Critical,
        reason: "Known malicious package.",
    },
    DeprecatedPackage {
        name: "left-pad",
        severity: Severity::Low,
        reason: "Historic supply chain incident. Use string.padStart() instead.",
    },
    DeprecatedPackage {
        name: "node-ipc",
        severity: Severity::High,
        reason: "Contained malicious code in versions 10.1.1 and 10.1.2.",
    },
    DeprecatedPackage {
        name: "ua-parser-js",
        severity: Severity::Critical,
        reason: "Was compromised with cryptominer in v0.7.29, v0.8.0, v1.0.0.",
    },
    DeprecatedPackage {
        name: "coa",
        severity: Severity::Critical,
        reason: "Was compromised and published with malicious code.",
    },
    DeprecatedPackage {
        name: "rc",
        severity: Severity::High,
        reason: "Was compromised. Audit carefully.",
    },
];

pub fn deprecated_package(name: &str) -> Option<&'static DeprecatedPackage> {
    DEPRECATED_PACKAGES.iter().find(|p| p.name == name)
}

pub fn is_hallucinated(name: &str) -> bool {
    HALLUCINATED_PACKAGES.contains(&name)
}

/// Severity applied to wildcard/"latest" version ranges.
pub const UNPINNED_SEVERITY: Severity = Severity::Medium;

fn rule(name: &'static str, severity: Severity, pattern: &str, remediation: &'static str) -> Rule {
    Rule {
        name,
        severity,
        category: Category::Dependencies,
        patterns: vec![compile(pattern)],
        exclusions: Vec::new(),
        remediation,
        gdpr: false,
        soc2: false,
        personas: PERSONAS,
    }
}

/// Dangerous call patterns scanned in source files, independent of any
/// manifest.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(
            "Dynamic eval usage",
            Severity::High,
            r"eval\(",
            "Avoid dynamic eval in production code. It may be exploitable for Remote Code Execution.",
        ),
        rule(
            "Dynamic Function constructor",
            Severity::High,
            r"new Function\(",
            "Avoid the dynamic Function constructor in production code. It may be exploitable for Remote Code Execution.",
        ),
        rule(
            "Shell exec usage",
            Severity::Medium,
            r"child_process\.exec\(",
            "Avoid shell exec in production code. It may be exploitable for Remote Code Execution.",
        ),
        rule(
            "child_process import",
            Severity::Low,
            r#"require\(['"]child_process['"]\)"#,
            "Avoid importing child_process unless shelling out is strictly required, and never pass it untrusted input.",
        ),
    ]
});

pub fn rules() -> &'static [Rule] {
    &RULES
}
