//! PII and compliance registry.
//!
//! Each rule carries GDPR/SOC2 applicability flags which are copied onto
//! the issues it produces. Shape-only matching: card numbers are detected
//! by issuer prefix and length, no checksum validation.

use crate::rules::compile;
use crate::rules::types::{Category, Persona, Rule, Severity};
use std::sync::LazyLock;

const PERSONAS: &[Persona] = &[Persona::Security, Persona::Compliance];

#[allow(clippy::too_many_arguments)]
fn rule(
    name: &'static str,
    severity: Severity,
    pattern: &str,
    exclusions: &[&str],
    gdpr: bool,
    soc2: bool,
    remediation: &'static str,
) -> Rule {
    Rule {
        name,
        severity,
        category: Category::Pii,
        patterns: vec![compile(pattern)],
        exclusions: exclusions.iter().map(|e| compile(e)).collect(),
        remediation,
        gdpr,
        soc2,
        personas: PERSONAS,
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(
            "Email Address (Hardcoded)",
            Severity::Medium,
            r#"['"][a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}['"]"#,
            &[],
            true,
            true,
            "Remove hardcoded email addresses. Use placeholder variables or environment-based config.",
        ),
        rule(
            "Social Security Number (SSN)",
            Severity::Critical,
            r"\b\d{3}-\d{2}-\d{4}\b",
            &[],
            true,
            true,
            "SSNs are highly sensitive PII. Remove immediately and ensure they are never stored in code or logs.",
        ),
        rule(
            "Credit Card Number",
            Severity::Critical,
            r"\b(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12}|(?:2131|1800|35\d{3})\d{11})\b",
            &[],
            true,
            true,
            "Credit card numbers must never appear in source code. Remove immediately. Use tokenized payment providers (Stripe, Braintree).",
        ),
        rule(
            "Phone Number (Hardcoded)",
            Severity::Low,
            r"\b(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
            &[],
            true,
            false,
            "Avoid hardcoding phone numbers in source code. Use configuration files or environment variables.",
        ),
        // Private (RFC1918), loopback, and broadcast ranges are excluded,
        // replacing the original's negative lookahead.
        rule(
            "IP Address (Hardcoded)",
            Severity::Low,
            r"\b(?:\d{1,3}\.){3}\d{1,3}\b",
            &[r"\b(?:10\.|192\.168\.|172\.|127\.)", r"0\.0\.0\.0", r"255\.255\.255\.255"],
            false,
            true,
            "Avoid hardcoding external IP addresses. Use DNS names or environment config.",
        ),
        rule(
            "Passport Number",
            Severity::Critical,
            r#"(?i)passport[_\-\s]*(?:no|number|num)\s*[=:]\s*['"]?[A-Z]{1,2}[0-9]{6,9}['"]?"#,
            &[],
            true,
            false,
            "Passport numbers are sensitive government ID. Remove from code and ensure encrypted storage.",
        ),
        rule(
            "Missing Privacy Policy",
            Severity::Medium,
            r"(?i)(?:collect|store|process|handle)\s+(?:user\s+)?(?:data|information|details)",
            &[],
            true,
            true,
            "Ensure a Privacy Policy exists and is linked. Data collection must be disclosed under GDPR Article 13.",
        ),
        rule(
            "Missing Data Encryption",
            Severity::High,
            r"http://",
            &[r"http://localhost", r"http://127\.0\.0\.1"],
            true,
            true,
            "Using HTTP (not HTTPS) for external requests violates GDPR data security requirements (Article 32). Use HTTPS.",
        ),
        rule(
            "User Data Logged",
            Severity::High,
            r"(?i)console\.log\([^)]*(?:user|email|password|phone|address|ssn|dob)[^)]*\)",
            &[],
            true,
            true,
            "Logging PII data violates GDPR and SOC2. Remove PII from logs or use a redaction library.",
        ),
        rule(
            "No Cookie Consent Check",
            Severity::Medium,
            r"document\.cookie\s*=",
            &[],
            true,
            false,
            "Setting cookies without consent check violates GDPR. Implement a cookie consent banner and only set non-essential cookies after consent.",
        ),
    ]
});

pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Presence-check issue data for a repository missing `.env.example`.
/// Evaluated once per scan, not per file.
pub const MISSING_ENV_EXAMPLE_NAME: &str = "Missing .env.example";
pub const MISSING_ENV_EXAMPLE_REMEDIATION: &str = "Add a .env.example file documenting all required environment variables (without real values). This is required for SOC2 documentation.";
pub const MISSING_ENV_EXAMPLE_PERSONAS: &[Persona] = &[Persona::Dev, Persona::Compliance];
