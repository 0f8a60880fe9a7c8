#[cfg(test)]
pub mod fixtures {
    use crate::rules::{Category, Issue, Severity};
    use std::fs;
    use std::path::Path;

    pub fn create_issue(file: &str, name: &str, severity: Severity, category: Category) -> Issue {
        Issue {
            category,
            name: name.to_string(),
            severity,
            file: file.to_string(),
            line: Some(1),
            snippet: "test snippet".to_string(),
            remediation: "test remediation".to_string(),
            persona: vec![],
            gdpr: None,
            soc2: None,
        }
    }

    /// Write a file under `dir`, creating parent directories as needed.
    pub fn write_file(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(path, content).expect("write fixture file");
    }
}
