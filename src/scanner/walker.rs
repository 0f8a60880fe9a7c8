//! Deny-list directory traversal shared by all detectors.

use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Directories never descended into, at any depth.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "__pycache__",
    ".next",
    "vendor",
    "target",
];

/// Lock/minified file suffixes skipped by content scanners.
pub const SKIP_SUFFIXES: &[&str] = &[".min.js", ".lock", "yarn.lock", "package-lock.json"];

fn is_skipped_dir(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}

/// Walks a root directory applying the shared directory deny-list plus
/// per-caller file filters. Every `walk` call re-walks from scratch;
/// entries are visited in sorted order so repeated scans of the same
/// tree produce identical output. Unreadable entries and broken
/// symlinks are skipped silently.
#[derive(Debug, Clone, Default)]
pub struct FileWalker {
    extensions: &'static [&'static str],
    env_dotfiles: bool,
    skip_suffixes: bool,
}

impl FileWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to files with one of these extensions (without the dot).
    /// Empty means every file.
    pub fn with_extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    /// Also yield dotfiles whose name starts with `.env`, regardless of
    /// the extension filter (`.env`, `.env.local`, ...).
    pub fn with_env_dotfiles(mut self, include: bool) -> Self {
        self.env_dotfiles = include;
        self
    }

    /// Skip lockfiles and minified bundles by suffix.
    pub fn with_suffix_denylist(mut self, skip: bool) -> Self {
        self.skip_suffixes = skip;
        self
    }

    fn wants(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        if self.skip_suffixes && SKIP_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            return false;
        }

        if self.env_dotfiles && name.starts_with(".env") {
            return true;
        }

        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e))
    }

    /// Walk the tree and return matching file paths in deterministic order.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        trace!(root = %root.display(), "Walking directory");
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e
                        .file_name()
                        .to_str()
                        .is_some_and(is_skipped_dir)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.wants(e.path()))
            .map(|e| e.into_path())
            .collect()
    }

    /// Find every file with this exact name (e.g. `package.json`),
    /// honoring the directory deny-list.
    pub fn find_named(root: &Path, file_name: &str) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e
                        .file_name()
                        .to_str()
                        .is_some_and(is_skipped_dir)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.file_name().to_str() == Some(file_name))
            .map(|e| e.into_path())
            .collect()
    }

    /// Count every non-excluded file in the tree, with no extension
    /// filter. Independent of how many files carry issues.
    pub fn count_files(root: &Path) -> usize {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e
                        .file_name()
                        .to_str()
                        .is_some_and(is_skipped_dir)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count()
    }
}

/// Path relative to the scan root, as reported in issues.
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
