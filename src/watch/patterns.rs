// src/watch/patterns.rs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::errors::{PipelineError, Result};

/// Compiled watch glob patterns.
///
/// The patterns are assumed to be relative to the project root directory.
/// The watcher passes relative paths (e.g. `"src/js/app.js"`) into `matches`.
#[derive(Clone)]
pub struct WatchMatcher {
    set: GlobSet,
}

impl fmt::Debug for WatchMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchMatcher").finish_non_exhaustive()
    }
}

impl WatchMatcher {
    /// Compile the given glob patterns into a matcher.
    pub fn new(patterns: &[String]) -> Result<Self> {
        Ok(Self {
            set: build_globset(patterns)?,
        })
    }

    /// Returns true if a changed path (relative to project root) should
    /// trigger the task chain.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.set.is_match(rel_path)
    }
}

/// Build a GlobSet from simple string patterns.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat)
            .map_err(|err| PipelineError::Config(format!("invalid glob pattern {pat:?}: {err}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|err| PipelineError::Config(format!("building glob set: {err}")))
}

/// Walk `root` and return every regular file as `(absolute path, relative
/// forward-slash string)`, ready for glob matching.
pub fn collect_files(root: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                if let Some(rel) = relative_str(root, &path) {
                    files.push((path, rel));
                }
            }
        }
    }

    Ok(files)
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root` and cannot be relativized.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_accepts_matching_paths_only() {
        let matcher = WatchMatcher::new(&[
            "src/less/**/*.less".to_string(),
            "src/js/**/*.js".to_string(),
        ])
        .unwrap();

        assert!(matcher.matches("src/less/main.less"));
        assert!(matcher.matches("src/js/vendor/lib.js"));
        assert!(!matcher.matches("css/main.css"));
        assert!(!matcher.matches("src/js/readme.md"));
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let err = WatchMatcher::new(&["src/[".to_string()]).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
