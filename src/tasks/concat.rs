// src/tasks/concat.rs

//! Script aggregation: expand source globs, join file contents with the
//! configured separator, write one output file.
//!
//! Filesystem enumeration order is platform-dependent, so matched paths are
//! sorted lexicographically within each pattern; patterns themselves keep
//! their declared order and a file matched by several patterns keeps its
//! first position. This makes the output deterministic and lets the
//! separator round-trip back to the original file contents.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ConcatTask;
use crate::errors::{PipelineError, Result};
use crate::tasks::write_output;
use crate::watch::patterns::{build_globset, collect_files};

/// Run the aggregation step against the project `root`.
///
/// "No files matched" is non-fatal: a warning is logged and an empty output
/// is written. A matched file that cannot be read is fatal
/// ([`PipelineError::FileRead`]).
pub fn run(task: &ConcatTask, root: &Path) -> Result<()> {
    let matched = resolve_sources(root, &task.sources)?;

    if matched.is_empty() {
        warn!(
            patterns = ?task.sources,
            "no files matched the concat source globs; writing empty output"
        );
        write_output(&task.dest, b"")?;
        return Ok(());
    }

    let mut parts = Vec::with_capacity(matched.len());
    for path in &matched {
        let contents = fs::read_to_string(path).map_err(|source| PipelineError::FileRead {
            path: path.clone(),
            source,
        })?;
        parts.push(contents);
    }

    let joined = parts.join(&task.separator);
    write_output(&task.dest, joined.as_bytes())?;

    info!(
        dest = ?task.dest,
        files = matched.len(),
        bytes = joined.len(),
        "scripts concatenated"
    );
    Ok(())
}

/// Expand glob `patterns` against `root` into an ordered file list.
///
/// One filesystem walk serves all patterns; each pattern then selects and
/// sorts its matches independently.
pub fn resolve_sources(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let files = collect_files(root)?;

    let mut ordered: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let set = build_globset(std::slice::from_ref(pattern))?;

        let mut matches: Vec<&(PathBuf, String)> =
            files.iter().filter(|(_, rel)| set.is_match(rel)).collect();
        matches.sort_by(|a, b| a.1.cmp(&b.1));

        for (path, rel) in matches {
            if seen.insert(path.clone()) {
                debug!(pattern = %pattern, file = %rel, "concat source matched");
                ordered.push(path.clone());
            }
        }
    }

    Ok(ordered)
}
