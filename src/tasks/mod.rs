// src/tasks/mod.rs

//! The three build steps of the pipeline.
//!
//! - [`styles`]: extended-syntax stylesheet -> compressed CSS (`grass`).
//! - [`concat`]: glob-matched JS sources -> one joined file.
//! - [`minify`]: joined file -> banner + minified output (`minify-js`).
//!
//! Each step is a plain synchronous function taking its slice of the
//! immutable [`crate::config::Pipeline`]; ordering between steps is owned by
//! [`crate::engine::chain`].

pub mod concat;
pub mod minify;
pub mod styles;

use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Identity of a pipeline step, as named in `[watch].tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Styles,
    Concat,
    Minify,
}

/// The default chain, in its fixed declared order.
pub const DEFAULT_CHAIN: [TaskKind; 3] = [TaskKind::Styles, TaskKind::Concat, TaskKind::Minify];

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskKind::Styles => "styles",
            TaskKind::Concat => "concat",
            TaskKind::Minify => "minify",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "styles" => Ok(TaskKind::Styles),
            "concat" => Ok(TaskKind::Concat),
            "minify" => Ok(TaskKind::Minify),
            other => Err(format!(
                "unknown task name: {other} (expected \"styles\", \"concat\" or \"minify\")"
            )),
        }
    }
}

/// Write `contents` to `dest`, creating parent directories as needed.
///
/// Destinations are always overwritten; there is no rollback of outputs
/// written by earlier steps when a later step fails.
pub(crate) fn write_output(dest: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(dest, contents)?;
    Ok(())
}
