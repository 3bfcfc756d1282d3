// src/tasks/styles.rs

//! Stylesheet compilation via `grass`.
//!
//! Given identical source and options, `grass` output is deterministic, so
//! repeated runs produce byte-identical CSS.

use grass::{Options, OutputStyle};
use tracing::{debug, info};

use crate::config::StylesTask;
use crate::errors::{PipelineError, Result};
use crate::tasks::write_output;

/// Compile `task.source` and overwrite `task.dest` with the result.
///
/// A missing source file, bad syntax or an unresolved `@import`/`@use` all
/// surface as [`PipelineError::Compile`]; the compiler's message carries the
/// source location. Fatal for the current chain run.
pub fn run(task: &StylesTask) -> Result<()> {
    let style = if task.compress || task.optimization >= 1 {
        OutputStyle::Compressed
    } else {
        OutputStyle::Expanded
    };

    debug!(
        source = ?task.source,
        compress = task.compress,
        optimization = task.optimization,
        "compiling stylesheet"
    );

    let options = Options::default().style(style);
    let css = grass::from_path(&task.source, &options).map_err(|err| PipelineError::Compile {
        path: task.source.clone(),
        message: err.to_string(),
    })?;

    write_output(&task.dest, css.as_bytes())?;

    info!(dest = ?task.dest, bytes = css.len(), "stylesheet compiled");
    Ok(())
}
