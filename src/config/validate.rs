// src/config/validate.rs

use std::collections::HashSet;
use std::str::FromStr;

use crate::config::model::ConfigFile;
use crate::errors::{PipelineError, Result};
use crate::tasks::TaskKind;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `scripts.concat.sources` is non-empty
/// - `[watch]`, when present, has at least one path
/// - watch task names are known and not duplicated
/// - `debounce_ms >= 1`
///
/// It does **not**:
/// - verify that glob patterns compile (the watcher and aggregator report
///   that with the offending pattern attached)
/// - enforce the chaining contract `scripts.minify.source ==
///   scripts.concat.dest`; both fields may be templated, so the check runs on
///   resolved paths in [`crate::config::resolve::Pipeline::resolve`].
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_sources(cfg)?;
    validate_watch_section(cfg)?;
    Ok(())
}

fn ensure_has_sources(cfg: &ConfigFile) -> Result<()> {
    if cfg.scripts.concat.sources.is_empty() {
        return Err(PipelineError::Config(
            "[scripts.concat].sources must contain at least one glob pattern".to_string(),
        ));
    }
    Ok(())
}

fn validate_watch_section(cfg: &ConfigFile) -> Result<()> {
    let Some(watch) = &cfg.watch else {
        return Ok(());
    };

    if watch.paths.is_empty() {
        return Err(PipelineError::Config(
            "[watch].paths must contain at least one glob pattern".to_string(),
        ));
    }

    if watch.tasks.is_empty() {
        return Err(PipelineError::Config(
            "[watch].tasks must name at least one task".to_string(),
        ));
    }

    let mut seen: HashSet<TaskKind> = HashSet::new();
    for name in &watch.tasks {
        let kind = TaskKind::from_str(name).map_err(PipelineError::Config)?;
        if !seen.insert(kind) {
            return Err(PipelineError::Config(format!(
                "[watch].tasks lists task '{}' more than once",
                name
            )));
        }
    }

    if watch.debounce_ms == 0 {
        return Err(PipelineError::Config(
            "[watch].debounce_ms must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
