// src/tasks/minify.rs

//! Script minification via `minify-js`, with a generated banner line.
//!
//! The banner template interpolates the project name/version and the current
//! local date in day-month-year form, e.g. `/*! widget 05-03-2024 */`.

use std::path::Path;

use chrono::NaiveDate;
use minify_js::{Session, TopLevelMode, minify};
use tracing::{debug, info};

use crate::config::MinifyTask;
use crate::errors::{PipelineError, Result};
use crate::manifest::Manifest;
use crate::tasks::write_output;

/// Run the minification step.
///
/// Reads the aggregator's output, minifies it, and writes
/// `banner + "\n" + minified` to the destination. A whitespace-only source
/// still produces a valid banner-prefixed output with empty functional
/// content. Syntactically invalid JavaScript is fatal
/// ([`PipelineError::Minify`]).
pub fn run(task: &MinifyTask, manifest: &Manifest) -> Result<()> {
    let source =
        std::fs::read_to_string(&task.source).map_err(|source| PipelineError::FileRead {
            path: task.source.clone(),
            source,
        })?;

    let banner = render_banner(&task.banner, manifest, chrono::Local::now().date_naive());
    let minified = minify_source(&task.source, &source)?;

    debug!(
        source_bytes = source.len(),
        minified_bytes = minified.len(),
        "script minified"
    );

    let mut out = String::with_capacity(banner.len() + minified.len() + 1);
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&minified);

    write_output(&task.dest, out.as_bytes())?;

    info!(dest = ?task.dest, banner = %banner, "minified script written");
    Ok(())
}

/// Render the banner template for a given date.
///
/// `{name}` / `{version}` expand from the manifest and `{date}` formats as
/// `dd-mm-yyyy`. The date is a parameter rather than read inside so the
/// expansion stays testable against a fixed calendar day.
pub fn render_banner(template: &str, manifest: &Manifest, date: NaiveDate) -> String {
    template
        .replace("{name}", &manifest.name)
        .replace("{version}", &manifest.version)
        .replace("{date}", &date.format("%d-%m-%Y").to_string())
}

fn minify_source(path: &Path, source: &str) -> Result<String> {
    let session = Session::new();
    let mut out = Vec::new();
    minify(&session, TopLevelMode::Global, source.as_bytes(), &mut out).map_err(|err| {
        PipelineError::Minify {
            path: path.to_path_buf(),
            message: format!("{err:?}"),
        }
    })?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
