// src/config/resolve.rs

//! Resolution of the raw TOML model into the immutable [`Pipeline`].
//!
//! `{name}` / `{version}` placeholders in path fields expand from the project
//! manifest here, exactly once, at startup. The resulting struct is the only
//! form the tasks ever see; nothing downstream mutates it.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::config::model::ConfigFile;
use crate::errors::{PipelineError, Result};
use crate::manifest::Manifest;
use crate::tasks::TaskKind;

/// Fully resolved, immutable pipeline description.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Project root: the directory containing the config file. All relative
    /// paths and glob patterns are evaluated against it.
    pub root: PathBuf,
    pub manifest: Manifest,
    pub styles: StylesTask,
    pub concat: ConcatTask,
    pub minify: MinifyTask,
    pub watch: Option<WatchPlan>,
}

/// Resolved stylesheet compilation step.
#[derive(Debug, Clone)]
pub struct StylesTask {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub compress: bool,
    pub optimization: u8,
}

/// Resolved concatenation step.
#[derive(Debug, Clone)]
pub struct ConcatTask {
    /// Glob patterns relative to the project root, in declared order.
    pub sources: Vec<String>,
    pub separator: String,
    pub dest: PathBuf,
}

/// Resolved minification step.
#[derive(Debug, Clone)]
pub struct MinifyTask {
    /// Banner template; `{date}` stays unexpanded until run time.
    pub banner: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Resolved `[watch]` section.
#[derive(Debug, Clone)]
pub struct WatchPlan {
    pub paths: Vec<String>,
    pub tasks: Vec<TaskKind>,
    pub debounce: Duration,
}

impl Pipeline {
    /// Resolve a validated [`ConfigFile`] against the manifest.
    ///
    /// Enforces the output-chaining contract on the resolved paths:
    /// `scripts.minify.source` must equal `scripts.concat.dest`, since the
    /// minifier consumes exactly what the aggregator produced.
    pub fn resolve(cfg: &ConfigFile, manifest: Manifest, root: &Path) -> Result<Self> {
        let styles = StylesTask {
            source: root.join(expand(&cfg.styles.source, &manifest)),
            dest: root.join(expand(&cfg.styles.dest, &manifest)),
            compress: cfg.styles.compress,
            // An unset level follows `compress`, so `compress = false` alone
            // really does yield expanded output.
            optimization: cfg
                .styles
                .optimization
                .unwrap_or(if cfg.styles.compress { 2 } else { 0 }),
        };

        let concat = ConcatTask {
            sources: cfg.scripts.concat.sources.clone(),
            separator: cfg.scripts.concat.separator.clone(),
            dest: root.join(expand(&cfg.scripts.concat.dest, &manifest)),
        };

        let minify = MinifyTask {
            banner: cfg.scripts.minify.banner.clone(),
            source: root.join(expand(&cfg.scripts.minify.source, &manifest)),
            dest: root.join(expand(&cfg.scripts.minify.dest, &manifest)),
        };

        if minify.source != concat.dest {
            return Err(PipelineError::Config(format!(
                "[scripts.minify].source ({:?}) must resolve to [scripts.concat].dest ({:?})",
                minify.source, concat.dest
            )));
        }

        let watch = match &cfg.watch {
            Some(section) => {
                let mut tasks = Vec::with_capacity(section.tasks.len());
                for name in &section.tasks {
                    tasks.push(TaskKind::from_str(name).map_err(PipelineError::Config)?);
                }
                Some(WatchPlan {
                    paths: section.paths.clone(),
                    tasks,
                    debounce: Duration::from_millis(section.debounce_ms),
                })
            }
            None => None,
        };

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            styles,
            concat,
            minify,
            watch,
        })
    }
}

/// Expand `{name}` / `{version}` placeholders from the manifest.
///
/// Anything else (including `{date}`) is left verbatim.
pub fn expand(template: &str, manifest: &Manifest) -> String {
    template
        .replace("{name}", &manifest.name)
        .replace("{version}", &manifest.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest {
            name: "widget".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn expands_name_and_version() {
        assert_eq!(expand("js/{name}.js", &manifest()), "js/widget.js");
        assert_eq!(
            expand("dist/{name}-{version}.min.js", &manifest()),
            "dist/widget-1.0.0.min.js"
        );
    }

    #[test]
    fn leaves_date_placeholder_alone() {
        assert_eq!(
            expand("/*! {name} {date} */", &manifest()),
            "/*! widget {date} */"
        );
    }
}
