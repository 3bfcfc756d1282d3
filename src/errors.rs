// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Startup failures (manifest, config) and per-task failures are structured
//! variants so higher layers can report the failing stage by name. "No files
//! matched" is deliberately *not* here: the aggregator treats it as a warning
//! and writes an empty output instead of failing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("project manifest not found at {path:?}")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project manifest {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("stylesheet compilation failed: {message}")]
    Compile { path: PathBuf, message: String },

    #[error("failed to read source file {path:?}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("minification failed for {path:?}: {message}")]
    Minify { path: PathBuf, message: String },

    #[error("failed to set up file watcher: {0}")]
    WatchSetup(#[from] notify::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
