// src/manifest.rs

//! Project manifest loading.
//!
//! The manifest is a small JSON metadata document (the shape of an npm
//! `package.json`): only `name` and `version` are read, any other fields are
//! ignored. It is loaded exactly once at startup and stays immutable for the
//! lifetime of the process; its values feed output-path templating and the
//! minifier banner.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{PipelineError, Result};

/// Project metadata as read from the manifest file.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
}

impl Manifest {
    /// Load the manifest from `path`.
    ///
    /// A missing file surfaces as [`PipelineError::ManifestNotFound`],
    /// malformed JSON (or a missing `name`/`version` field) as
    /// [`PipelineError::ManifestParse`]; any other read failure keeps its
    /// I/O identity. All are fatal at startup: no task runs without a
    /// manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PipelineError::ManifestNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                PipelineError::Io(source)
            }
        })?;

        let manifest: Manifest =
            serde_json::from_str(&contents).map_err(|source| PipelineError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(name = %manifest.name, version = %manifest.version, "manifest loaded");
        Ok(manifest)
    }
}
