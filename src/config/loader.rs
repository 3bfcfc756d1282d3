// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::{PipelineError, Result};

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (task names, chaining contract, etc.). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| {
        PipelineError::Config(format!("reading config file at {:?}: {}", path, source))
    })?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + default functions).
/// - Checks for:
///   - empty glob lists,
///   - unknown or duplicated watch task names,
///   - a zero debounce window.
///
/// Path templating against the manifest happens later, in
/// [`crate::config::resolve::Pipeline::resolve`], which also enforces the
/// output-chaining contract on the *resolved* paths.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}
