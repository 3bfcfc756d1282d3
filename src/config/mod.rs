// src/config/mod.rs

//! Configuration loading, validation and resolution for assetpipe.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like task names and the output-chaining
//!   contract (`validate.rs`).
//! - Resolve templated paths against the project manifest into the immutable
//!   [`Pipeline`] passed to every task (`resolve.rs`).

pub mod loader;
pub mod model;
pub mod resolve;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConcatSection, ConfigFile, MinifySection, StylesSection, WatchSection};
pub use resolve::{ConcatTask, MinifyTask, Pipeline, StylesTask, WatchPlan};
pub use validate::validate_config;
