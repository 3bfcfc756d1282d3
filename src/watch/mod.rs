// src/watch/mod.rs

//! File watching and glob matching.
//!
//! This module is responsible for:
//! - Compiling the configured glob patterns (`patterns.rs`), shared between
//!   the watcher and the aggregator's source expansion.
//! - Wiring up a cross-platform filesystem watcher (`notify`) that turns
//!   matching change events into runtime triggers (`watcher.rs`).
//!
//! It does **not** know about the task chain; debounce-coalescing and
//! re-running live in [`crate::engine`].

pub mod patterns;
pub mod watcher;

pub use patterns::{WatchMatcher, build_globset, collect_files};
pub use watcher::{WatcherHandle, spawn_watcher};
