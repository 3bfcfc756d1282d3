// src/engine/mod.rs

//! Orchestration engine for assetpipe.
//!
//! This module ties together:
//! - the fixed sequential task chain (`chain.rs`)
//! - debounce-coalescing of change triggers (`trigger.rs`)
//! - the watch-mode event loop that reacts to:
//!   - file-change triggers
//!   - the debounce timer elapsing
//!   - shutdown signals

pub mod chain;
pub mod runtime;
pub mod trigger;

pub use chain::run_chain;
pub use runtime::{Runtime, RuntimeEvent};
pub use trigger::ChangeCoalescer;
