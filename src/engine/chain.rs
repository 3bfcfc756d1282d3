// src/engine/chain.rs

//! Sequential execution of the task chain.
//!
//! The order is fixed by declaration (styles -> concat -> minify by default)
//! and never inferred: concat's output feeds minify's input, so the steps run
//! strictly one after another even though styles is independent of both.

use tracing::{error, info};

use crate::config::Pipeline;
use crate::errors::Result;
use crate::tasks::{self, TaskKind};

/// Run the given tasks in declared order, aborting on the first failure.
///
/// The failing task's name is logged here together with the cause; the error
/// itself propagates so one-shot mode can exit non-zero while watch mode
/// keeps its loop alive. Outputs already written by earlier tasks are left on
/// disk.
pub fn run_chain(pipeline: &Pipeline, chain: &[TaskKind]) -> Result<()> {
    for task in chain {
        info!(task = %task, "running task");

        let result = match task {
            TaskKind::Styles => tasks::styles::run(&pipeline.styles),
            TaskKind::Concat => tasks::concat::run(&pipeline.concat, &pipeline.root),
            TaskKind::Minify => tasks::minify::run(&pipeline.minify, &pipeline.manifest),
        };

        if let Err(err) = result {
            error!(task = %task, error = %err, "task failed, aborting remaining chain");
            return Err(err);
        }
    }

    info!("task chain completed");
    Ok(())
}
