// src/engine/runtime.rs

use tokio::sync::mpsc;
use tokio::time::{Duration as TokioDuration, Instant as TokioInstant, sleep_until};
use tracing::{debug, info, warn};

use crate::config::{Pipeline, WatchPlan};
use crate::engine::chain::run_chain;
use crate::engine::trigger::ChangeCoalescer;
use crate::errors::Result;

/// Events sent into the runtime from the watcher or external signals.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    PathChanged { path: String },
    ShutdownRequested,
}

/// The watch-mode runtime.
///
/// State machine: Watching -> (change) Triggered -> (debounce elapsed)
/// Running -> Watching, looping until shutdown. The chain runs synchronously
/// inside the loop, so triggers arriving mid-run queue up in the channel and
/// coalesce into at most one pending re-run once the loop drains them.
///
/// Chain failures are reported and the loop returns to Watching; only
/// shutdown (or all event senders dropping) ends the loop.
pub struct Runtime {
    pipeline: Pipeline,
    plan: WatchPlan,
    coalescer: ChangeCoalescer,
    events_rx: mpsc::Receiver<RuntimeEvent>,
}

impl Runtime {
    pub fn new(pipeline: Pipeline, plan: WatchPlan, events_rx: mpsc::Receiver<RuntimeEvent>) -> Self {
        let coalescer = ChangeCoalescer::new(plan.debounce);
        Self {
            pipeline,
            plan,
            coalescer,
            events_rx,
        }
    }

    /// Main event loop.
    pub async fn run(mut self) -> Result<()> {
        info!(
            tasks = ?self.plan.tasks,
            debounce_ms = self.plan.debounce.as_millis() as u64,
            "assetpipe watch runtime started"
        );

        loop {
            let deadline = self.coalescer.deadline().map(TokioInstant::from_std);

            tokio::select! {
                maybe_event = self.events_rx.recv() => {
                    match maybe_event {
                        None => {
                            debug!("all event senders dropped, stopping runtime");
                            break;
                        }
                        Some(RuntimeEvent::ShutdownRequested) => {
                            info!("shutdown requested, stopping runtime");
                            break;
                        }
                        Some(RuntimeEvent::PathChanged { path }) => {
                            debug!(path = %path, "file change trigger");
                            self.coalescer.record(std::time::Instant::now());
                        }
                    }
                }
                _ = sleep_until(deadline.unwrap_or_else(far_future)), if deadline.is_some() => {
                    let coalesced = self.coalescer.take();
                    info!(coalesced, "debounce window elapsed, running task chain");

                    if let Err(err) = run_chain(&self.pipeline, &self.plan.tasks) {
                        warn!(error = %err, "task chain failed; continuing to watch");
                    }
                }
            }
        }

        info!("assetpipe watch runtime exiting");
        Ok(())
    }
}

/// Placeholder instant for the disabled timer branch; the `if` guard keeps it
/// from ever being awaited.
fn far_future() -> TokioInstant {
    TokioInstant::now() + TokioDuration::from_secs(86_400)
}
