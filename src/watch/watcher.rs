// src/watch/watcher.rs

use std::path::PathBuf;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::watch::patterns::{WatchMatcher, relative_str};

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher that observes the given `root` directory
/// recursively and sends `RuntimeEvent::PathChanged` for create/modify/delete
/// events whose paths match the watch globs.
///
/// Failure to create or register the watcher is fatal
/// ([`crate::errors::PipelineError::WatchSetup`]).
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    matcher: WatchMatcher,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if let Err(err) = event_tx.send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("assetpipe: failed to forward notify event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("assetpipe: file watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("file watcher started on {:?}", root);

    // Async task that consumes notify events and forwards matching changes to
    // the runtime.
    let async_root = root.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            // Pure access events carry no content change.
            if event.kind.is_access() {
                continue;
            }
            debug!("received notify event: {:?}", event);

            for path in &event.paths {
                let Some(rel_str) = relative_str(&async_root, path) else {
                    warn!(
                        "could not relativize path {:?} against root {:?}",
                        path, async_root
                    );
                    continue;
                };

                if matcher.matches(&rel_str) {
                    debug!(path = %rel_str, "watch match -> triggering chain");
                    if let Err(err) = runtime_tx
                        .send(RuntimeEvent::PathChanged { path: rel_str })
                        .await
                    {
                        warn!("failed to send RuntimeEvent::PathChanged: {err}");
                        // If the runtime channel is closed, there's no point
                        // keeping the watcher loop alive.
                        return;
                    }
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}
