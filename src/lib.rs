// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod tasks;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tokio::sync::mpsc;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::{Pipeline, WatchPlan};
use crate::engine::{Runtime, RuntimeEvent, run_chain};
use crate::manifest::Manifest;
use crate::tasks::DEFAULT_CHAIN;
use crate::watch::WatchMatcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - manifest loading + pipeline resolution
/// - the one-shot task chain, or
/// - watcher + debounce runtime in `--watch` mode
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;
    let root = config_root_dir(&config_path);

    let manifest = Manifest::load(&root.join(&cfg.manifest))?;
    let pipeline = Pipeline::resolve(&cfg, manifest, &root)?;

    if args.dry_run {
        print_dry_run(&pipeline);
        return Ok(());
    }

    if !args.watch {
        // One-shot mode: run the default chain, first fatal failure aborts
        // and surfaces as a non-zero exit in main.
        run_chain(&pipeline, &DEFAULT_CHAIN)?;
        return Ok(());
    }

    let plan: WatchPlan = pipeline
        .watch
        .clone()
        .ok_or_else(|| anyhow!("--watch requires a [watch] section in {:?}", config_path))?;

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // File watcher; setup failure is fatal.
    let matcher = WatchMatcher::new(&plan.paths)?;
    let _watcher_handle = watch::spawn_watcher(root, matcher, rt_tx.clone())?;

    // Ctrl-C -> graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let runtime = Runtime::new(pipeline, plan, rt_rx);
    runtime.run().await?;
    Ok(())
}

/// Figure out the project root for path and glob resolution.
/// Currently: directory containing the config file, or `.`.
fn config_root_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Simple dry-run output: print the resolved pipeline.
fn print_dry_run(pipeline: &Pipeline) {
    println!("assetpipe dry-run");
    println!(
        "  project: {} {}",
        pipeline.manifest.name, pipeline.manifest.version
    );
    println!("  root: {:?}", pipeline.root);
    println!();

    println!("styles:");
    println!("    source: {:?}", pipeline.styles.source);
    println!("    dest: {:?}", pipeline.styles.dest);
    println!("    compress: {}", pipeline.styles.compress);
    println!("    optimization: {}", pipeline.styles.optimization);

    println!("concat:");
    println!("    sources: {:?}", pipeline.concat.sources);
    println!("    separator: {:?}", pipeline.concat.separator);
    println!("    dest: {:?}", pipeline.concat.dest);

    println!("minify:");
    println!("    banner: {:?}", pipeline.minify.banner);
    println!("    source: {:?}", pipeline.minify.source);
    println!("    dest: {:?}", pipeline.minify.dest);

    if let Some(plan) = &pipeline.watch {
        println!("watch:");
        println!("    paths: {:?}", plan.paths);
        println!("    tasks: {:?}", plan.tasks);
        println!("    debounce_ms: {}", plan.debounce.as_millis());
    }
}
