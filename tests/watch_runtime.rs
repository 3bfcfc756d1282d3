use std::fs;
use std::path::Path;
use std::time::Duration;

use tokio::sync::mpsc;

use assetpipe::config::{Pipeline, load_and_validate};
use assetpipe::engine::{Runtime, RuntimeEvent};
use assetpipe::manifest::Manifest;

const CONFIG: &str = r#"
[styles]
source = "src/less/main.scss"
dest = "css/main.css"

[scripts.concat]
sources = ["src/js/**/*.js"]
dest = "js/{name}.js"

[scripts.minify]
source = "js/{name}.js"
dest = "js/{name}.min.js"

[watch]
paths = ["src/less/**/*.scss", "src/js/**/*.js"]
debounce_ms = 50
"#;

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
}

fn project(root: &Path) -> Pipeline {
    write_file(root, "Assetpipe.toml", CONFIG);
    write_file(
        root,
        "package.json",
        r#"{"name": "widget", "version": "1.0.0"}"#,
    );
    write_file(root, "src/less/main.scss", "$c: red;\nbody { color: $c; }\n");
    write_file(root, "src/js/a.js", "var a = 1;");

    let cfg = load_and_validate(root.join("Assetpipe.toml")).unwrap();
    let manifest = Manifest::load(&root.join("package.json")).unwrap();
    Pipeline::resolve(&cfg, manifest, root).unwrap()
}

#[tokio::test]
async fn change_burst_runs_chain_and_shutdown_stops_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let pipeline = project(&root);
    let plan = pipeline.watch.clone().unwrap();

    let (tx, rx) = mpsc::channel::<RuntimeEvent>(64);
    let runtime = Runtime::new(pipeline, plan, rx);
    let handle = tokio::spawn(runtime.run());

    // A rapid burst of changes inside one debounce window.
    for _ in 0..5 {
        tx.send(RuntimeEvent::PathChanged {
            path: "src/js/a.js".to_string(),
        })
        .await
        .unwrap();
    }

    // Give the debounce window time to elapse and the chain time to run.
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(root.join("css/main.css").is_file());
    assert!(root.join("js/widget.js").is_file());
    assert!(root.join("js/widget.min.js").is_file());

    tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn chain_failure_keeps_the_runtime_alive() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let pipeline = project(&root);
    let plan = pipeline.watch.clone().unwrap();

    // Break the stylesheet so every chain run fails.
    fs::remove_file(root.join("src/less/main.scss")).unwrap();

    let (tx, rx) = mpsc::channel::<RuntimeEvent>(64);
    let runtime = Runtime::new(pipeline, plan, rx);
    let handle = tokio::spawn(runtime.run());

    tx.send(RuntimeEvent::PathChanged {
        path: "src/js/a.js".to_string(),
    })
    .await
    .unwrap();

    tokio::time::sleep(Duration::from_millis(300)).await;

    // The run failed, but the runtime still accepts events and shuts down
    // cleanly instead of having exited with an error.
    tx.send(RuntimeEvent::ShutdownRequested).await.unwrap();
    handle.await.unwrap().unwrap();
}
