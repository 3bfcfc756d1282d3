use std::error::Error;
use std::fs;
use std::path::Path;

use assetpipe::config::ConcatTask;
use assetpipe::errors::PipelineError;
use assetpipe::tasks::concat;

type TestResult = Result<(), Box<dyn Error>>;

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
}

fn task(root: &Path, sources: &[&str], separator: &str) -> ConcatTask {
    ConcatTask {
        sources: sources.iter().map(|s| s.to_string()).collect(),
        separator: separator.to_string(),
        dest: root.join("js/bundle.js"),
    }
}

#[test]
fn joins_matches_in_lexicographic_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    write_file(root, "src/js/b.js", "var b = 2");
    write_file(root, "src/js/a.js", "var a = 1");
    write_file(root, "src/js/vendor/z.js", "var z = 3");

    let task = task(root, &["src/js/**/*.js"], ";");
    concat::run(&task, root)?;

    let out = fs::read_to_string(root.join("js/bundle.js"))?;
    assert_eq!(out, "var a = 1;var b = 2;var z = 3");

    Ok(())
}

#[test]
fn split_on_separator_round_trips() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    let inputs = ["var a = 1", "var b = 2", "var c = 3"];
    write_file(root, "src/js/a.js", inputs[0]);
    write_file(root, "src/js/b.js", inputs[1]);
    write_file(root, "src/js/c.js", inputs[2]);

    let task = task(root, &["src/js/*.js"], ";\n");
    concat::run(&task, root)?;

    let out = fs::read_to_string(root.join("js/bundle.js"))?;
    let recovered: Vec<&str> = out.split(";\n").collect();
    assert_eq!(recovered, inputs);

    Ok(())
}

#[test]
fn pattern_order_wins_over_path_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    write_file(root, "src/js/app.js", "app");
    write_file(root, "src/js/zz_first.js", "first");

    // The second pattern also matches zz_first.js; the file keeps its
    // first-pattern position and is not duplicated.
    let task = task(root, &["src/js/zz_first.js", "src/js/*.js"], ";");
    concat::run(&task, root)?;

    let out = fs::read_to_string(root.join("js/bundle.js"))?;
    assert_eq!(out, "first;app");

    Ok(())
}

#[test]
fn no_matches_writes_empty_output_without_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    write_file(root, "src/js/a.js", "var a = 1");

    let task = task(root, &["src/coffee/**/*.coffee"], ";");
    concat::run(&task, root)?;

    let out = fs::read_to_string(root.join("js/bundle.js"))?;
    assert_eq!(out, "");

    Ok(())
}

#[test]
fn dest_parent_directories_are_created() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    write_file(root, "src/js/a.js", "var a = 1");

    let task = ConcatTask {
        sources: vec!["src/js/*.js".to_string()],
        separator: ";".to_string(),
        dest: root.join("deeply/nested/out/bundle.js"),
    };
    concat::run(&task, root)?;

    assert!(root.join("deeply/nested/out/bundle.js").is_file());
    Ok(())
}

#[test]
fn unreadable_matched_file_is_fatal_and_writes_no_output() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    write_file(root, "src/js/a.js", "var a = 1");
    // Matched but unreadable as text: read_to_string fails on invalid UTF-8
    // regardless of platform or the user the tests run as.
    fs::create_dir_all(root.join("src/js")).unwrap();
    fs::write(root.join("src/js/b.js"), [0xFF, 0xFE, 0xFF]).unwrap();

    let task = task(root, &["src/js/*.js"], ";");
    let err = concat::run(&task, root).unwrap_err();
    assert!(matches!(err, PipelineError::FileRead { .. }));

    // Fatal before any write: no partial output appears.
    assert!(!root.join("js/bundle.js").exists());

    Ok(())
}

#[test]
fn invalid_glob_is_a_config_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    let task = task(root, &["src/["], ";");
    let err = concat::run(&task, root).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));

    Ok(())
}
