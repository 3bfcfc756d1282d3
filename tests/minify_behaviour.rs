use std::error::Error;
use std::fs;
use std::path::Path;

use assetpipe::config::MinifyTask;
use assetpipe::errors::PipelineError;
use assetpipe::manifest::Manifest;
use assetpipe::tasks::minify;

type TestResult = Result<(), Box<dyn Error>>;

fn manifest() -> Manifest {
    Manifest {
        name: "widget".to_string(),
        version: "1.0.0".to_string(),
    }
}

fn task(root: &Path) -> MinifyTask {
    MinifyTask {
        banner: "/*! {name} {date} */".to_string(),
        source: root.join("js/widget.js"),
        dest: root.join("js/widget.min.js"),
    }
}

fn write_source(root: &Path, contents: &str) {
    fs::create_dir_all(root.join("js")).unwrap();
    fs::write(root.join("js/widget.js"), contents).unwrap();
}

#[test]
fn minified_output_is_banner_plus_compressed_source() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    write_source(
        root,
        "var answer = 40 + 2;\n\nfunction shout() {\n    return answer;\n}\n",
    );

    minify::run(&task(root), &manifest())?;

    let out = fs::read_to_string(root.join("js/widget.min.js"))?;
    let mut lines = out.lines();
    let banner = lines.next().unwrap();
    assert!(banner.starts_with("/*! widget "));
    assert!(banner.ends_with(" */"));

    let body: String = lines.collect();
    assert!(!body.is_empty());
    assert!(body.len() < 70);

    Ok(())
}

#[test]
fn whitespace_only_source_still_gets_a_banner() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    write_source(root, "   \n\t\n  \n");

    minify::run(&task(root), &manifest())?;

    let out = fs::read_to_string(root.join("js/widget.min.js"))?;
    assert!(out.starts_with("/*! widget "));
    // Banner line plus empty functional content.
    assert_eq!(out.trim_end(), out.lines().next().unwrap());

    Ok(())
}

#[test]
fn invalid_javascript_is_a_minify_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    write_source(root, "function ( {");

    let err = minify::run(&task(root), &manifest()).unwrap_err();
    assert!(matches!(err, PipelineError::Minify { .. }));
    assert!(!root.join("js/widget.min.js").exists());

    Ok(())
}

#[test]
fn missing_source_is_a_file_read_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    let err = minify::run(&task(root), &manifest()).unwrap_err();
    assert!(matches!(err, PipelineError::FileRead { .. }));

    Ok(())
}
