// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// manifest = "package.json"
///
/// [styles]
/// source = "src/less/main.scss"
/// dest = "css/main.css"
/// compress = true
/// optimization = 2
///
/// [scripts.concat]
/// sources = ["src/js/**/*.js"]
/// separator = ";"
/// dest = "js/{name}.js"
///
/// [scripts.minify]
/// banner = "/*! {name} {date} */"
/// source = "js/{name}.js"
/// dest = "js/{name}.min.js"
///
/// [watch]
/// paths = ["src/less/**/*.less", "src/js/**/*.js"]
/// tasks = ["styles", "concat", "minify"]
/// debounce_ms = 200
/// ```
///
/// `{name}` and `{version}` in path fields expand from the project manifest;
/// `{date}` is only meaningful inside `banner` and expands at run time.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Path to the project manifest, relative to the config file's directory.
    #[serde(default = "default_manifest_path")]
    pub manifest: String,

    /// `[styles]` section: the stylesheet compilation step.
    pub styles: StylesSection,

    /// `[scripts]` section: concatenation and minification steps.
    pub scripts: ScriptsSection,

    /// Optional `[watch]` section; required only for `--watch` mode.
    #[serde(default)]
    pub watch: Option<WatchSection>,
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

/// `[styles]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesSection {
    /// Extended-syntax stylesheet source file.
    pub source: String,

    /// Compiled CSS destination file.
    pub dest: String,

    /// Compress the compiled output (strip whitespace/structure).
    #[serde(default = "default_compress")]
    pub compress: bool,

    /// Compiler aggressiveness, passed through to the stylesheet compiler.
    ///
    /// If unset, follows `compress` (2 when compressing, 0 otherwise). The
    /// compiler we delegate to only distinguishes compressed from expanded
    /// output, so an explicit level >= 1 also forces compression.
    #[serde(default)]
    pub optimization: Option<u8>,
}

fn default_compress() -> bool {
    true
}

/// `[scripts]` section grouping the two JavaScript steps.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptsSection {
    pub concat: ConcatSection,
    pub minify: MinifySection,
}

/// `[scripts.concat]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConcatSection {
    /// Ordered glob patterns; matched files are concatenated in pattern
    /// order, lexicographically within each pattern.
    pub sources: Vec<String>,

    /// Literal string inserted between each pair of concatenated files.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Destination file (may use `{name}` / `{version}` templating).
    pub dest: String,
}

fn default_separator() -> String {
    ";".to_string()
}

/// `[scripts.minify]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MinifySection {
    /// Banner template prepended to the minified output. Supports `{name}`,
    /// `{version}` and `{date}` (current date, dd-mm-yyyy).
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Source file; must resolve to the same path as `scripts.concat.dest`.
    pub source: String,

    /// Minified destination file.
    pub dest: String,
}

fn default_banner() -> String {
    "/*! {name} {date} */".to_string()
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Glob patterns (relative to the project root) to watch for changes.
    pub paths: Vec<String>,

    /// Task names to re-run on each change, in declared order.
    #[serde(default = "default_watch_tasks")]
    pub tasks: Vec<String>,

    /// Debounce window in milliseconds: changes arriving within this window
    /// of each other coalesce into a single chain run.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_watch_tasks() -> Vec<String> {
    vec![
        "styles".to_string(),
        "concat".to_string(),
        "minify".to_string(),
    ]
}

fn default_debounce_ms() -> u64 {
    200
}
