//! Go rule set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    /// Struct and interface type declarations.
    static ref TYPE_RE: Regex = Regex::new(r"type\s+(\w+)\s+(?:struct|interface)").unwrap();

    /// Function declarations, with optional method receiver.
    static ref FUNC_RE: Regex =
        Regex::new(r"func\s+(?:\(\w+\s+\*?\w+\)\s+)?(\w+)\s*\(").unwrap();

    /// Import blocks or single-import lines.
    static ref IMPORT_RE: Regex =
        Regex::new(r#"(?s)import\s+(?:\(\s*([^)]+)\)|"([^"]+)")"#).unwrap();

    /// Quoted paths inside an import block.
    static ref IMPORT_PATH_RE: Regex = Regex::new(r#""([^"]+)""#).unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in TYPE_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in FUNC_RE.captures_iter(content) {
        analysis.record_function(&caps[1]);
    }

    for caps in IMPORT_RE.captures_iter(content) {
        if let Some(block) = caps.get(1) {
            for path_caps in IMPORT_PATH_RE.captures_iter(block.as_str()) {
                count_package(analysis, &path_caps[1]);
            }
        } else if let Some(single) = caps.get(2) {
            count_package(analysis, single.as_str());
        }
    }

    if content.contains("if err != nil") {
        analysis.note_error_handling("explicit error checking");
    }
    if content.contains("defer ") {
        analysis.note_error_handling("defer for cleanup");
    }

    if content.contains("go func") || content.contains("go ") {
        analysis.note_concurrency("goroutines");
    }
    if content.contains("chan ") {
        analysis.note_concurrency("channels");
    }
    if content.contains("sync.") {
        analysis.note_concurrency("sync primitives");
    }

    if content.contains("func Test") {
        analysis.note_testing("standard testing");
    }
    if content.contains("t.Run(") {
        analysis.note_testing("table-driven tests");
    }
}

/// Tally an import path keyed by its final segment: that is the package name.
fn count_package(analysis: &mut Analysis, path: &str) {
    if let Some(package) = path.rsplit('/').next() {
        if !package.is_empty() {
            analysis.count_import(package);
        }
    }
}
