//! Rust rule set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    /// Struct and enum declarations.
    static ref TYPE_RE: Regex = Regex::new(r"(?:pub\s+)?(?:struct|enum)\s+(\w+)").unwrap();

    static ref FN_RE: Regex = Regex::new(r"(?:pub\s+)?fn\s+(\w+)").unwrap();

    /// UPPERCASE const items.
    static ref CONST_RE: Regex = Regex::new(r"const\s+([A-Z_]+):").unwrap();

    static ref USE_RE: Regex = Regex::new(r"use\s+([^;]+);").unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in TYPE_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in FN_RE.captures_iter(content) {
        analysis.record_function(&caps[1]);
    }

    for caps in CONST_RE.captures_iter(content) {
        analysis.record_constant(&caps[1]);
    }

    for caps in USE_RE.captures_iter(content) {
        let path = caps[1].trim();
        if let Some(base) = path.split("::").next() {
            let base = base.trim();
            if !base.is_empty() {
                analysis.count_import(base);
            }
        }
    }

    if content.contains("Result<") {
        analysis.note_error_handling("Result type");
    }
    if content.contains('?') {
        analysis.note_error_handling("? operator");
    }

    if content.contains("async fn") || content.contains(".await") {
        analysis.note_concurrency("async/await");
    }

    if content.contains("#[test]") {
        analysis.note_testing("unit tests");
    }
    if content.contains("#[cfg(test)]") {
        analysis.note_testing("test modules");
    }

    if content.contains("///") || content.contains("//!") {
        analysis.mark_inline_docs();
    }
}
