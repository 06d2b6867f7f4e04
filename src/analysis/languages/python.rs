//! Python rule set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    /// Top-level class definitions.
    static ref CLASS_RE: Regex = Regex::new(r"(?m)^class\s+(\w+)").unwrap();

    /// Top-level function definitions, sync or async.
    static ref DEF_RE: Regex = Regex::new(r"(?m)^(?:async\s+)?def\s+(\w+)").unwrap();

    /// UPPERCASE module-level assignments.
    static ref CONST_RE: Regex = Regex::new(r"(?m)^([A-Z_]{2,})\s*=").unwrap();

    /// `from x import y` or `import x` statements.
    static ref IMPORT_RE: Regex =
        Regex::new(r"(?m)^(?:from\s+(\S+)\s+import|import\s+(\S+))").unwrap();

    /// Parameter/return annotations: `: T =`, `: T)`, `-> T`.
    static ref TYPE_HINT_RE: Regex = Regex::new(r":\s*\w+\s*(?:=|\)|->)").unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in CLASS_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in DEF_RE.captures_iter(content) {
        let name = &caps[1];
        // Single leading underscore is private by convention; dunders are not.
        if name.starts_with('_') && !name.starts_with("__") {
            analysis.record_private_member(name);
        } else {
            analysis.record_function(name);
        }
    }

    for caps in CONST_RE.captures_iter(content) {
        analysis.record_constant(&caps[1]);
    }

    for caps in IMPORT_RE.captures_iter(content) {
        let module = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or("");
        if let Some(base) = module.split('.').next() {
            if !base.is_empty() {
                analysis.count_import(base);
            }
        }
    }

    let lower = content.to_lowercase();
    if lower.contains("fastapi") {
        analysis.flag_framework("FastAPI");
    }
    if lower.contains("flask") {
        analysis.flag_framework("Flask");
    }
    if lower.contains("django") {
        analysis.flag_framework("Django");
    }
    if lower.contains("pytest") {
        analysis.flag_framework("pytest");
    }

    if TYPE_HINT_RE.is_match(content) {
        analysis.mark_typed_declarations();
    }

    if content.contains(r#"""""#) || content.contains("'''") {
        analysis.mark_inline_docs();
    }

    if content.contains("try:") {
        analysis.note_error_handling("try/except blocks");
    }
    if content.contains("raise ") {
        analysis.note_error_handling("explicit exceptions");
    }

    if content.contains("async def") {
        analysis.note_concurrency("async/await");
    }
    if content.contains("asyncio") {
        analysis.note_concurrency("asyncio");
    }
}
