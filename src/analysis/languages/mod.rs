//! Per-language pattern rule sets.
//!
//! Each rule set scans one file's text content and folds matches into the
//! shared [`Analysis`](super::Analysis) record. Matches are best-effort
//! textual patterns, not semantic resolution: a comment or string literal
//! containing a matching substring produces a false positive, and that is
//! accepted behavior.
//!
//! Adding a language means adding a module here and an arm to [`scan`];
//! existing rule sets are never touched.

mod csharp;
mod go;
mod java;
mod python;
mod rust_lang;
mod typescript;

use super::Analysis;
use crate::language::Language;

/// Dispatch one file's content to the rule set for `language`.
///
/// Languages without a rule set are a no-op.
pub fn scan(language: Language, content: &str, analysis: &mut Analysis) {
    match language {
        Language::Python => python::scan(content, analysis),
        // JavaScript shares the TypeScript rule vocabulary.
        Language::TypeScript | Language::JavaScript => typescript::scan(content, analysis),
        Language::CSharp => csharp::scan(content, analysis),
        Language::Go => go::scan(content, analysis),
        Language::Rust => rust_lang::scan(content, analysis),
        Language::Java => java::scan(content, analysis),
        _ => {}
    }
}
