//! The analysis record and its finalized, aggregated form.
//!
//! An [`Analysis`] is the single mutable aggregate for one run: language
//! rule sets append names, count imports, and flip flags while files are
//! scanned. [`Analysis::finalize`] consumes the record and produces the
//! read-only [`Report`], so finalization happens exactly once and nothing
//! can write to the record afterwards.
//!
//! All scan-time operations are commutative (append, increment, set-insert,
//! logical OR, max), so the finalized report does not depend on the order
//! files were visited.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};

use crate::language::Language;

use super::languages;

/// Maximum distinct names kept per naming bucket after finalization.
pub const MAX_NAMES_PER_BUCKET: usize = 10;

/// Maximum ranked imports kept after finalization.
pub const MAX_RANKED_IMPORTS: usize = 15;

/// Mutable analysis record, populated file-by-file during a scan.
#[derive(Debug, Default)]
pub struct Analysis {
    types: Vec<String>,
    functions: Vec<String>,
    constants: Vec<String>,
    private_members: Vec<String>,
    imports: HashMap<String, usize>,
    frameworks: HashSet<String>,
    error_handling: Vec<String>,
    concurrency: Vec<String>,
    testing: Vec<String>,
    documentation: Vec<String>,
    max_file_length: usize,
    typed_declarations: bool,
    inline_docs: bool,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one file's content and fold its patterns into the record.
    ///
    /// Dispatches to the rule set for `language`; languages without a rule
    /// set contribute only the file-length metric.
    pub fn absorb(&mut self, language: Language, content: &str) {
        self.observe_file_length(content.lines().count());
        languages::scan(language, content, self);
    }

    pub fn record_type(&mut self, name: impl Into<String>) {
        self.types.push(name.into());
    }

    pub fn record_function(&mut self, name: impl Into<String>) {
        self.functions.push(name.into());
    }

    pub fn record_constant(&mut self, name: impl Into<String>) {
        self.constants.push(name.into());
    }

    pub fn record_private_member(&mut self, name: impl Into<String>) {
        self.private_members.push(name.into());
    }

    /// Increment the tally for a module/package identifier.
    pub fn count_import(&mut self, module: impl Into<String>) {
        *self.imports.entry(module.into()).or_insert(0) += 1;
    }

    /// Set a framework flag. Monotonic: once set for a run, never cleared.
    pub fn flag_framework(&mut self, name: &str) {
        self.frameworks.insert(name.to_string());
    }

    pub fn note_error_handling(&mut self, label: &str) {
        self.error_handling.push(label.to_string());
    }

    pub fn note_concurrency(&mut self, label: &str) {
        self.concurrency.push(label.to_string());
    }

    pub fn note_testing(&mut self, label: &str) {
        self.testing.push(label.to_string());
    }

    pub fn note_documentation(&mut self, label: &str) {
        self.documentation.push(label.to_string());
    }

    /// Update the maximum observed file length.
    pub fn observe_file_length(&mut self, lines: usize) {
        self.max_file_length = self.max_file_length.max(lines);
    }

    pub fn mark_typed_declarations(&mut self) {
        self.typed_declarations = true;
    }

    pub fn mark_inline_docs(&mut self) {
        self.inline_docs = true;
    }

    /// Aggregate the record into its read-only form.
    ///
    /// Consumes `self`: the record cannot be written to (or finalized)
    /// again. Naming and pattern buckets are deduplicated preserving first
    /// insertion order; naming buckets are truncated to
    /// [`MAX_NAMES_PER_BUCKET`]; imports are ranked by descending count
    /// (ties broken by module name) and truncated to
    /// [`MAX_RANKED_IMPORTS`].
    pub fn finalize(self) -> Report {
        let mut frameworks: Vec<String> = self.frameworks.into_iter().collect();
        frameworks.sort_unstable();

        Report {
            naming: NamingReport {
                types: dedup_stable(self.types, MAX_NAMES_PER_BUCKET),
                functions: dedup_stable(self.functions, MAX_NAMES_PER_BUCKET),
                constants: dedup_stable(self.constants, MAX_NAMES_PER_BUCKET),
                private_members: dedup_stable(self.private_members, MAX_NAMES_PER_BUCKET),
            },
            imports: RankedImports::from_tally(self.imports, MAX_RANKED_IMPORTS),
            frameworks,
            patterns: PatternReport {
                error_handling: dedup_stable(self.error_handling, usize::MAX),
                concurrency: dedup_stable(self.concurrency, usize::MAX),
                testing: dedup_stable(self.testing, usize::MAX),
                documentation: dedup_stable(self.documentation, usize::MAX),
            },
            quality: QualityMetrics {
                max_file_length: self.max_file_length,
                typed_declarations: self.typed_declarations,
                inline_docs: self.inline_docs,
            },
        }
    }
}

/// Deduplicate preserving first-seen order, keeping at most `cap` entries.
fn dedup_stable(names: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        if seen.insert(name.clone()) {
            out.push(name);
            if out.len() == cap {
                break;
            }
        }
    }
    out
}

/// Finalized, read-only analysis report.
#[derive(Debug, Serialize)]
pub struct Report {
    pub naming: NamingReport,
    pub imports: RankedImports,
    pub frameworks: Vec<String>,
    pub patterns: PatternReport,
    pub quality: QualityMetrics,
}

impl Report {
    /// Whether nothing at all was extracted (useful for smoke checks).
    pub fn is_empty(&self) -> bool {
        self.naming.is_empty()
            && self.imports.is_empty()
            && self.frameworks.is_empty()
            && self.patterns.is_empty()
    }
}

/// The four naming buckets, each deduplicated and truncated.
#[derive(Debug, Serialize)]
pub struct NamingReport {
    pub types: Vec<String>,
    pub functions: Vec<String>,
    pub constants: Vec<String>,
    pub private_members: Vec<String>,
}

impl NamingReport {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.functions.is_empty()
            && self.constants.is_empty()
            && self.private_members.is_empty()
    }
}

/// The four pattern buckets, deduplicated.
#[derive(Debug, Serialize)]
pub struct PatternReport {
    pub error_handling: Vec<String>,
    pub concurrency: Vec<String>,
    pub testing: Vec<String>,
    pub documentation: Vec<String>,
}

impl PatternReport {
    pub fn is_empty(&self) -> bool {
        self.error_handling.is_empty()
            && self.concurrency.is_empty()
            && self.testing.is_empty()
            && self.documentation.is_empty()
    }
}

/// Scalar quality metrics, finalized incrementally during the scan.
#[derive(Debug, Serialize)]
pub struct QualityMetrics {
    pub max_file_length: usize,
    pub typed_declarations: bool,
    pub inline_docs: bool,
}

/// Import tally ranked by descending count, truncated to the top N.
///
/// Ties are broken by module name ascending so the ranking is deterministic
/// within a run. Serializes as a JSON mapping in rank order.
#[derive(Debug)]
pub struct RankedImports(Vec<(String, usize)>);

impl RankedImports {
    fn from_tally(tally: HashMap<String, usize>, cap: usize) -> Self {
        let mut entries: Vec<(String, usize)> = tally.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(cap);
        RankedImports(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, usize)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the count for a module, if it survived truncation.
    pub fn count(&self, module: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == module)
            .map(|(_, count)| *count)
    }
}

impl Serialize for RankedImports {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (module, count) in &self.0 {
            map.serialize_entry(module, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_stable_preserves_first_seen_order() {
        let names = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedup_stable(names, 10), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_naming_bucket_truncation() {
        let mut analysis = Analysis::new();
        for i in 0..25 {
            analysis.record_type(format!("Type{}", i));
        }
        let report = analysis.finalize();
        assert_eq!(report.naming.types.len(), MAX_NAMES_PER_BUCKET);
        // Every survivor is a member of the original set.
        for name in &report.naming.types {
            assert!(name.starts_with("Type"));
        }
    }

    #[test]
    fn test_import_ranking() {
        let mut analysis = Analysis::new();
        for _ in 0..5 {
            analysis.count_import("a");
        }
        for _ in 0..9 {
            analysis.count_import("b");
        }
        analysis.count_import("c");
        let report = analysis.finalize();

        let ranked: Vec<&(String, usize)> = report.imports.iter().collect();
        assert_eq!(ranked[0], &("b".to_string(), 9));
        assert_eq!(ranked[1], &("a".to_string(), 5));
        assert_eq!(ranked[2], &("c".to_string(), 1));
    }

    #[test]
    fn test_import_ranking_tie_break_is_deterministic() {
        let mut analysis = Analysis::new();
        analysis.count_import("zeta");
        analysis.count_import("alpha");
        let report = analysis.finalize();

        let ranked: Vec<&(String, usize)> = report.imports.iter().collect();
        // Equal counts: name ascending.
        assert_eq!(ranked[0].0, "alpha");
        assert_eq!(ranked[1].0, "zeta");
    }

    #[test]
    fn test_import_truncation() {
        let mut analysis = Analysis::new();
        for i in 0..30 {
            for _ in 0..=i {
                analysis.count_import(format!("mod{:02}", i));
            }
        }
        let report = analysis.finalize();
        assert_eq!(report.imports.len(), MAX_RANKED_IMPORTS);
        // Highest-count module survives.
        assert_eq!(report.imports.count("mod29"), Some(30));
        // Lowest-count module does not.
        assert_eq!(report.imports.count("mod00"), None);
    }

    #[test]
    fn test_framework_flags_are_monotonic_and_deduplicated() {
        let mut analysis = Analysis::new();
        analysis.flag_framework("React");
        analysis.flag_framework("React");
        analysis.flag_framework("Jest");
        let report = analysis.finalize();
        assert_eq!(report.frameworks, vec!["Jest", "React"]);
    }

    #[test]
    fn test_quality_metrics_fold() {
        let mut analysis = Analysis::new();
        analysis.observe_file_length(120);
        analysis.observe_file_length(80);
        analysis.mark_inline_docs();
        let report = analysis.finalize();
        assert_eq!(report.quality.max_file_length, 120);
        assert!(report.quality.inline_docs);
        assert!(!report.quality.typed_declarations);
    }

    #[test]
    fn test_pattern_buckets_deduplicate() {
        let mut analysis = Analysis::new();
        analysis.note_error_handling("try/except blocks");
        analysis.note_error_handling("try/except blocks");
        analysis.note_error_handling("explicit exceptions");
        let report = analysis.finalize();
        assert_eq!(
            report.patterns.error_handling,
            vec!["try/except blocks", "explicit exceptions"]
        );
    }

    #[test]
    fn test_imports_serialize_as_ordered_map() {
        let mut analysis = Analysis::new();
        analysis.count_import("serde");
        analysis.count_import("serde");
        analysis.count_import("regex");
        let report = analysis.finalize();

        let json = serde_json::to_string(&report.imports).unwrap();
        assert_eq!(json, r#"{"serde":2,"regex":1}"#);
    }
}
