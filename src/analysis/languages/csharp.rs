//! C# rule set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    static ref CLASS_RE: Regex = Regex::new(r"class\s+(\w+)").unwrap();

    /// Access-modified method declarations.
    static ref METHOD_RE: Regex = Regex::new(
        r"(?:public|private|protected|internal)\s+(?:static\s+)?(?:async\s+)?(?:\w+\s+)?(\w+)\s*\("
    )
    .unwrap();

    /// Underscore-prefixed private fields.
    static ref PRIVATE_FIELD_RE: Regex =
        Regex::new(r"private\s+(?:readonly\s+)?\w+\s+(_\w+)").unwrap();

    static ref USING_RE: Regex = Regex::new(r"using\s+([^;]+);").unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in CLASS_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in METHOD_RE.captures_iter(content) {
        analysis.record_function(&caps[1]);
    }

    for caps in PRIVATE_FIELD_RE.captures_iter(content) {
        analysis.record_private_member(&caps[1]);
    }

    for caps in USING_RE.captures_iter(content) {
        let namespace = caps[1].trim();
        if let Some(base) = namespace.split('.').next() {
            if !base.is_empty() {
                analysis.count_import(base);
            }
        }
    }

    if (content.contains("Entity") && content.contains("Framework"))
        || content.contains("DbContext")
    {
        analysis.flag_framework("Entity Framework");
    }
    if content.contains("[ApiController]") || content.contains("Controller") {
        analysis.flag_framework("ASP.NET Core");
    }
    if content.contains("xUnit") || content.contains("[Fact]") {
        analysis.flag_framework("xUnit");
    }
    if content.contains("NUnit") || content.contains("[Test]") {
        analysis.flag_framework("NUnit");
    }

    // Nullable annotations count as typed declarations.
    if content.contains("#nullable enable") || content.contains('?') {
        analysis.mark_typed_declarations();
    }

    if content.contains("try") && content.contains("catch") {
        analysis.note_error_handling("try/catch blocks");
    }

    if content.contains("async ") && content.contains("await ") {
        analysis.note_concurrency("async/await");
    }
    if content.contains(".ConfigureAwait(") {
        analysis.note_concurrency("ConfigureAwait");
    }

    if content.contains("///") {
        analysis.note_documentation("XML documentation");
    }
}
