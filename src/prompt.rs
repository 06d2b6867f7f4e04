//! Review-prompt rendering.
//!
//! [`PromptBuilder`] turns a finalized analysis report into a custom review
//! prompt: a structured text document describing the project's observed
//! conventions, ending with a review-guideline footer. The generated
//! document is itself a template containing the `{filename}`, `{language}`
//! and `{code}` placeholders, filled in later by [`render_template`] when a
//! file is submitted for review.

use crate::analysis::{classify, Report};
use crate::language::Language;

/// Maximum example names shown per naming-convention line.
const MAX_EXAMPLES: usize = 5;

/// Maximum import entries listed in the frameworks section.
const MAX_LISTED_IMPORTS: usize = 10;

/// Builds a custom review prompt from a finalized analysis report.
pub struct PromptBuilder<'a> {
    report: &'a Report,
    language: Language,
    project: &'a str,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(report: &'a Report, language: Language, project: &'a str) -> Self {
        Self {
            report,
            language,
            project,
        }
    }

    /// Generate the full prompt document.
    ///
    /// Sections appear in fixed order; a section with nothing to report is
    /// omitted entirely rather than emitted as an empty heading.
    pub fn generate(&self) -> String {
        let sections = [
            Some(self.header()),
            self.naming_conventions(),
            self.frameworks(),
            self.best_practices(),
            self.testing(),
            self.code_quality(),
            Some(self.footer()),
        ];

        sections
            .into_iter()
            .flatten()
            .collect::<Vec<String>>()
            .join("\n\n")
    }

    fn header(&self) -> String {
        format!(
            "You are an expert {} code reviewer for the {} project.\n\
             \n\
             This prompt was auto-generated by analyzing the existing codebase to extract\n\
             coding conventions, patterns, and standards. Review new code to ensure it\n\
             matches the established patterns in this project.\n\
             \n\
             File: {{filename}}\n\
             Language: {{language}}",
            title_case(self.language.as_str()),
            self.project
        )
    }

    fn naming_conventions(&self) -> Option<String> {
        let naming = &self.report.naming;
        let mut lines = vec!["## 1. Naming Conventions".to_string()];

        let buckets: [(&str, &Vec<String>); 4] = [
            ("Classes/Types", &naming.types),
            ("Functions/Methods", &naming.functions),
            ("Constants", &naming.constants),
            ("Private fields", &naming.private_members),
        ];

        for (label, names) in buckets {
            if names.is_empty() {
                continue;
            }
            let style = classify(names);
            let examples = names
                .iter()
                .take(MAX_EXAMPLES)
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(", ");
            lines.push(format!("- {}: {} (e.g., {})", label, style, examples));
        }

        (lines.len() > 1).then(|| lines.join("\n"))
    }

    fn frameworks(&self) -> Option<String> {
        let frameworks = &self.report.frameworks;
        let imports = &self.report.imports;

        if frameworks.is_empty() && imports.is_empty() {
            return None;
        }

        let mut lines = vec!["## 2. Frameworks & Libraries".to_string()];

        if !frameworks.is_empty() {
            lines.push("\nThis project uses:".to_string());
            for framework in frameworks {
                lines.push(format!("- {}", framework));
            }
        }

        if !imports.is_empty() {
            lines.push("\nCommon imports/packages:".to_string());
            for (module, count) in imports.iter().take(MAX_LISTED_IMPORTS) {
                lines.push(format!("- {} (used {} times)", module, count));
            }
        }

        Some(lines.join("\n"))
    }

    fn best_practices(&self) -> Option<String> {
        let patterns = &self.report.patterns;
        let mut lines = vec!["## 3. Code Patterns & Best Practices".to_string()];

        if !patterns.error_handling.is_empty() {
            lines.push("\nError Handling:".to_string());
            for pattern in &patterns.error_handling {
                lines.push(format!("- Uses {}", pattern));
            }
        }

        if !patterns.concurrency.is_empty() {
            lines.push("\nAsync/Concurrency Patterns:".to_string());
            for pattern in &patterns.concurrency {
                lines.push(format!("- Uses {}", pattern));
            }
        }

        if !patterns.documentation.is_empty() {
            lines.push("\nDocumentation:".to_string());
            for pattern in &patterns.documentation {
                lines.push(format!("- Uses {}", pattern));
            }
        }

        (lines.len() > 1).then(|| lines.join("\n"))
    }

    fn testing(&self) -> Option<String> {
        let testing = &self.report.patterns.testing;
        if testing.is_empty() {
            return None;
        }

        let mut lines = vec![
            "## 4. Testing Standards".to_string(),
            "\nThis project follows these testing patterns:".to_string(),
        ];
        for pattern in testing {
            lines.push(format!("- {}", pattern));
        }

        Some(lines.join("\n"))
    }

    fn code_quality(&self) -> Option<String> {
        let quality = &self.report.quality;
        let mut lines = vec!["## 5. Code Quality & Style".to_string()];

        if quality.typed_declarations {
            lines.push("- Code uses type hints/annotations - ensure new code does too".to_string());
        }
        if quality.inline_docs {
            lines.push("- Functions have documentation - add docstrings to new functions".to_string());
        }
        if quality.max_file_length > 0 {
            lines.push(format!(
                "- Maximum file length observed: ~{} lines",
                quality.max_file_length
            ));
        }

        (lines.len() > 1).then(|| lines.join("\n"))
    }

    fn footer(&self) -> String {
        "## Review Guidelines\n\
         \n\
         When reviewing code:\n\
         1. Check that it follows the naming conventions above\n\
         2. Ensure it uses the same frameworks/libraries as the rest of the codebase\n\
         3. Verify error handling matches established patterns\n\
         4. Confirm testing approach is consistent\n\
         5. Check code quality matches project standards\n\
         \n\
         Prioritize issues by severity:\n\
         - CRITICAL: Bugs, security issues, inconsistent patterns that break compatibility\n\
         - HIGH: Major style violations, missing tests, poor error handling\n\
         - MEDIUM: Minor style issues, optimization opportunities\n\
         - LOW: Suggestions for improvement\n\
         \n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         Review:"
            .to_string()
    }
}

/// Fill a prompt template's placeholders with a concrete file.
///
/// Substitutes exactly `{filename}`, `{language}`, and `{code}`; all other
/// text (including braces in the source code) passes through verbatim, so
/// arbitrary source text is safe to interpolate. `{code}` is substituted
/// last so placeholder-like text inside the code is never re-expanded.
pub fn render_template(template: &str, filename: &str, language: &str, code: &str) -> String {
    template
        .replace("{filename}", filename)
        .replace("{language}", language)
        .replace("{code}", code)
}

/// Uppercase the first character of a language tag for display.
fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analysis;
    use crate::language::Language;

    fn empty_report() -> Report {
        Analysis::new().finalize()
    }

    fn populated_report() -> Report {
        let mut analysis = Analysis::new();
        analysis.record_type("UserService");
        analysis.record_function("get_user");
        analysis.record_constant("MAX_RETRIES");
        analysis.count_import("requests");
        analysis.count_import("requests");
        analysis.flag_framework("Flask");
        analysis.note_error_handling("try/except blocks");
        analysis.note_testing("unit tests");
        analysis.mark_typed_declarations();
        analysis.observe_file_length(240);
        analysis.finalize()
    }

    #[test]
    fn test_generate_contains_all_sections() {
        let report = populated_report();
        let prompt = PromptBuilder::new(&report, Language::Python, "demo").generate();

        assert!(prompt.contains("expert Python code reviewer for the demo project"));
        assert!(prompt.contains("## 1. Naming Conventions"));
        assert!(prompt.contains("- Classes/Types: PascalCase (e.g., UserService)"));
        assert!(prompt.contains("## 2. Frameworks & Libraries"));
        assert!(prompt.contains("- Flask"));
        assert!(prompt.contains("- requests (used 2 times)"));
        assert!(prompt.contains("## 3. Code Patterns & Best Practices"));
        assert!(prompt.contains("- Uses try/except blocks"));
        assert!(prompt.contains("## 4. Testing Standards"));
        assert!(prompt.contains("## 5. Code Quality & Style"));
        assert!(prompt.contains("~240 lines"));
        assert!(prompt.contains("## Review Guidelines"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let report = empty_report();
        let prompt = PromptBuilder::new(&report, Language::Go, "bare").generate();

        assert!(!prompt.contains("## 1. Naming Conventions"));
        assert!(!prompt.contains("## 2. Frameworks & Libraries"));
        assert!(!prompt.contains("## 3. Code Patterns & Best Practices"));
        assert!(!prompt.contains("## 4. Testing Standards"));
        assert!(!prompt.contains("## 5. Code Quality & Style"));
        // Header and footer always present.
        assert!(prompt.contains("expert Go code reviewer"));
        assert!(prompt.contains("## Review Guidelines"));
    }

    #[test]
    fn test_generated_prompt_is_a_template() {
        let report = populated_report();
        let prompt = PromptBuilder::new(&report, Language::Python, "demo").generate();

        // Exactly the three placeholders survive generation.
        assert!(prompt.contains("{filename}"));
        assert!(prompt.contains("{language}"));
        assert!(prompt.contains("{code}"));
    }

    #[test]
    fn test_render_template_substitutes_placeholders() {
        let rendered = render_template(
            "File: {filename}\n```{language}\n{code}\n```",
            "app.py",
            "python",
            "print('hi')",
        );
        assert_eq!(rendered, "File: app.py\n```python\nprint('hi')\n```");
    }

    #[test]
    fn test_render_template_is_safe_for_braces_in_code() {
        let rendered = render_template("{code}", "f.rs", "rust", "fn f() { let x = {1}; }");
        assert_eq!(rendered, "fn f() { let x = {1}; }");

        // Placeholder-like text inside the code is not re-expanded.
        let tricky = render_template("{code}", "f.py", "python", "s = \"{language}\"");
        assert_eq!(tricky, "s = \"{language}\"");
    }

    #[test]
    fn test_quality_section_omitted_when_no_signal() {
        let report = empty_report();
        // max_file_length is 0, both flags false: section absent.
        let builder = PromptBuilder::new(&report, Language::Rust, "x");
        assert!(builder.code_quality().is_none());
    }
}
