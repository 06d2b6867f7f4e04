//! Tests for prompt generation over real fixture analysis.

use std::path::PathBuf;

use promptforge::{collect_files, Analysis, Language, PromptBuilder, render_template};

fn analyze_fixture(sub: &str, language: Language) -> promptforge::Report {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(sub);
    let files = collect_files(&root, language, true).unwrap();

    let mut analysis = Analysis::new();
    for file in &files {
        let content = std::fs::read_to_string(file).unwrap();
        analysis.absorb(language, &content);
    }
    analysis.finalize()
}

#[test]
fn test_generated_prompt_sections() {
    let report = analyze_fixture("python", Language::Python);
    let prompt = PromptBuilder::new(&report, Language::Python, "sample").generate();

    assert!(prompt.contains("You are an expert Python code reviewer for the sample project."));
    assert!(prompt.contains("## 1. Naming Conventions"));
    assert!(prompt.contains("## 2. Frameworks & Libraries"));
    assert!(prompt.contains("- Flask"));
    assert!(prompt.contains("## 3. Code Patterns & Best Practices"));
    assert!(prompt.contains("## 5. Code Quality & Style"));
    assert!(prompt.contains("## Review Guidelines"));

    // The fixture has no testing patterns: the section must be absent,
    // not rendered as an empty heading.
    assert!(!prompt.contains("## 4. Testing Standards"));
}

#[test]
fn test_constants_classified_as_upper_snake() {
    let report = analyze_fixture("python", Language::Python);
    let prompt = PromptBuilder::new(&report, Language::Python, "sample").generate();

    assert!(prompt.contains("- Constants: UPPER_SNAKE_CASE"));
    assert!(prompt.contains("- Functions/Methods: snake_case"));
    assert!(prompt.contains("- Classes/Types: PascalCase"));
}

#[test]
fn test_generated_prompt_interpolates_cleanly() {
    let report = analyze_fixture("python", Language::Python);
    let prompt = PromptBuilder::new(&report, Language::Python, "sample").generate();

    let rendered = render_template(&prompt, "new_module.py", "python", "def f():\n    pass\n");

    assert!(rendered.contains("File: new_module.py"));
    assert!(rendered.contains("```python"));
    assert!(rendered.contains("def f():"));
    assert!(!rendered.contains("{filename}"));
    assert!(!rendered.contains("{language}"));
    assert!(!rendered.contains("{code}"));
}
