//! Promptforge - codebase convention analyzer and review prompt generator.
//!
//! Promptforge scans an existing codebase with per-language regex rule
//! sets to extract lightweight lexical conventions - naming styles,
//! imports, framework hints, idiom markers - and renders them into a
//! custom code-review prompt. The companion review command sends source
//! files, wrapped in such a prompt, to a local or remote LLM endpoint and
//! prints the free-text review.
//!
//! This is a heuristic text-pattern classifier, not a parser: matches are
//! best-effort and false positives from comments or string literals are
//! accepted behavior.
//!
//! # Architecture
//!
//! - `language`: file-extension to language-tag resolution
//! - `collect`: directory traversal with a deny list of non-source dirs
//! - `analysis`: the analysis record, per-language rule sets, naming-style
//!   classification, and finalization into a read-only report
//! - `prompt`: prompt rendering and template interpolation
//! - `review`: Ollama and Anthropic review backends
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a New Language
//!
//! Add a variant to `Language`, its extensions to the extension map, and a
//! rule set under `src/analysis/languages/`.

pub mod analysis;
pub mod cli;
pub mod collect;
pub mod language;
pub mod prompt;
pub mod report;
pub mod review;

pub use analysis::{classify, Analysis, NamingStyle, Report};
pub use collect::collect_files;
pub use language::Language;
pub use prompt::{render_template, PromptBuilder};
pub use review::{Backend, FileReview, ReviewError, ReviewOptions, Reviewer};
