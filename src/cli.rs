//! Command-line interface for promptforge.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analysis::Analysis;
use crate::collect;
use crate::language::Language;
use crate::prompt::PromptBuilder;
use crate::report;
use crate::review::{Backend, FileReview, ReviewOptions, Reviewer};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Default extensions reviewed when none are given.
const DEFAULT_REVIEW_EXTENSIONS: &[&str] = &[".cs", ".py", ".ts", ".js"];

/// Directory searched for per-language prompt overrides.
const PROMPTS_DIR: &str = "prompts";

/// Analyze a codebase and generate custom LLM code review prompts.
///
/// Promptforge scans an existing codebase to extract coding conventions,
/// patterns, and standards, then generates a custom prompt file that can be
/// used with the review command to enforce those same patterns in new code.
#[derive(Parser)]
#[command(name = "promptforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a codebase and generate a custom review prompt
    #[command(visible_alias = "build")]
    Analyze(AnalyzeArgs),
    /// Review files with a local or remote LLM backend
    Review(ReviewArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the project directory to analyze
    pub project_dir: PathBuf,

    /// Programming language to analyze
    #[arg(short, long)]
    pub language: String,

    /// Output file path (default: prompts/<language>-custom.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project name (default: directory name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output analysis as JSON instead of generating a prompt
    #[arg(long)]
    pub json: bool,

    /// Don't scan subdirectories
    #[arg(long)]
    pub no_recursive: bool,
}

/// Arguments for the review command.
#[derive(Parser)]
pub struct ReviewArgs {
    /// File or directory to review
    pub path: PathBuf,

    /// File extensions to review (with dot)
    #[arg(short, long, num_args = 1..)]
    pub extensions: Vec<String>,

    /// Review files recursively in directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Review backend: ollama or claude
    #[arg(short, long, default_value = "ollama")]
    pub backend: String,

    /// Model to use (default depends on backend)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Custom prompt template file
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,

    /// Maximum tokens to generate
    #[arg(long, default_value_t = 4096)]
    pub max_tokens: u32,

    /// Context window size (ollama only)
    #[arg(long, default_value_t = 8192)]
    pub ctx_size: u32,

    /// API key (claude only; or set ANTHROPIC_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let language = match Language::from_tag(&args.language) {
        Some(lang) => lang,
        None => {
            eprintln!(
                "Error: unknown language {:?}, must be one of: {}",
                args.language,
                Language::supported_tags().join(", ")
            );
            return Ok(EXIT_ERROR);
        }
    };

    // Fatal input errors are reported before any scanning begins.
    let files = match collect::collect_files(&args.project_dir, language, !args.no_recursive) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if files.is_empty() {
        eprintln!(
            "Error: no {} files found in {}",
            language,
            args.project_dir.display()
        );
        return Ok(EXIT_ERROR);
    }

    let project = match &args.name {
        Some(name) => name.clone(),
        None => args
            .project_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| args.project_dir.display().to_string()),
    };

    if !args.json {
        report::write_analysis_banner(&project, language.as_str());
        println!("  Found {} {} files", files.len(), language);
    }

    // Scan files one at a time; a file that cannot be read or decoded is
    // skipped with a warning and never aborts the run.
    let mut analysis = Analysis::new();
    let mut scanned = 0usize;
    for file in &files {
        match std::fs::read_to_string(file) {
            Ok(content) => {
                analysis.absorb(language, &content);
                scanned += 1;
            }
            Err(e) => {
                eprintln!("Warning: could not analyze {}: {}", file.display(), e);
            }
        }
    }

    let finalized = analysis.finalize();

    if args.json {
        report::write_analysis_json(&finalized)?;
        return Ok(EXIT_SUCCESS);
    }

    let prompt = PromptBuilder::new(&finalized, language, &project).generate();

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(PROMPTS_DIR).join(format!("{}-custom.txt", language)),
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, &prompt)?;

    let output_display = output_path.display().to_string();
    report::write_analysis_summary(&finalized, scanned, Some(&output_display));
    println!(
        "  Use it with: promptforge review <file> --prompt-file {}",
        output_path.display()
    );
    println!();

    Ok(EXIT_SUCCESS)
}

/// Run the review command.
pub fn run_review(args: &ReviewArgs) -> anyhow::Result<i32> {
    let backend = match Backend::parse(&args.backend) {
        Some(b) => b,
        None => {
            eprintln!(
                "Error: invalid backend {:?}, must be 'ollama' or 'claude'",
                args.backend
            );
            return Ok(EXIT_ERROR);
        }
    };

    // Custom prompt file takes priority over per-language and built-in
    // templates.
    let custom_template = match &args.prompt_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(_) => {
                eprintln!("Warning: prompt file not found: {}", path.display());
                None
            }
        },
        None => None,
    };

    let options = ReviewOptions {
        model: args
            .model
            .clone()
            .unwrap_or_else(|| backend.default_model().to_string()),
        max_tokens: args.max_tokens,
        ctx_size: args.ctx_size,
        api_key: args.api_key.clone(),
    };
    let reviewer = Reviewer::new(backend, options)?;

    let results = if args.path.is_file() {
        vec![review_file(&reviewer, &args.path, custom_template.as_deref())]
    } else if args.path.is_dir() {
        let extensions: Vec<String> = if args.extensions.is_empty() {
            DEFAULT_REVIEW_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect()
        } else {
            args.extensions.clone()
        };

        let files = collect_review_files(&args.path, &extensions, args.recursive);
        let mut results = Vec::new();
        for file in files {
            results.push(review_file(&reviewer, &file, custom_template.as_deref()));
        }
        results
    } else {
        eprintln!("Error: path not found: {}", args.path.display());
        return Ok(EXIT_ERROR);
    };

    if args.json {
        report::write_reviews_json(&results)?;
    } else {
        for result in &results {
            report::write_review_pretty(result);
        }
        report::write_review_summary(results.len());
    }

    Ok(EXIT_SUCCESS)
}

/// Review a single file, folding read failures into the result.
fn review_file(reviewer: &Reviewer, path: &Path, custom_template: Option<&str>) -> FileReview {
    let file_str = path.display().to_string();

    let code = match std::fs::read_to_string(path) {
        Ok(code) => code,
        Err(e) => {
            return FileReview {
                file: file_str,
                language: None,
                review: None,
                error: Some(format!("cannot read file: {}", e)),
            }
        }
    };

    let language = Language::from_path(path);
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_str.clone());

    println!("Reviewing: {} ({})...", filename, language);

    // Template priority: --prompt-file > prompts/<language>.txt > built-in.
    let template = match custom_template {
        Some(t) => t.to_string(),
        None => load_language_prompt(language)
            .unwrap_or_else(|| reviewer.backend().default_template().to_string()),
    };

    let review = reviewer.review_code(&template, &filename, language.as_str(), &code);

    FileReview {
        file: file_str,
        language: Some(language.as_str().to_string()),
        review: Some(review),
        error: None,
    }
}

/// Load a per-language prompt override from the prompts directory.
fn load_language_prompt(language: Language) -> Option<String> {
    let path = PathBuf::from(PROMPTS_DIR).join(format!("{}.txt", language));
    std::fs::read_to_string(path).ok()
}

/// Collect files to review by extension.
fn collect_review_files(root: &Path, extensions: &[String], recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = extensions.iter().any(|ext| {
            let ext = ext.strip_prefix('.').unwrap_or(ext);
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        });
        if matches {
            files.push(path.to_path_buf());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_review_files_by_extension() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.py"), "x = 1\n").unwrap();
        std::fs::write(temp.path().join("b.rs"), "fn b() {}\n").unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/c.py"), "y = 2\n").unwrap();

        let flat = collect_review_files(temp.path(), &[".py".to_string()], false);
        assert_eq!(flat.len(), 1);

        let deep = collect_review_files(temp.path(), &[".py".to_string()], true);
        assert_eq!(deep.len(), 2);

        let both = collect_review_files(
            temp.path(),
            &[".py".to_string(), ".rs".to_string()],
            true,
        );
        assert_eq!(both.len(), 3);
    }

    #[test]
    fn test_extensions_accepted_without_dot() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.py"), "x = 1\n").unwrap();

        let files = collect_review_files(temp.path(), &["py".to_string()], false);
        assert_eq!(files.len(), 1);
    }
}
