//! File collection for analysis runs.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::language::Language;

/// Directory names that never contain project source worth analyzing:
/// dependency caches, build outputs, and version-control metadata.
static SKIP_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        "venv",
        ".venv",
        "env",
        ".env",
        "build",
        "dist",
        "target",
        "bin",
        "obj",
        ".git",
        ".svn",
        "__pycache__",
        ".pytest_cache",
    ]
    .into_iter()
    .collect()
});

/// Whether a directory name is on the deny list.
pub fn is_skipped_dir(name: &str) -> bool {
    SKIP_DIRS.contains(name)
}

/// Collect every file under `root` whose extension resolves to `language`.
///
/// Descends into subdirectories when `recursive` is set; otherwise only the
/// top level is scanned. Paths with a deny-listed directory component are
/// skipped. The returned collection contains no duplicates; order follows
/// the directory walk and is not part of the contract.
///
/// Fails if `root` does not exist or is not a directory. Unreadable
/// directory entries are skipped with a warning rather than aborting the
/// walk.
pub fn collect_files(root: &Path, language: Language, recursive: bool) -> anyhow::Result<Vec<PathBuf>> {
    if !root.exists() {
        anyhow::bail!("directory not found: {}", root.display());
    }
    if !root.is_dir() {
        anyhow::bail!("not a directory: {}", root.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    let mut seen = HashSet::new();

    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| {
            // The root itself is always entered; deny-listing applies below it.
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && is_skipped_dir(&name))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("Warning: skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if Language::from_path(path) == language && seen.insert(path.to_path_buf()) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "x = 1\n").unwrap();
    }

    #[test]
    fn test_collects_matching_extensions_recursively() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.py"));
        touch(&temp.path().join("sub/b.py"));
        touch(&temp.path().join("sub/c.rs"));

        let files = collect_files(temp.path(), Language::Python, true).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "py"));
    }

    #[test]
    fn test_flat_mode_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.py"));
        touch(&temp.path().join("sub/b.py"));

        let files = collect_files(temp.path(), Language::Python, false).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.py"));
    }

    #[test]
    fn test_deny_listed_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("keep.py"));
        touch(&temp.path().join("node_modules/pkg/skip.py"));
        touch(&temp.path().join("__pycache__/skip.py"));
        touch(&temp.path().join("deep/.venv/lib/skip.py"));

        let files = collect_files(temp.path(), Language::Python, true).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.py"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        assert!(collect_files(&gone, Language::Python, true).is_err());
    }

    #[test]
    fn test_file_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.py");
        touch(&file);
        assert!(collect_files(&file, Language::Python, true).is_err());
    }

    #[test]
    fn test_multiple_extensions_one_language() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.ts"));
        touch(&temp.path().join("b.tsx"));
        touch(&temp.path().join("c.js"));

        let files = collect_files(temp.path(), Language::TypeScript, true).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_no_duplicate_paths() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.py"));

        let files = collect_files(temp.path(), Language::Python, true).unwrap();
        let unique: HashSet<_> = files.iter().collect();
        assert_eq!(unique.len(), files.len());
    }
}
