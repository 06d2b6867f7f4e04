//! TypeScript/JavaScript rule set.
//!
//! JavaScript files are scanned with the same vocabulary; the
//! TypeScript-only patterns (private fields, interface/type declarations)
//! simply never match.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    static ref CLASS_RE: Regex = Regex::new(r"class\s+(\w+)").unwrap();

    /// `function foo(` or `const foo = (` / `const foo = async (`.
    static ref FUNC_RE: Regex =
        Regex::new(r"(?:function\s+(\w+)|const\s+(\w+)\s*=\s*(?:async\s*)?\()").unwrap();

    static ref CONST_RE: Regex = Regex::new(r"const\s+([A-Z_]{2,})\s*=").unwrap();

    /// TypeScript `private name:` members.
    static ref PRIVATE_RE: Regex = Regex::new(r"private\s+(\w+):").unwrap();

    /// ES module imports with a source string.
    static ref IMPORT_RE: Regex =
        Regex::new(r#"import\s+.*?\s+from\s+['"]([^'"]+)"#).unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in CLASS_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in FUNC_RE.captures_iter(content) {
        if let Some(name) = caps.get(1).or_else(|| caps.get(2)) {
            analysis.record_function(name.as_str());
        }
    }

    for caps in CONST_RE.captures_iter(content) {
        analysis.record_constant(&caps[1]);
    }

    for caps in PRIVATE_RE.captures_iter(content) {
        analysis.record_private_member(&caps[1]);
    }

    for caps in IMPORT_RE.captures_iter(content) {
        let module = &caps[1];
        // Relative imports are project-internal, not packages.
        if module.starts_with('.') {
            continue;
        }
        if let Some(base) = module.split('/').next() {
            let base = base.replace('@', "");
            if !base.is_empty() {
                analysis.count_import(base);
            }
        }
    }

    let lower = content.to_lowercase();
    if lower.contains("react") {
        analysis.flag_framework("React");
    }
    if lower.contains("vue") {
        analysis.flag_framework("Vue");
    }
    if lower.contains("angular") {
        analysis.flag_framework("Angular");
    }
    if lower.contains("express") {
        analysis.flag_framework("Express");
    }
    if lower.contains("jest") || content.contains("describe(") {
        analysis.flag_framework("Jest");
    }

    if content.contains("interface ") || content.contains("type ") {
        analysis.mark_typed_declarations();
    }

    if content.contains("async ") || content.contains("await ") {
        analysis.note_concurrency("async/await");
    }
    if content.contains(".then(") {
        analysis.note_concurrency("Promise chains");
    }

    if content.contains("try {") {
        analysis.note_error_handling("try/catch blocks");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(content: &str) -> crate::analysis::Report {
        let mut analysis = Analysis::new();
        scan(content, &mut analysis);
        analysis.finalize()
    }

    #[test]
    fn test_extract_names() {
        let report = scan_str(
            r#"
import { useState } from 'react';
import axios from 'axios';

const API_URL = "https://api.example.com";

class UserStore {
    private cache: Map<string, User>;
}

function loadUser(id: string) {}

const saveUser = async (user: User) => {
    await axios.post(API_URL, user);
};
"#,
        );

        assert_eq!(report.naming.types, vec!["UserStore"]);
        assert!(report.naming.functions.contains(&"loadUser".to_string()));
        assert!(report.naming.functions.contains(&"saveUser".to_string()));
        assert_eq!(report.naming.constants, vec!["API_URL"]);
        assert_eq!(report.naming.private_members, vec!["cache"]);
    }

    #[test]
    fn test_imports_skip_relative_and_strip_scope() {
        let report = scan_str(
            "import a from './local';\nimport b from '@scope/pkg';\nimport c from 'express';\n",
        );
        assert_eq!(report.imports.count("local"), None);
        assert_eq!(report.imports.count("scope"), Some(1));
        assert_eq!(report.imports.count("express"), Some(1));
    }

    #[test]
    fn test_framework_detection() {
        let report = scan_str("import React from 'react';\ndescribe('suite', () => {});\n");
        assert!(report.frameworks.contains(&"React".to_string()));
        assert!(report.frameworks.contains(&"Jest".to_string()));
    }

    #[test]
    fn test_patterns() {
        let report = scan_str(
            "interface Props {}\ntry {\n  fetch(url).then(handle);\n} catch (e) {}\nconst run = async () => {};\n",
        );
        assert!(report.quality.typed_declarations);
        assert!(report
            .patterns
            .error_handling
            .contains(&"try/catch blocks".to_string()));
        assert!(report
            .patterns
            .concurrency
            .contains(&"Promise chains".to_string()));
        assert!(report
            .patterns
            .concurrency
            .contains(&"async/await".to_string()));
    }
}
