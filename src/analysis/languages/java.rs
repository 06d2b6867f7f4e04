//! Java rule set.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::Analysis;

lazy_static! {
    static ref CLASS_RE: Regex = Regex::new(r"(?:public\s+)?class\s+(\w+)").unwrap();

    /// Access-modified method declarations.
    static ref METHOD_RE: Regex = Regex::new(
        r"(?:public|private|protected)\s+(?:static\s+)?(?:\w+\s+)?(\w+)\s*\("
    )
    .unwrap();

    static ref IMPORT_RE: Regex = Regex::new(r"import\s+([^;]+);").unwrap();
}

pub(super) fn scan(content: &str, analysis: &mut Analysis) {
    for caps in CLASS_RE.captures_iter(content) {
        analysis.record_type(&caps[1]);
    }

    for caps in METHOD_RE.captures_iter(content) {
        analysis.record_function(&caps[1]);
    }

    for caps in IMPORT_RE.captures_iter(content) {
        // Keyed by the final segment: the imported class/package name.
        if let Some(leaf) = caps[1].trim().rsplit('.').next() {
            if !leaf.is_empty() {
                analysis.count_import(leaf);
            }
        }
    }

    if content.contains("Spring") || content.contains("@Autowired") {
        analysis.flag_framework("Spring");
    }
    if content.contains("JUnit") || content.contains("@Test") {
        analysis.flag_framework("JUnit");
    }

    if content.contains("try {") {
        analysis.note_error_handling("try/catch blocks");
    }

    if content.contains("/**") {
        analysis.note_documentation("JavaDoc");
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
import java.util.List;
import org.junit.jupiter.api.Test;

/** Repository for users. */
public class UserRepository {
    public List findAll() {
        try {
            return query();
        } catch (Exception e) {
            return null;
        }
    }
}
"#,
        );

        assert_eq!(report.naming.types, vec!["UserRepository"]);
        assert!(report.naming.functions.contains(&"findAll".to_string()));
        assert_eq!(report.imports.count("List"), Some(1));
        assert_eq!(report.imports.count("Test"), Some(1));
        assert!(report
            .patterns
            .error_handling
            .contains(&"try/catch blocks".to_string()));
        assert!(report
            .patterns
            .documentation
            .contains(&"JavaDoc".to_string()));
    }

    #[test]
    fn test_framework_detection() {
        let report = scan_str("@Autowired\nprivate UserService service;\n@Test\nvoid works() {}\n");
        assert!(report.frameworks.contains(&"Spring".to_string()));
        assert!(report.frameworks.contains(&"JUnit".to_string()));
    }
}
