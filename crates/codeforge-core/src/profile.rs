//! Language profile table
//!
//! Maps a language identifier to the parameters every prompt builder and
//! callback needs: fence tag, file names, test framework and hint strings.
//! The table is built once at startup and only read afterwards.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Generation parameters for one target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Tag used both to request and to locate a fenced block
    pub fence_tag: String,

    /// Source file extension, without the dot
    pub file_ext: String,

    /// Unit-test framework name
    pub test_framework: String,

    /// Extra instruction for the tests prompt
    pub test_hint: String,

    /// How to run the program and its tests
    pub run_hint: String,

    /// Extra instruction for the docs prompt
    pub doc_hint: String,

    /// Filename suggested for the generated source
    pub example_filename: String,

    /// Filename suggested for the generated tests
    pub example_test_filename: String,

    /// Filename of the generated README
    #[serde(default = "default_readme_name")]
    pub readme_name: String,
}

fn default_readme_name() -> String {
    "README.md".to_string()
}

impl LanguageProfile {
    fn validate(&self, language: &str) -> Result<()> {
        let required = [
            ("fence_tag", &self.fence_tag),
            ("example_filename", &self.example_filename),
            ("example_test_filename", &self.example_test_filename),
            ("readme_name", &self.readme_name),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::ProfileConfig(format!(
                    "profile '{}' has an empty {}",
                    language, field
                )));
            }
        }

        Ok(())
    }
}

/// Read-only table of supported languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    profiles: BTreeMap<String, LanguageProfile>,
}

impl ProfileTable {
    /// Built-in profiles: python, java and javascript
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();

        profiles.insert(
            "python".to_string(),
            LanguageProfile {
                fence_tag: "python".to_string(),
                file_ext: "py".to_string(),
                test_framework: "pytest".to_string(),
                test_hint: "Use pytest. Put tests in a single test file with clear, runnable test functions.".to_string(),
                run_hint: "Run the program with: python main.py\nRun tests with: pytest -q".to_string(),
                doc_hint: "Include setup, run instructions, and examples for CLI usage if relevant.".to_string(),
                example_filename: "main.py".to_string(),
                example_test_filename: "test_main.py".to_string(),
                readme_name: default_readme_name(),
            },
        );

        profiles.insert(
            "java".to_string(),
            LanguageProfile {
                fence_tag: "java".to_string(),
                file_ext: "java".to_string(),
                test_framework: "JUnit 5".to_string(),
                test_hint: "Use JUnit 5. Provide a single test class with multiple test methods.".to_string(),
                run_hint: "If using Maven: mvn -q test\nCompile/run manually with javac/java as applicable.".to_string(),
                doc_hint: "Explain how to compile and run via Maven or javac. Include classpath notes.".to_string(),
                example_filename: "TinyUrl.java".to_string(),
                example_test_filename: "TinyUrlTest.java".to_string(),
                readme_name: default_readme_name(),
            },
        );

        profiles.insert(
            "javascript".to_string(),
            LanguageProfile {
                fence_tag: "javascript".to_string(),
                file_ext: "js".to_string(),
                test_framework: "vitest".to_string(),
                test_hint: "Use vitest. Export functions for testability and include a few focused tests.".to_string(),
                run_hint: "Run with: node main.js\nRun tests with: npx vitest run".to_string(),
                doc_hint: "Document Node version, install instructions, and test commands.".to_string(),
                example_filename: "main.js".to_string(),
                example_test_filename: "main.test.js".to_string(),
                readme_name: default_readme_name(),
            },
        );

        Self { profiles }
    }

    /// Parse a YAML map of `language -> profile`
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let profiles: BTreeMap<String, LanguageProfile> = serde_yaml::from_str(yaml)?;

        for (language, profile) in &profiles {
            if language.trim().is_empty() {
                return Err(CoreError::ProfileConfig(
                    "language key must not be empty".to_string(),
                ));
            }
            profile.validate(language)?;
        }

        Ok(Self { profiles })
    }

    /// Built-in table with the profiles from a YAML file layered on top.
    ///
    /// Entries in the file replace built-in entries of the same name and
    /// add new languages.
    pub fn with_overrides_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let overrides = Self::from_yaml_str(&content)?;

        tracing::info!(
            "Loaded {} language profile(s) from {}",
            overrides.len(),
            path.display()
        );

        let mut table = Self::builtin();
        table.profiles.extend(overrides.profiles);
        Ok(table)
    }

    /// Look up a language, failing with `UnsupportedLanguage` when absent
    pub fn lookup(&self, language: &str) -> Result<&LanguageProfile> {
        self.profiles
            .get(language)
            .ok_or_else(|| CoreError::UnsupportedLanguage(language.to_string()))
    }

    /// Whether the language is in the table
    pub fn contains(&self, language: &str) -> bool {
        self.profiles.contains_key(language)
    }

    /// Supported language keys, sorted
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of supported languages
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_languages() {
        let table = ProfileTable::builtin();
        let languages: Vec<&str> = table.languages().collect();
        assert_eq!(languages, vec!["java", "javascript", "python"]);
    }

    #[test]
    fn test_lookup_java() {
        let table = ProfileTable::builtin();
        let java = table.lookup("java").unwrap();

        assert_eq!(java.fence_tag, "java");
        assert_eq!(java.test_framework, "JUnit 5");
        assert_eq!(java.example_filename, "TinyUrl.java");
        assert_eq!(java.example_test_filename, "TinyUrlTest.java");
        assert_eq!(java.readme_name, "README.md");
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = ProfileTable::builtin();
        assert!(matches!(
            table.lookup("Java"),
            Err(CoreError::UnsupportedLanguage(ref l)) if l == "Java"
        ));
        assert!(table.lookup("rust").is_err());
        assert!(!table.contains(""));
    }

    #[test]
    fn test_from_yaml_defaults_readme() {
        let yaml = r#"
go:
  fence_tag: go
  file_ext: go
  test_framework: testing
  test_hint: Use the standard testing package.
  run_hint: "go run main.go"
  doc_hint: Mention the Go version.
  example_filename: main.go
  example_test_filename: main_test.go
"#;
        let table = ProfileTable::from_yaml_str(yaml).unwrap();
        let go = table.lookup("go").unwrap();
        assert_eq!(go.readme_name, "README.md");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_yaml_rejects_empty_fence() {
        let yaml = r#"
go:
  fence_tag: ""
  file_ext: go
  test_framework: testing
  test_hint: x
  run_hint: x
  doc_hint: x
  example_filename: main.go
  example_test_filename: main_test.go
"#;
        let err = ProfileTable::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("empty fence_tag"));
    }

    #[test]
    fn test_from_yaml_missing_field() {
        let yaml = "go:\n  fence_tag: go\n";
        assert!(matches!(
            ProfileTable::from_yaml_str(yaml),
            Err(CoreError::Yaml(_))
        ));
    }

    #[test]
    fn test_overrides_from_file_extend_and_replace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
python:
  fence_tag: python
  file_ext: py
  test_framework: unittest
  test_hint: Use unittest.
  run_hint: python app.py
  doc_hint: Keep it short.
  example_filename: app.py
  example_test_filename: test_app.py
rust:
  fence_tag: rust
  file_ext: rs
  test_framework: cargo test
  test_hint: Use #[test] functions.
  run_hint: cargo run
  doc_hint: Mention the MSRV.
  example_filename: main.rs
  example_test_filename: tests.rs
"#
        )
        .unwrap();

        let table = ProfileTable::with_overrides_from_file(file.path()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("python").unwrap().test_framework, "unittest");
        assert_eq!(table.lookup("rust").unwrap().example_filename, "main.rs");
        assert_eq!(table.lookup("java").unwrap().test_framework, "JUnit 5");
    }

    #[test]
    fn test_sample_profiles_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/languages.yaml");
        let table = ProfileTable::with_overrides_from_file(path).unwrap();

        assert_eq!(
            table.languages().collect::<Vec<_>>(),
            vec!["go", "java", "javascript", "python", "rust"]
        );
        assert_eq!(
            table.lookup("go").unwrap().run_hint,
            "Run with: go run main.go\nRun tests with: go test ./..."
        );
    }

    #[test]
    fn test_overrides_missing_file() {
        let result = ProfileTable::with_overrides_from_file("/nonexistent/profiles.yaml");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
