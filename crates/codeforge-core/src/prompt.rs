//! Prompt builders for code, tests and docs generation
//!
//! Each builder fills a fixed instruction template from a language profile
//! and caller-supplied text. Builders are pure: no I/O, no network, and the
//! only failure is an unsupported language.

use crate::error::Result;
use crate::extractor::MARKDOWN_TAG;
use crate::profile::{LanguageProfile, ProfileTable};
use std::sync::Arc;

/// Template for generating a single source file
pub const CODE_PROMPT_TEMPLATE: &str = r#"You are a senior {language} engineer. Generate a single, self-contained source file.

Requirements:
{requirements}

Constraints:
- Use idiomatic, minimal, production-quality {language}.
- Include clear function/class names.
- Avoid placeholders and pseudo-code.
- If configuration is needed, include sane defaults in code.
- Provide only the code for one file. Do NOT include explanations.
- Prefer a filename like: {example_filename}

Output strictly as exactly one fenced code block tagged ```{fence_tag} and nothing else.
"#;

/// Template for generating a unit-test file for existing code
pub const TESTS_PROMPT_TEMPLATE: &str = r#"You are a senior {language} engineer. Write unit tests for the code below.

Original code:
```
{code}
```

Testing requirements:
- Framework: {test_framework}.
- {test_hint}
- Cover happy paths and at least one edge case.
- Provide only ONE test file named like {example_test_filename}.
- Output strictly as exactly one fenced code block tagged ```{fence_tag} and nothing else.
"#;

/// Template for generating a README for existing code
pub const DOCS_PROMPT_TEMPLATE: &str = r#"You are a technical writer. Produce a concise {readme_name} for this project.

Code to document:
```
{code}
```

Include:
- Project overview and core features
- Quick start
- How to run the program
- How to run tests ({test_framework})
- Notes / limitations
- Example usage

Hints:
- {run_hint}
- {doc_hint}

Output strictly as exactly one fenced code block tagged ```{markdown_tag} containing a valid {readme_name}.
"#;

/// Fixed system instruction sent with every prompt
pub const SYSTEM_INSTRUCTION: &str = "You are precise and only return what is asked.";

/// Fill the code template for a resolved profile
pub fn render_code_prompt(requirements: &str, language: &str, profile: &LanguageProfile) -> String {
    // Caller text is substituted last so braces inside it are never expanded
    CODE_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{example_filename}", &profile.example_filename)
        .replace("{fence_tag}", &profile.fence_tag)
        .replace("{requirements}", requirements.trim())
}

/// Fill the tests template for a resolved profile
pub fn render_tests_prompt(code: &str, language: &str, profile: &LanguageProfile) -> String {
    TESTS_PROMPT_TEMPLATE
        .replace("{language}", language)
        .replace("{test_framework}", &profile.test_framework)
        .replace("{test_hint}", &profile.test_hint)
        .replace("{example_test_filename}", &profile.example_test_filename)
        .replace("{fence_tag}", &profile.fence_tag)
        .replace("{code}", code)
}

/// Fill the docs template for a resolved profile
pub fn render_docs_prompt(code: &str, profile: &LanguageProfile) -> String {
    DOCS_PROMPT_TEMPLATE
        .replace("{readme_name}", &profile.readme_name)
        .replace("{test_framework}", &profile.test_framework)
        .replace("{run_hint}", &profile.run_hint)
        .replace("{doc_hint}", &profile.doc_hint)
        .replace("{markdown_tag}", MARKDOWN_TAG)
        .replace("{code}", code)
}

/// Builds prompts against a shared profile table
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    profiles: Arc<ProfileTable>,
}

impl PromptBuilder {
    /// Create a builder over the given table
    pub fn new(profiles: Arc<ProfileTable>) -> Self {
        Self { profiles }
    }

    /// Profile table this builder reads from
    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Prompt asking for one source file implementing `requirements`
    pub fn code_prompt(&self, requirements: &str, language: &str) -> Result<String> {
        let profile = self.profiles.lookup(language)?;
        Ok(render_code_prompt(requirements, language, profile))
    }

    /// Prompt asking for one unit-test file covering `code`
    pub fn tests_prompt(&self, code: &str, language: &str) -> Result<String> {
        let profile = self.profiles.lookup(language)?;
        Ok(render_tests_prompt(code, language, profile))
    }

    /// Prompt asking for a README documenting `code`
    pub fn docs_prompt(&self, code: &str, language: &str) -> Result<String> {
        let profile = self.profiles.lookup(language)?;
        Ok(render_docs_prompt(code, profile))
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Arc::new(ProfileTable::builtin()))
    }
}
