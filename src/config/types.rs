//! Language sequence configuration types and validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::text::base_code;

/// A single configuration validation problem with its field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0].code")
    pub field_path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Defines errors that may occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed validation.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The configuration file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file is not valid JSON for the expected shape.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list for the error message.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One selectable language: its code and display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Language code, possibly region-qualified (e.g., "en", "en-gb").
    pub code: String,
    /// Display name shown in the language selector (e.g., "English").
    pub name: String,
}

impl Language {
    /// Creates a language from a code and display name.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

/// The ordered language sequence and default code an installation runs with.
///
/// The order of `languages` defines both selector order and the positional
/// alignment of flat-list transport. Passed explicitly to every operation
/// that needs it; nothing in this crate reads process-global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageConfig {
    /// Selectable languages, in selector and transport order.
    pub languages: Vec<Language>,

    /// Default/primary language code, used for "has a translation in the
    /// site's main language" checks.
    ///
    /// May be region-qualified and need not itself be selectable: the stock
    /// configuration pairs an `en-us` default with a plain `en` entry, and
    /// lookup relies on region fallback to bridge the two.
    pub default_code: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self { languages: vec![Language::new("en", "English")], default_code: "en-us".to_string() }
    }
}

impl LanguageConfig {
    /// Number of selectable languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the sequence has no languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Iterates over the language codes in sequence order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|language| language.code.as_str())
    }

    /// Whether `code` is one of the selectable codes.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|language| language.code == code)
    }

    /// The configured default/primary language code.
    #[must_use]
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Maps an active language code onto the selectable sequence.
    ///
    /// A code already in the sequence passes through. A region-qualified
    /// code outside it falls back to its base code (`en-us` → `en`); a plain
    /// code outside it passes through unchanged, since there is nothing
    /// better to offer.
    #[must_use]
    pub fn resolve_active<'a>(&self, active_code: &'a str) -> &'a str {
        if self.contains(active_code) {
            return active_code;
        }
        base_code(active_code).unwrap_or(active_code)
    }

    /// # Errors
    /// - Empty language sequence
    /// - Empty or duplicate language code
    /// - Empty display name
    /// - Empty default code
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [{\"code\": \"en\", \"name\": \"English\"}]",
            ));
        }

        for (index, language) in self.languages.iter().enumerate() {
            if language.code.is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    "The language code cannot be empty. Please specify a code, for example: \"en\"",
                ));
            } else if self.languages.iter().take(index).any(|earlier| earlier.code == language.code)
            {
                errors.push(ValidationError::new(
                    format!("languages[{index}].code"),
                    format!("Duplicate language code '{}'", language.code),
                ));
            }

            if language.name.is_empty() {
                errors.push(ValidationError::new(
                    format!("languages[{index}].name"),
                    "The display name cannot be empty. Please specify a name, for example: \"English\"",
                ));
            }
        }

        // The default code is deliberately not required to be selectable.
        if self.default_code.is_empty() {
            errors.push(ValidationError::new(
                "defaultCode",
                "The default code cannot be empty. Please specify a code, for example: \"en-us\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
