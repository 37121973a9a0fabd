//! Test utilities.
//!
//! Shared helper functions used by tests across modules.
#![cfg(test)]

use crate::config::{
    Language,
    LanguageConfig,
};

/// Builds a `LanguageConfig` for tests
///
/// # Arguments
/// * `languages` - `(code, name)` pairs, in selector order
/// * `default_code` - the default/primary language code
///
/// # Returns
/// The assembled configuration
pub(crate) fn config_of(languages: &[(&str, &str)], default_code: &str) -> LanguageConfig {
    LanguageConfig {
        languages: languages.iter().map(|&(code, name)| Language::new(code, name)).collect(),
        default_code: default_code.to_string(),
    }
}
