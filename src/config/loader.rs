//! Configuration file loading functions.

use std::path::Path;

use super::{
    ConfigError,
    LanguageConfig,
};

/// File name looked up in the configuration root.
const CONFIG_FILE_NAME: &str = ".translated-text.json";

/// Loads the language configuration from a root directory.
///
/// Looks for a `.translated-text.json` file and reads it.
///
/// # Arguments
/// * `root` - Directory to look in
///
/// # Returns
/// - `Ok(Some(config))`: the file was found and parsed
/// - `Ok(None)`: no configuration file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_dir(root: &Path) -> Result<Option<LanguageConfig>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let config: LanguageConfig = serde_json::from_str(&content)?;

    Ok(Some(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_dir`: the configuration file exists
    #[rstest]
    fn test_load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"defaultCode": "de"}"#;
        fs::write(temp_dir.path().join(".translated-text.json"), config_content).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().default_code, "de");
    }

    /// `load_from_dir`: no configuration file present
    #[rstest]
    fn test_load_from_dir_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON parse error
    #[rstest]
    fn test_load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".translated-text.json"), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_err());
    }
}
