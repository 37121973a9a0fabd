//! Configuration management.

use std::path::PathBuf;

use super::{
    ConfigError,
    LanguageConfig,
    loader,
};

/// Owns the current language configuration for an installation.
///
/// Call sites read the configuration from here once and pass it explicitly
/// into lookup and transport operations.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// The currently active configuration.
    current_config: LanguageConfig,

    /// Directory the configuration was loaded from, if any.
    root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self { current_config: LanguageConfig::default(), root: None }
    }

    /// Loads the configuration for an installation root.
    ///
    /// Falls back to the default configuration when `root` is `None` or when
    /// the root contains no configuration file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_config(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading language configuration for root: {:?}", root);

        let config = if let Some(dir) = &root {
            loader::load_from_dir(dir)?.map_or_else(LanguageConfig::default, |loaded| {
                tracing::debug!("Loaded language configuration: {:?}", loaded);
                loaded
            })
        } else {
            LanguageConfig::default()
        };

        config.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_config = config;
        self.root = root;
        tracing::debug!("Language configuration loaded successfully: {:?}", self.current_config);

        Ok(())
    }

    /// Replaces the configuration with one supplied by the caller.
    ///
    /// # Errors
    /// - Validation error
    pub fn update_config(&mut self, new_config: LanguageConfig) -> Result<(), ConfigError> {
        tracing::debug!("Updating language configuration...");

        new_config.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_config = new_config;
        tracing::debug!("Language configuration updated successfully");

        Ok(())
    }

    /// The currently active configuration.
    #[must_use]
    pub const fn get_config(&self) -> &LanguageConfig {
        &self.current_config
    }

    /// The directory the configuration was loaded from.
    #[must_use]
    pub const fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }
}
