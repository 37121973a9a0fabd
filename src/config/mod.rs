//! Language sequence configuration: types, file loading and management.
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    Language,
    LanguageConfig,
    ValidationError,
};
