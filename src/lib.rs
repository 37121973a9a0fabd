//! translated-text
//!
//! Multi-language text values for web applications: a [`TranslatedText`]
//! value type with region fallback lookup, the flat-list form transport used
//! by a language-switchable composite input, and a JSON storage codec.
//!
//! The language sequence is explicit configuration ([`LanguageConfig`]),
//! passed into every operation that needs it.

pub mod codec;
pub mod config;
pub mod form;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use config::{
    ConfigManager,
    Language,
    LanguageConfig,
};
pub use form::{
    FieldLayout,
    TranslatedTextField,
};
pub use text::{
    TranslatedText,
    TransportError,
    UNTRANSLATED,
};
