//! JSON storage codec for persisted translations.
//!
//! Persists a [`TranslatedText`] as a plain JSON object of code → value.
//! `decode(encode(t)) == t` for every reachable `t`, and an absent stored
//! value decodes to absent. Malformed stored data is a hard error; it is
//! propagated, never papered over with an empty value.

use thiserror::Error;

use crate::text::TranslatedText;

/// Defines errors from encoding or decoding stored translations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The value could not be serialized to JSON.
    #[error("Failed to encode translations: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored string is not a valid JSON object of code → value.
    #[error("Failed to decode stored translations: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encodes a value to its stored JSON representation.
///
/// # Errors
/// - Serialization failure
pub fn encode(text: &TranslatedText) -> Result<String, CodecError> {
    serde_json::to_string(text).map_err(CodecError::Encode)
}

/// Decodes a stored representation back into a value.
///
/// An absent stored value (`None`) decodes to `Ok(None)`, matching a nullable
/// storage column.
///
/// # Errors
/// - The stored string is malformed
pub fn decode(raw: Option<&str>) -> Result<Option<TranslatedText>, CodecError> {
    match raw {
        None => Ok(None),
        Some(raw) => serde_json::from_str(raw).map(Some).map_err(CodecError::Decode),
    }
}
