//! Form transport glue for a language-switchable text input set.
//!
//! A composite form field presents one sub-input per configured language plus
//! a language selector, and moves values around as a flat ordered list. This
//! module owns the two directions of that transport and the resolution of the
//! "currently active" language onto the selectable sequence. It renders
//! nothing; widget markup belongs to the host framework.

use crate::config::LanguageConfig;
use crate::text::{
    TranslatedText,
    TransportError,
};

/// Layout agreement between compression and decompression.
///
/// Both directions must agree on how many leading entries of the flat list
/// are language-selector values rather than translated content. Making this
/// an explicit shared parameter rules out the mismatch where one side strips
/// a different number of entries than the other side wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Number of leading selector entries in the flat list.
    pub selector_width: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self { selector_width: 1 }
    }
}

/// The transport side of a multi-language composite form field.
///
/// Holds the language sequence and flat-list layout, and converts between
/// stored [`TranslatedText`] values and the flat value lists the host
/// framework's widget machinery supplies and consumes.
///
/// # Example
///
/// ```
/// use translated_text::{LanguageConfig, Language, TranslatedText, TranslatedTextField};
///
/// let field = TranslatedTextField::new(LanguageConfig {
///     languages: vec![Language::new("en", "English"), Language::new("de", "German")],
///     default_code: "en-us".to_string(),
/// });
///
/// let stored = TranslatedText::from_pairs([("en", "Hello")]);
/// let flat = field.decompress(Some(&stored), "en-us");
/// assert_eq!(flat, vec!["en", "Hello", ""]);
///
/// let submitted = field.compress(&flat).unwrap();
/// assert_eq!(submitted, stored);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedTextField {
    /// The selectable language sequence and default code.
    languages: LanguageConfig,
    /// Flat-list layout shared by both transport directions.
    layout: FieldLayout,
}

impl TranslatedTextField {
    /// Creates a field with the default layout (one selector entry).
    #[must_use]
    pub fn new(languages: LanguageConfig) -> Self {
        Self { languages, layout: FieldLayout::default() }
    }

    /// Creates a field with an explicit layout.
    #[must_use]
    pub const fn with_layout(languages: LanguageConfig, layout: FieldLayout) -> Self {
        Self { languages, layout }
    }

    /// The language sequence this field transports.
    #[must_use]
    pub const fn languages(&self) -> &LanguageConfig {
        &self.languages
    }

    /// The flat-list layout this field was built with.
    #[must_use]
    pub const fn layout(&self) -> FieldLayout {
        self.layout
    }

    /// Resolves the caller's active language code onto the selectable
    /// sequence; see [`LanguageConfig::resolve_active`].
    #[must_use]
    pub fn active_code<'a>(&self, requested: &'a str) -> &'a str {
        self.languages.resolve_active(requested)
    }

    /// Decompresses a stored value into the flat list the sub-inputs are
    /// populated from.
    ///
    /// An absent value yields the selector entries followed by one empty
    /// string per language. The selector slot carries the resolved active
    /// code, so a region-qualified active language selects its base entry.
    #[must_use]
    pub fn decompress(&self, value: Option<&TranslatedText>, active_code: &str) -> Vec<String> {
        let selected = self.active_code(active_code);
        match value {
            Some(text) => {
                text.to_ordered_list(&self.languages, selected, self.layout.selector_width)
            }
            None => TranslatedText::new().to_ordered_list(
                &self.languages,
                selected,
                self.layout.selector_width,
            ),
        }
    }

    /// Compresses a submitted flat list back into a value, dropping the
    /// selector prefix and empty entries.
    ///
    /// # Errors
    /// - The list does not match the agreed layout and language sequence
    pub fn compress(&self, values: &[String]) -> Result<TranslatedText, TransportError> {
        TranslatedText::from_ordered_list(values, &self.languages, self.layout.selector_width)
    }
}
