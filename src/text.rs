//! The translated text value type and its fallback lookup.
//!
//! [`TranslatedText`] holds the translations of one logical piece of text,
//! keyed by language code. Lookup degrades deterministically: exact code
//! first, then the base code of a region-qualified request (`en-us` → `en`),
//! then the literal sentinel [`UNTRANSLATED`]. A missing translation is never
//! an error.
//!
//! The type also converts to and from the flat ordered list used by a
//! composite form input: [`TranslatedText::to_ordered_list`] (decompression)
//! and [`TranslatedText::from_ordered_list`] (compression). Both directions
//! take the language sequence and the selector prefix width explicitly, so
//! the two sides can never disagree silently.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::config::LanguageConfig;

/// Sentinel returned by lookup when no value exists for a code or its base
/// code.
pub const UNTRANSLATED: &str = "untranslated";

/// Returns the base code of a region-qualified language code
/// (`en-us` → `en`), or `None` when the code carries no region suffix.
#[must_use]
pub fn base_code(code: &str) -> Option<&str> {
    code.split_once('-').map(|(base, _)| base)
}

/// Defines errors from converting a flat value list into a [`TranslatedText`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The flat list is shorter than the agreed selector prefix.
    #[error(
        "flat list too short: expected {selector_width} leading selector entries, got {actual} values in total"
    )]
    MissingSelector {
        /// Number of leading selector entries the layout promises.
        selector_width: usize,
        /// Total number of values actually submitted.
        actual: usize,
    },

    /// The content entries do not line up with the language sequence.
    #[error(
        "flat list does not match language sequence: expected {expected} content entries, got {actual}"
    )]
    LengthMismatch {
        /// Number of configured languages.
        expected: usize,
        /// Number of content entries after the selector prefix.
        actual: usize,
    },
}

/// Translations of one logical piece of text, keyed by language code.
///
/// Behaves as a read-only mapping: codes absent from the map are untranslated
/// for that language. Serializes transparently as a JSON object of
/// code → value, so the storage codec round-trips it without any envelope.
///
/// # Example
///
/// ```
/// use translated_text::{TranslatedText, UNTRANSLATED};
///
/// let text = TranslatedText::from_pairs([("en", "Hello"), ("de", "Hallo")]);
///
/// assert_eq!(text.text_for("de"), "Hallo");
/// assert_eq!(text.text_for("en-us"), "Hello"); // region fallback
/// assert_eq!(text.text_for("fr"), UNTRANSLATED);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslatedText {
    /// Language code → translated value.
    values: BTreeMap<String, String>,
}

impl TranslatedText {
    /// Creates an empty value with no translations.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Builds a value from `(code, value)` pairs.
    ///
    /// Pairs are stored as given; empty strings are kept here, unlike
    /// [`Self::from_ordered_list`], which compacts them away.
    pub fn from_pairs<C, V>(pairs: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        Self { values: pairs.into_iter().map(|(code, value)| (code.into(), value.into())).collect() }
    }

    /// Exact lookup without any fallback.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }

    /// Returns the best value for `code`.
    ///
    /// An exact hit returns the stored value, even an empty string. On a
    /// miss, a region-qualified code retries with its base code. If that
    /// also misses, the literal [`UNTRANSLATED`] sentinel is returned.
    #[must_use]
    pub fn text_for(&self, code: &str) -> &str {
        if let Some(value) = self.values.get(code) {
            return value;
        }
        base_code(code)
            .and_then(|base| self.values.get(base))
            .map_or(UNTRANSLATED, String::as_str)
    }

    /// Whether `code` has a non-empty translation.
    ///
    /// Falls back to the base code when `code` is region-qualified. An empty
    /// stored string counts as "not translated" here, intentionally unlike
    /// [`Self::text_for`], which returns whatever the exact key stores.
    #[must_use]
    pub fn has(&self, code: &str) -> bool {
        if self.values.get(code).is_some_and(|value| !value.is_empty()) {
            return true;
        }
        base_code(code)
            .and_then(|base| self.values.get(base))
            .is_some_and(|value| !value.is_empty())
    }

    /// Whether the configured default language has a non-empty translation.
    ///
    /// The default code may itself sit outside the selectable sequence (the
    /// stock setup pairs an `en-us` default with `en`/`de`/`fr` selectable
    /// codes); [`Self::has`]'s region fallback covers that case.
    #[must_use]
    pub fn has_default_language(&self, languages: &LanguageConfig) -> bool {
        self.has(languages.default_code())
    }

    /// Resolves the display string for the currently active language.
    ///
    /// The active code comes from the caller; this is [`Self::text_for`]
    /// under the name display call sites use.
    #[must_use]
    pub fn render(&self, active_code: &str) -> &str {
        self.text_for(active_code)
    }

    /// Number of stored translations, counting empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no translations are stored at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(code, value)` pairs in code order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Iterates over the stored language codes in code order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Decompresses into the flat list a multi-part input is populated from.
    ///
    /// The first `selector_width` entries repeat `selected_code` (the value
    /// shown in the language selector), followed by one entry per configured
    /// language: the stored value, or an empty string when untranslated.
    #[must_use]
    pub fn to_ordered_list(
        &self,
        languages: &LanguageConfig,
        selected_code: &str,
        selector_width: usize,
    ) -> Vec<String> {
        let mut flat = Vec::with_capacity(selector_width + languages.len());
        flat.extend(std::iter::repeat_n(selected_code.to_string(), selector_width));
        flat.extend(
            languages.codes().map(|code| self.values.get(code).cloned().unwrap_or_default()),
        );
        flat
    }

    /// Compresses a submitted flat list back into a `TranslatedText`.
    ///
    /// The leading `selector_width` entries are the language selector, not
    /// content, and are discarded. The remaining entries align positionally
    /// with `languages`; only non-empty values are kept, so an empty input
    /// collapses to "missing" rather than being stored as an empty string.
    ///
    /// A single-language sequence with no content entries is read as one
    /// empty value (yielding an empty result). Any other length mismatch is
    /// a precondition violation and fails with a diagnostic error.
    pub fn from_ordered_list(
        values: &[String],
        languages: &LanguageConfig,
        selector_width: usize,
    ) -> Result<Self, TransportError> {
        let content = values.get(selector_width..).ok_or(TransportError::MissingSelector {
            selector_width,
            actual: values.len(),
        })?;

        if content.len() != languages.len() && !(languages.len() == 1 && content.is_empty()) {
            return Err(TransportError::LengthMismatch {
                expected: languages.len(),
                actual: content.len(),
            });
        }

        Ok(Self {
            values: languages
                .codes()
                .zip(content)
                .filter(|(_, value)| !value.is_empty())
                .map(|(code, value)| (code.to_string(), value.clone()))
                .collect(),
        })
    }
}

/// Iterator over the `(code, value)` pairs of a [`TranslatedText`], in code
/// order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Underlying map iterator.
    inner: std::collections::btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(code, value)| (code.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TranslatedText {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { inner: self.values.iter() }
    }
}

impl<C, V> FromIterator<(C, V)> for TranslatedText
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::config_of;

    fn text(pairs: &[(&str, &str)]) -> TranslatedText {
        TranslatedText::from_pairs(pairs.iter().copied())
    }

    fn flat(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case::exact_hit("en", "Hello")]
    #[case::exact_hit_other("de", "Hallo")]
    #[case::region_falls_back_to_base("en-us", "Hello")]
    #[case::region_with_unknown_base("pt-br", UNTRANSLATED)]
    #[case::plain_miss("fr", UNTRANSLATED)]
    fn text_for_fallback(#[case] code: &str, #[case] expected: &str) {
        let text = text(&[("en", "Hello"), ("de", "Hallo")]);

        assert_that!(text.text_for(code), eq(expected));
    }

    #[rstest]
    fn text_for_exact_empty_value_is_returned_as_is() {
        let text = text(&[("en", "")]);

        // The exact key wins even when empty; only a true miss yields the
        // sentinel.
        assert_that!(text.text_for("en"), eq(""));
        assert_that!(text.text_for("de"), eq(UNTRANSLATED));
    }

    #[rstest]
    fn text_for_region_hit_beats_base() {
        let text = text(&[("en", "Hello"), ("en-gb", "Hullo")]);

        assert_that!(text.text_for("en-gb"), eq("Hullo"));
    }

    #[rstest]
    #[case::non_empty_exact("en", true)]
    #[case::empty_exact("de", false)]
    #[case::region_over_non_empty_base("en-us", true)]
    #[case::region_over_empty_base("de-at", false)]
    #[case::absent("fr", false)]
    fn has_requires_non_empty(#[case] code: &str, #[case] expected: bool) {
        let text = text(&[("en", "Hello"), ("de", "")]);

        assert_that!(text.has(code), eq(expected));
    }

    #[rstest]
    fn has_empty_region_value_still_checks_base() {
        // The region key exists but is empty, so the base code decides.
        let text = text(&[("en", "Hello"), ("en-gb", "")]);

        assert_that!(text.has("en-gb"), eq(true));
    }

    #[rstest]
    fn has_default_language_uses_region_fallback() {
        // Stock setup: default code outside the selectable sequence.
        let config = config_of(&[("en", "English"), ("de", "German")], "en-us");

        assert_that!(text(&[("en", "Hello")]).has_default_language(&config), eq(true));
        assert_that!(text(&[("de", "Hallo")]).has_default_language(&config), eq(false));
    }

    #[rstest]
    fn render_matches_text_for() {
        let text = text(&[("en", "Hello")]);

        assert_that!(text.render("en"), eq("Hello"));
        assert_that!(text.render("fr"), eq(UNTRANSLATED));
    }

    #[rstest]
    #[case::region_qualified("en-us", Some("en"))]
    #[case::multi_part_region("az-cyrl-az", Some("az"))]
    #[case::bare("en", None)]
    fn base_code_strips_one_region_suffix(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_that!(base_code(code), eq(expected));
    }

    #[rstest]
    fn to_ordered_list_fills_gaps_with_empty_strings() {
        let config = config_of(&[("en", "English"), ("de", "German"), ("fr", "French")], "en");
        let text = text(&[("en", "Hello"), ("fr", "Bonjour")]);

        let list = text.to_ordered_list(&config, "de", 1);

        assert_that!(list, elements_are![eq("de"), eq("Hello"), eq(""), eq("Bonjour")]);
    }

    #[rstest]
    fn to_ordered_list_repeats_selector() {
        let config = config_of(&[("en", "English"), ("de", "German")], "en");
        let text = text(&[("en", "Hello")]);

        let list = text.to_ordered_list(&config, "en", 2);

        assert_that!(list, elements_are![eq("en"), eq("en"), eq("Hello"), eq("")]);
    }

    #[rstest]
    fn from_ordered_list_drops_empty_values() {
        let config = config_of(&[("en", "English"), ("de", "German")], "en");

        let text = TranslatedText::from_ordered_list(&flat(&["en", "Hello", ""]), &config, 1)
            .unwrap();

        assert_that!(text.get("en"), some(eq("Hello")));
        assert_that!(text.get("de"), none());
        assert_that!(text.len(), eq(1));
    }

    #[rstest]
    fn from_ordered_list_discards_selector_prefix() {
        let config = config_of(&[("en", "English"), ("de", "German")], "en");

        let text =
            TranslatedText::from_ordered_list(&flat(&["de", "de", "Hello", "Hallo"]), &config, 2)
                .unwrap();

        assert_that!(text.get("en"), some(eq("Hello")));
        assert_that!(text.get("de"), some(eq("Hallo")));
    }

    #[rstest]
    fn from_ordered_list_single_language_empty_input() {
        let config = config_of(&[("en", "English")], "en");

        // One selector entry, zero content entries: read as one empty value,
        // which the falsy rule then drops.
        let text = TranslatedText::from_ordered_list(&flat(&["en"]), &config, 1).unwrap();

        assert_that!(text.is_empty(), eq(true));
    }

    #[rstest]
    fn from_ordered_list_rejects_short_prefix() {
        let config = config_of(&[("en", "English")], "en");

        let result = TranslatedText::from_ordered_list(&flat(&["en"]), &config, 2);

        assert_eq!(result, Err(TransportError::MissingSelector { selector_width: 2, actual: 1 }));
    }

    #[rstest]
    #[case::too_few(&["en", "Hello"], 2, 1)]
    #[case::too_many(&["en", "a", "b", "c"], 2, 3)]
    fn from_ordered_list_rejects_misaligned_content(
        #[case] values: &[&str],
        #[case] expected: usize,
        #[case] actual: usize,
    ) {
        let config = config_of(&[("en", "English"), ("de", "German")], "en");

        let result = TranslatedText::from_ordered_list(&flat(values), &config, 1);

        assert_eq!(result, Err(TransportError::LengthMismatch { expected, actual }));
    }

    #[rstest]
    fn ordered_list_round_trip_compacts_empty_entries() {
        let config = config_of(&[("en", "English"), ("de", "German")], "en");
        let stored = text(&[("en", "hi"), ("de", "")]);

        let list = stored.to_ordered_list(&config, "en", 1);
        let round_tripped = TranslatedText::from_ordered_list(&list, &config, 1).unwrap();

        assert_eq!(round_tripped, text(&[("en", "hi")]));
    }

    #[rstest]
    fn iter_and_codes_are_code_ordered() {
        let text = text(&[("fr", "Bonjour"), ("de", "Hallo"), ("en", "Hello")]);

        let codes: Vec<&str> = text.codes().collect();
        assert_eq!(codes, vec!["de", "en", "fr"]);

        let pairs: Vec<(&str, &str)> = text.iter().collect();
        assert_eq!(pairs, vec![("de", "Hallo"), ("en", "Hello"), ("fr", "Bonjour")]);
    }

    #[rstest]
    fn for_loop_over_reference_yields_pairs() {
        let text = text(&[("de", "Hallo"), ("en", "Hello")]);

        let mut pairs = Vec::new();
        for (code, value) in &text {
            pairs.push((code, value));
        }

        assert_eq!(pairs, vec![("de", "Hallo"), ("en", "Hello")]);
        assert_eq!(text.iter().len(), 2);
    }
}
