// ============================================================================
// Portal Core - Localized Text
// File: crates/portal-core/src/domain/localized_text.rs
// Description: Per-locale display strings (titles, descriptions)
// ============================================================================

use std::collections::BTreeMap;

use portal_shared::constants::DEFAULT_LOCALE;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Map from locale code to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same string under the default locale only.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(DEFAULT_LOCALE, text)
    }

    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Requested locale, then `default_locale`, then any non-empty value, then `""`.
    pub fn resolve(&self, locale: &str, default_locale: &str) -> &str {
        self.get(locale)
            .or_else(|| self.get(default_locale))
            .or_else(|| self.0.values().map(String::as_str).find(|s| !s.trim().is_empty()))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|s| s.trim().is_empty())
    }
}

/// A plain string lands under the default locale; a map keeps its
/// string-valued entries; anything else decodes as empty.
impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::String(s) => LocalizedText::plain(s),
            Value::Object(map) => LocalizedText(
                map.into_iter()
                    .filter_map(|(locale, text)| match text {
                        Value::String(t) => Some((locale, t)),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => LocalizedText::new(),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_requested_locale() {
        let text = LocalizedText::new().with("en", "Home").with("ne", "गृहपृष्ठ");
        assert_eq!(text.resolve("ne", "en"), "गृहपृष्ठ");
        assert_eq!(text.resolve("en", "en"), "Home");
    }

    #[test]
    fn test_resolve_falls_back() {
        let text = LocalizedText::new().with("en", "Home").with("ne", " ");
        assert_eq!(text.resolve("ne", "en"), "Home");
        assert_eq!(text.resolve("fr", "de"), "Home");
        assert_eq!(LocalizedText::new().resolve("en", "en"), "");
    }

    #[test]
    fn test_deserialize_plain_string_and_nulls() {
        let text: LocalizedText = serde_json::from_str(r#""Downloads""#).unwrap();
        assert_eq!(text.get("en"), Some("Downloads"));

        let text: LocalizedText = serde_json::from_str(r#"{"en": "News", "ne": null}"#).unwrap();
        assert_eq!(text.get("en"), Some("News"));
        assert_eq!(text.get("ne"), None);

        let text: LocalizedText = serde_json::from_str("null").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_deserialize_wrong_types_as_empty() {
        let text: LocalizedText = serde_json::from_str("42").unwrap();
        assert!(text.is_empty());

        let text: LocalizedText = serde_json::from_str(r#"{"en": 5, "ne": "सूचना"}"#).unwrap();
        assert_eq!(text.get("en"), None);
        assert_eq!(text.get("ne"), Some("सूचना"));
    }
}
