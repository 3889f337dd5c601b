//! Display-string lookup
//!
//! User-facing text arrives either as a catalog key or as an inline table of
//! translations. Both go through a [`Localizer`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Text that still needs to be resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Catalog key, e.g. `"noUserScriptFound"`
    Key(String),
    /// Inline translations keyed by locale tag, e.g. `{"en": "...", "ja": "..."}`
    Table(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Key(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(key: &str) -> Self {
        LocalizedText::Key(key.to_string())
    }
}

/// Resolves [`LocalizedText`] and catalog messages to display strings
pub trait Localizer {
    fn lookup(&self, text: &LocalizedText) -> String;

    /// Look up `key` and substitute `{0}`, `{1}`, ... with `args`
    fn message(&self, key: &str, args: &[&str]) -> String {
        let mut resolved = self.lookup(&LocalizedText::Key(key.to_string()));
        for (i, arg) in args.iter().enumerate() {
            resolved = resolved.replace(&format!("{{{}}}", i), arg);
        }
        resolved
    }
}

const FALLBACK_LOCALE: &str = "en";

const BUILTIN_STRINGS: &[(&str, &str)] = &[
    ("wizardTitle", "Init Script Wizard"),
    ("alertTitle", "rcwizard"),
    ("methodCreate", "Create a new init file from a key scheme"),
    ("methodSelect", "Use an init file that already exists"),
    ("noUserScriptFound", "No init file was found in {0}"),
    ("pathChanged", "Directory set to {0}"),
    ("schemesLoaded", "{0} key scheme(s) available"),
    ("schemesSkipped", "{0} scheme file(s) could not be read"),
    ("noSchemeAvailable", "No key scheme is available; choose an existing init file instead"),
];

/// String table with a locale tag for inline translations
#[derive(Debug, Clone)]
pub struct CatalogLocalizer {
    locale: String,
    strings: HashMap<String, String>,
}

impl Default for CatalogLocalizer {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

impl CatalogLocalizer {
    /// Create a localizer seeded with the built-in English catalog
    pub fn new(locale: impl Into<String>) -> Self {
        let strings = BUILTIN_STRINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            locale: locale.into(),
            strings,
        }
    }

    /// Add or override one catalog entry
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn pick_translation(&self, table: &BTreeMap<String, String>) -> String {
        let language = self.locale.split(['-', '_']).next().unwrap_or_default();
        table
            .get(&self.locale)
            .or_else(|| table.get(language))
            .or_else(|| table.get(FALLBACK_LOCALE))
            .or_else(|| table.values().next())
            .cloned()
            .unwrap_or_default()
    }
}

impl Localizer for CatalogLocalizer {
    fn lookup(&self, text: &LocalizedText) -> String {
        match text {
            // Unknown keys display as themselves
            LocalizedText::Key(key) => self.strings.get(key).cloned().unwrap_or_else(|| key.clone()),
            LocalizedText::Table(table) => self.pick_translation(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> LocalizedText {
        LocalizedText::Table(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_message_substitutes_arguments() {
        let localizer = CatalogLocalizer::default();
        assert_eq!(
            localizer.message("noUserScriptFound", &["/tmp/x"]),
            "No init file was found in /tmp/x"
        );
    }

    #[test]
    fn test_unknown_key_is_returned_verbatim() {
        let localizer = CatalogLocalizer::default();
        assert_eq!(localizer.lookup(&"schemeEmacs".into()), "schemeEmacs");
    }

    #[test]
    fn test_table_prefers_exact_then_language_then_english() {
        let text = table(&[("en", "Emacs like"), ("ja", "Emacs 風")]);
        assert_eq!(CatalogLocalizer::new("ja").lookup(&text), "Emacs 風");
        assert_eq!(CatalogLocalizer::new("ja-JP").lookup(&text), "Emacs 風");
        assert_eq!(CatalogLocalizer::new("fr").lookup(&text), "Emacs like");
    }

    #[test]
    fn test_table_without_english_uses_first_entry() {
        let text = table(&[("de", "Tastenschema")]);
        assert_eq!(CatalogLocalizer::new("fr").lookup(&text), "Tastenschema");
    }

    #[test]
    fn test_localized_text_deserializes_both_shapes() {
        let key: LocalizedText = serde_json::from_str("\"schemeName\"").unwrap();
        assert_eq!(key, LocalizedText::Key("schemeName".to_string()));

        let inline: LocalizedText = serde_json::from_str(r#"{"en": "Vi"}"#).unwrap();
        assert_eq!(inline, table(&[("en", "Vi")]));
    }
}
