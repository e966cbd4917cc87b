//! Bilingual resource store.
//!
//! Every UI string lives in one JSON file per language under `locales/`,
//! grouped by context (`header`, `hero`, `filters`, ...):
//! ```text
//! locales/
//!   en.json   (reference: every other locale must carry the same keys)
//!   he.json
//! ```
//! The files are compiled in and parsed once at start by
//! [`ResourceStore::embedded`]. Lookups never panic: [`Dictionary::get`]
//! returns [`I18nError::MissingKey`], and [`Dictionary::text`] falls back to
//! a visible `⟦context.key⟧` marker.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Direction, Language};

const EN_SOURCE: &str = include_str!("../../locales/en.json");
const HE_SOURCE: &str = include_str!("../../locales/he.json");

/// Locale every other locale is checked against
const REFERENCE: Language = Language::En;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to parse {language} resources: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("no resources loaded for language {0}")]
    MissingLanguage(Language),
    #[error("{language} resources are missing {} key(s): {}", missing.len(), missing.join(", "))]
    Incomplete {
        language: Language,
        missing: Vec<String>,
    },
    #[error("unknown context {context} for language {language}")]
    UnknownContext { language: Language, context: String },
    #[error("missing key {context}.{key} for language {language}")]
    MissingKey {
        language: Language,
        context: String,
        key: String,
    },
}

/// All strings of one context in one language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dictionary {
    pub language: Language,
    pub dir: Direction,
    pub context: String,
    pub entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn get(&self, key: &str) -> Result<&str, I18nError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| I18nError::MissingKey {
                language: self.language,
                context: self.context.clone(),
                key: key.to_string(),
            })
    }

    /// Lookup that fails closed to a visible marker instead of an error
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Ok(value) => value.to_string(),
            Err(err) => {
                warn!(error = %err, "translation missing, rendering marker");
                format!("⟦{}.{}⟧", self.context, key)
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Parsed resources for every supported language
#[derive(Debug, Clone)]
pub struct ResourceStore {
    dictionaries: HashMap<Language, BTreeMap<String, Dictionary>>,
}

impl ResourceStore {
    /// Store built from the locale files compiled into the binary
    pub fn embedded() -> Result<Self, I18nError> {
        Self::from_sources(&[(Language::En, EN_SOURCE), (Language::He, HE_SOURCE)])
    }

    /// Parse `{context: {key: text}}` JSON documents, one per language.
    ///
    /// Every language must be present and carry exactly the contexts and
    /// keys of the English reference.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut dictionaries = HashMap::new();
        for (language, source) in sources {
            let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(source)
                .map_err(|source| I18nError::Parse {
                    language: *language,
                    source,
                })?;

            let contexts = raw
                .into_iter()
                .map(|(context, entries)| {
                    let dictionary = Dictionary {
                        language: *language,
                        dir: language.direction(),
                        context: context.clone(),
                        entries,
                    };
                    (context, dictionary)
                })
                .collect::<BTreeMap<_, _>>();
            dictionaries.insert(*language, contexts);
        }

        let store = Self { dictionaries };
        store.check_complete()?;

        info!(
            languages = store.dictionaries.len(),
            contexts = store.contexts().len(),
            "translation resources loaded"
        );
        Ok(store)
    }

    fn check_complete(&self) -> Result<(), I18nError> {
        for language in Language::ALL {
            if !self.dictionaries.contains_key(&language) {
                return Err(I18nError::MissingLanguage(language));
            }
        }

        let reference = self.qualified_keys(REFERENCE);
        for language in Language::ALL {
            if language == REFERENCE {
                continue;
            }
            let keys = self.qualified_keys(language);
            let mut missing: Vec<String> = reference.difference(&keys).cloned().collect();
            // Extra keys fail too.
            missing.extend(keys.difference(&reference).map(|k| format!("{k} (extra)")));
            if !missing.is_empty() {
                return Err(I18nError::Incomplete { language, missing });
            }
        }
        Ok(())
    }

    fn qualified_keys(&self, language: Language) -> BTreeSet<String> {
        self.dictionaries
            .get(&language)
            .into_iter()
            .flat_map(|contexts| contexts.values())
            .flat_map(|dict| dict.keys().map(move |key| format!("{}.{key}", dict.context)))
            .collect()
    }

    /// Complete dictionary for a language and context
    pub fn resolve(&self, language: Language, context: &str) -> Result<&Dictionary, I18nError> {
        self.dictionaries
            .get(&language)
            .ok_or(I18nError::MissingLanguage(language))?
            .get(context)
            .ok_or_else(|| I18nError::UnknownContext {
                language,
                context: context.to_string(),
            })
    }

    /// Context names, taken from the reference locale
    pub fn contexts(&self) -> Vec<&str> {
        self.dictionaries
            .get(&REFERENCE)
            .map(|contexts| contexts.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ResourceStore {
        ResourceStore::embedded().expect("embedded locales are complete")
    }

    #[test]
    fn resolves_full_dictionary_per_language() {
        let store = store();
        let en = store.resolve(Language::En, "header").expect("header");
        let he = store.resolve(Language::He, "header").expect("header");
        assert_eq!(en.get("home").expect("key"), "Home");
        assert_eq!(he.get("home").expect("key"), "בית");
        assert_eq!(en.entries.len(), he.entries.len());
    }

    #[test]
    fn direction_follows_language() {
        let store = store();
        assert_eq!(store.resolve(Language::He, "hero").expect("hero").dir, Direction::Rtl);
        assert_eq!(store.resolve(Language::En, "hero").expect("hero").dir, Direction::Ltr);
    }

    #[test]
    fn unknown_context_is_an_error() {
        let err = store().resolve(Language::En, "checkout").expect_err("unknown");
        assert!(matches!(err, I18nError::UnknownContext { ref context, .. } if context == "checkout"));
    }

    #[test]
    fn missing_key_fails_closed() {
        let store = store();
        let dict = store.resolve(Language::En, "footer").expect("footer");
        assert!(matches!(dict.get("nope"), Err(I18nError::MissingKey { .. })));
        assert_eq!(dict.text("nope"), "⟦footer.nope⟧");
    }

    #[test]
    fn incomplete_translation_is_rejected_at_load() {
        let en = r#"{"header": {"home": "Home", "about": "About"}}"#;
        let he = r#"{"header": {"home": "בית"}}"#;
        let err = ResourceStore::from_sources(&[(Language::En, en), (Language::He, he)])
            .expect_err("incomplete");
        match err {
            I18nError::Incomplete { language, missing } => {
                assert_eq!(language, Language::He);
                assert_eq!(missing, vec!["header.about".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_translation_keys_are_rejected_at_load() {
        let en = r#"{"header": {"home": "Home"}}"#;
        let he = r#"{"header": {"home": "בית", "about": "אודותינו"}}"#;
        let err = ResourceStore::from_sources(&[(Language::En, en), (Language::He, he)])
            .expect_err("extra key");
        assert!(matches!(err, I18nError::Incomplete { .. }));
    }

    #[test]
    fn missing_language_is_rejected_at_load() {
        let en = r#"{"header": {"home": "Home"}}"#;
        let err = ResourceStore::from_sources(&[(Language::En, en)]).expect_err("no hebrew");
        assert!(matches!(err, I18nError::MissingLanguage(Language::He)));
    }

    #[test]
    fn malformed_json_reports_language() {
        let err = ResourceStore::from_sources(&[(Language::En, "{"), (Language::He, "{}")])
            .expect_err("parse");
        assert!(matches!(err, I18nError::Parse { language: Language::En, .. }));
    }
}
