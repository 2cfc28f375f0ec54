// SPDX-License-Identifier: MPL-2.0
//! Registry plus translation table, validated together.

use super::dictionary::Dictionary;
use super::registry::LocaleRegistry;
use crate::error::CatalogError;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable localization data: which locales exist and what they say.
///
/// # Invariants
///
/// - Every dictionary belongs to a registered locale.
/// - The base locale has a dictionary.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: LocaleRegistry,
    dictionaries: HashMap<LanguageIdentifier, Dictionary>,
}

impl Catalog {
    /// Pairs a registry with dictionaries keyed by locale code.
    ///
    /// Registered locales without a dictionary are allowed and resolve
    /// everything through the base locale.
    pub fn new<S, I>(registry: LocaleRegistry, dictionaries: I) -> Result<Self, CatalogError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, Dictionary)>,
    {
        let mut table = HashMap::new();
        for (code, dictionary) in dictionaries {
            let code = code.as_ref();
            let locale = registry
                .find_locale(code)
                .ok_or_else(|| CatalogError::UnregisteredDictionary(code.to_string()))?;
            table.insert(locale.code().clone(), dictionary);
        }

        let base = registry.base().code();
        if !table.contains_key(base) {
            return Err(CatalogError::MissingBaseDictionary(base.to_string()));
        }

        Ok(Self {
            registry,
            dictionaries: table,
        })
    }

    /// The dashboard catalog: built-in registry and the embedded
    /// `assets/i18n/<code>.toml` files.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::embedded(LocaleRegistry::builtin()?)
    }

    /// Loads embedded catalog files for every locale of `registry`.
    ///
    /// Missing files leave that locale without a dictionary; unparsable ones
    /// are an error.
    pub fn embedded(registry: LocaleRegistry) -> Result<Self, CatalogError> {
        let mut loaded = Vec::new();
        for locale in registry.list_locales() {
            let code = locale.code().to_string();
            let filename = format!("{}.toml", code);
            if let Some(file) = Asset::get(&filename) {
                let dictionary = parse_embedded(&code, file.data.as_ref())?;
                loaded.push((code, dictionary));
            }
        }

        Self::new(registry, loaded)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn dictionary(&self, code: &LanguageIdentifier) -> Option<&Dictionary> {
        self.dictionaries.get(code)
    }

    /// Dictionary lookup by exact code text.
    pub fn dictionary_for(&self, code: &str) -> Option<&Dictionary> {
        self.registry
            .find_locale(code)
            .and_then(|locale| self.dictionaries.get(locale.code()))
    }

    pub fn base_dictionary(&self) -> &Dictionary {
        // presence checked in `new`
        &self.dictionaries[self.registry.base().code()]
    }

    /// Single-locale lookup without fallback.
    pub fn lookup(&self, code: &LanguageIdentifier, key: &str) -> Option<&str> {
        self.dictionaries.get(code).and_then(|d| d.get(key))
    }
}

/// Decodes one embedded catalog file. Invalid UTF-8 is a parse error.
fn parse_embedded(locale: &str, data: &[u8]) -> Result<Dictionary, CatalogError> {
    let content = std::str::from_utf8(data).map_err(|err| CatalogError::Parse {
        locale: locale.to_string(),
        message: format!("catalog is not valid UTF-8: {err}"),
    })?;
    Dictionary::from_toml_str(locale, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(
            vec![
                Locale::new("en", "English", "English", "🇺🇸").unwrap(),
                Locale::new("hi", "Hindi", "हिंदी", "🇮🇳").unwrap(),
            ],
            "en",
        )
        .unwrap()
    }

    #[test]
    fn new_requires_base_dictionary() {
        let hi: Dictionary = [("welcome", "स्वागत")].into_iter().collect();
        let err = Catalog::new(registry(), [("hi", hi)]).unwrap_err();
        assert_eq!(err, CatalogError::MissingBaseDictionary("en".into()));
    }

    #[test]
    fn new_rejects_unregistered_dictionary() {
        let err = Catalog::new(
            registry(),
            [("en", Dictionary::new()), ("fr", Dictionary::new())],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::UnregisteredDictionary("fr".into()));
    }

    #[test]
    fn locales_without_dictionary_are_allowed() {
        let catalog = Catalog::new(registry(), [("en", Dictionary::new())]).unwrap();
        assert!(catalog.dictionary_for("hi").is_none());
        assert!(catalog.base_dictionary().is_empty());
    }

    #[test]
    fn builtin_loads_embedded_catalogs() {
        let catalog = Catalog::builtin().expect("embedded catalogs parse");
        let base = catalog.base_dictionary();
        assert_eq!(base.get("welcome"), Some("Welcome"));
        assert_eq!(base.get("profile.title"), Some("My Profile"));

        let hi = catalog.dictionary_for("hi").expect("hindi catalog is embedded");
        assert_eq!(hi.get("welcome"), Some("स्वागत"));

        let or = catalog.dictionary_for("or").expect("odia catalog is embedded");
        assert_eq!(or.get("welcome"), Some("ସ୍ୱାଗତ"));
    }

    #[test]
    fn embedded_base_covers_every_translated_key() {
        let catalog = Catalog::builtin().unwrap();
        let base = catalog.base_dictionary();
        for locale in catalog.registry().list_locales() {
            if let Some(dictionary) = catalog.dictionary(locale.code()) {
                for key in dictionary.keys() {
                    assert!(
                        base.contains_key(key),
                        "'{}' in {} is missing from the base catalog",
                        key,
                        locale
                    );
                }
            }
        }
    }

    #[test]
    fn embedded_catalog_rejects_invalid_utf8() {
        let err = parse_embedded("hi", b"welcome = \"\xff\xfe\"").unwrap_err();
        match err {
            CatalogError::Parse { locale, message } => {
                assert_eq!(locale, "hi");
                assert!(message.contains("UTF-8"));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn embedded_catalog_decodes_utf8() {
        let dictionary = parse_embedded("hi", "welcome = \"स्वागत\"".as_bytes()).unwrap();
        assert_eq!(dictionary.get("welcome"), Some("स्वागत"));
    }

    #[test]
    fn dictionary_for_uses_exact_codes() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.dictionary_for("hi").is_some());
        assert!(catalog.dictionary_for("HI").is_none());
    }

    #[test]
    fn lookup_does_not_fall_back() {
        let catalog = Catalog::builtin().unwrap();
        let hi: LanguageIdentifier = "hi".parse().unwrap();
        assert_eq!(catalog.lookup(&hi, "no.such.key"), None);
    }
}
