// SPDX-License-Identifier: MPL-2.0
//! Ordered, validated list of supported locales.

use super::locale::{parse_code, Locale};
use crate::config::BASE_LOCALE_CODE;
use crate::error::CatalogError;
use unic_langid::LanguageIdentifier;

/// Languages of the classroom dashboard, in menu order:
/// (code, English name, native name, glyph).
const BUILTIN_LOCALES: &[(&str, &str, &str, &str)] = &[
    ("en", "English", "English", "🇺🇸"),
    ("hi", "Hindi", "हिंदी", "🇮🇳"),
    ("or", "Odia", "ଓଡ଼ିଆ", "🔸"),
    ("bn", "Bengali", "বাংলা", "🔹"),
    ("te", "Telugu", "తెలుగు", "🔶"),
    ("ta", "Tamil", "தமிழ்", "🔺"),
    ("gu", "Gujarati", "ગુજરાતી", "🔻"),
    ("mr", "Marathi", "मराठी", "🔷"),
    ("kn", "Kannada", "ಕನ್ನಡ", "🔸"),
    ("ml", "Malayalam", "മലയാളം", "🔹"),
];

/// Fixed set of supported locales with one designated base locale.
///
/// # Invariants
///
/// - At least one locale is registered.
/// - Codes are unique.
/// - The base locale is a member.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    base: usize,
}

impl LocaleRegistry {
    /// Builds a registry in the given order, designating `base_code` as base.
    pub fn new(locales: Vec<Locale>, base_code: &str) -> Result<Self, CatalogError> {
        if locales.is_empty() {
            return Err(CatalogError::EmptyRegistry);
        }

        for (index, locale) in locales.iter().enumerate() {
            if locales[..index].iter().any(|seen| seen == locale) {
                return Err(CatalogError::DuplicateLocale(locale.code().to_string()));
            }
        }

        let base_id = parse_code(base_code)
            .ok_or_else(|| CatalogError::InvalidCode(base_code.to_string()))?;
        let base = locales
            .iter()
            .position(|locale| locale.code() == &base_id)
            .ok_or_else(|| CatalogError::BaseNotRegistered(base_code.to_string()))?;

        Ok(Self { locales, base })
    }

    /// The ten dashboard languages with English as base.
    pub fn builtin() -> Result<Self, CatalogError> {
        let locales = BUILTIN_LOCALES
            .iter()
            .map(|&(code, name, native, glyph)| Locale::new(code, name, native, glyph))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(locales, BASE_LOCALE_CODE)
    }

    /// All locales in registration order.
    pub fn list_locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Finds a locale by its exact code text.
    ///
    /// No trimming or case folding: `"HI"` and `" hi "` are not `"hi"`.
    /// Unknown, blank or malformed codes yield `None`.
    pub fn find_locale(&self, code: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .find(|locale| locale.code().to_string() == code)
    }

    pub fn find_by_id(&self, id: &LanguageIdentifier) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.code() == id)
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.find_by_id(locale.code()).is_some()
    }

    pub fn base(&self) -> &Locale {
        &self.locales[self.base]
    }

    /// Best registered locale for an arbitrary tag such as an OS locale.
    ///
    /// Accepts POSIX spellings (`hi_IN.UTF-8`). Tries the full tag first,
    /// then the first registered locale sharing the primary language.
    pub fn match_tag(&self, tag: &str) -> Option<&Locale> {
        let normalized = tag.split(['.', '@']).next().unwrap_or_default().replace('_', "-");
        let id = parse_code(&normalized)?;

        self.find_by_id(&id).or_else(|| {
            self.locales
                .iter()
                .find(|locale| locale.code().language == id.language)
        })
    }
}
