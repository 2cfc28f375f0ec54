// SPDX-License-Identifier: MPL-2.0
//! The immutable [`Locale`] record.

use crate::error::CatalogError;
use std::fmt;
use std::hash::{Hash, Hasher};
use unic_langid::LanguageIdentifier;

/// A registered language with its display metadata.
///
/// Two locales are equal when their codes are equal; names and glyph are
/// presentation only.
#[derive(Debug, Clone)]
pub struct Locale {
    code: LanguageIdentifier,
    display_name: String,
    native_name: String,
    glyph: String,
}

impl Locale {
    /// Creates a locale, parsing `code` as a BCP-47 language tag.
    pub fn new(
        code: &str,
        display_name: impl Into<String>,
        native_name: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let code = parse_code(code).ok_or_else(|| CatalogError::InvalidCode(code.to_string()))?;
        Ok(Self {
            code,
            display_name: display_name.into(),
            native_name: native_name.into(),
            glyph: glyph.into(),
        })
    }

    pub fn code(&self) -> &LanguageIdentifier {
        &self.code
    }

    /// Name in the reference language, e.g. "Hindi".
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name in the locale's own language, e.g. "हिंदी".
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    /// Short visual marker shown next to the name (usually a flag emoji).
    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Parses a locale code, rejecting blank input.
pub(crate) fn parse_code(code: &str) -> Option<LanguageIdentifier> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<LanguageIdentifier>().ok()
}
