// SPDX-License-Identifier: MPL-2.0
//! Translation coverage of each locale relative to the base catalog.

use super::catalog::Catalog;

/// Coverage of every non-base locale, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Code of the base locale the report is measured against.
    pub base: String,
    /// Number of keys in the base dictionary.
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Base keys with a non-empty translation in this locale.
    pub translated: usize,
    /// Base keys that resolve through the base locale, sorted.
    pub missing: Vec<String>,
    /// Keys this locale defines that the base does not, sorted.
    pub extra: Vec<String>,
}

impl LocaleCoverage {
    /// Translated share of the base keys, 0.0 to 100.0.
    pub fn percent(&self, total_keys: usize) -> f32 {
        if total_keys == 0 {
            100.0
        } else {
            self.translated as f32 / total_keys as f32 * 100.0
        }
    }
}

impl CoverageReport {
    /// Whether every locale translates every base key.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

/// Builds the coverage report for `catalog`.
///
/// Locales without a dictionary report every base key as missing.
pub fn coverage(catalog: &Catalog) -> CoverageReport {
    let registry = catalog.registry();
    let base_locale = registry.base();
    let base = catalog.base_dictionary();

    let mut base_keys: Vec<&str> = base.keys().collect();
    base_keys.sort_unstable();

    let locales = registry
        .list_locales()
        .iter()
        .filter(|locale| *locale != base_locale)
        .map(|locale| {
            let dictionary = catalog.dictionary(locale.code());
            let has = |key: &str| dictionary.is_some_and(|d| d.contains_key(key));

            let missing: Vec<String> = base_keys
                .iter()
                .filter(|key| !has(**key))
                .map(|key| key.to_string())
                .collect();

            let mut extra: Vec<String> = dictionary
                .map(|d| {
                    d.keys()
                        .filter(|key| !base.contains_key(key))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            extra.sort_unstable();

            LocaleCoverage {
                locale: locale.code().to_string(),
                translated: base_keys.len() - missing.len(),
                missing,
                extra,
            }
        })
        .collect();

    CoverageReport {
        base: base_locale.code().to_string(),
        total_keys: base_keys.len(),
        locales,
    }
}
