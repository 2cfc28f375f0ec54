// SPDX-License-Identifier: MPL-2.0
//! Per-locale key/value dictionaries.

use crate::error::CatalogError;
use std::collections::HashMap;

/// Mapping from lookup key to localized string for one locale.
///
/// An empty value counts as "not translated": [`Dictionary::get`] skips it so
/// resolution falls through to the next locale in the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the translated value, ignoring blank entries.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys with a non-empty translation.
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Keys with a non-empty translation, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, _)| key.as_str())
    }

    /// Parses a TOML catalog.
    ///
    /// Quoted dotted keys (`"profile.title" = "My Profile"`) are taken
    /// verbatim; nested tables are flattened with `.` separators. Any
    /// non-string leaf is rejected.
    pub fn from_toml_str(locale: &str, content: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = toml::from_str(content).map_err(|err| CatalogError::Parse {
            locale: locale.to_string(),
            message: err.to_string(),
        })?;

        let mut dictionary = Self::new();
        flatten_into(&mut dictionary, locale, None, table)?;
        Ok(dictionary)
    }
}

fn flatten_into(
    dictionary: &mut Dictionary,
    locale: &str,
    prefix: Option<&str>,
    table: toml::Table,
) -> Result<(), CatalogError> {
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            toml::Value::String(text) => dictionary.insert(full_key, text),
            toml::Value::Table(nested) => {
                flatten_into(dictionary, locale, Some(&full_key), nested)?
            }
            other => {
                return Err(CatalogError::Parse {
                    locale: locale.to_string(),
                    message: format!(
                        "key '{}' has non-string value of type {}",
                        full_key,
                        other.type_str()
                    ),
                });
            }
        }
    }
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}
