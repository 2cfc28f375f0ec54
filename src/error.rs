// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Storage(String),
}

/// Problems detected while assembling a locale registry or translation table.
///
/// These only surface at construction time; once a [`crate::i18n::Translator`]
/// exists, lookups and selection never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The registry was built without any locale.
    EmptyRegistry,

    /// Two registered locales share the same code.
    DuplicateLocale(String),

    /// The designated base locale is not part of the registry.
    BaseNotRegistered(String),

    /// A locale code could not be parsed as a language tag.
    InvalidCode(String),

    /// A dictionary was supplied for a locale the registry does not know.
    UnregisteredDictionary(String),

    /// The base locale has no dictionary.
    MissingBaseDictionary(String),

    /// An embedded catalog file could not be parsed.
    Parse { locale: String, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyRegistry => write!(f, "locale registry is empty"),
            CatalogError::DuplicateLocale(code) => {
                write!(f, "locale '{}' is registered more than once", code)
            }
            CatalogError::BaseNotRegistered(code) => {
                write!(f, "base locale '{}' is not registered", code)
            }
            CatalogError::InvalidCode(code) => write!(f, "invalid locale code: {}", code),
            CatalogError::UnregisteredDictionary(code) => {
                write!(f, "dictionary supplied for unregistered locale '{}'", code)
            }
            CatalogError::MissingBaseDictionary(code) => {
                write!(f, "base locale '{}' has no dictionary", code)
            }
            CatalogError::Parse { locale, message } => {
                write!(f, "failed to parse catalog '{}': {}", locale, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
