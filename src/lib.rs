// SPDX-License-Identifier: MPL-2.0
//! `classroom_i18n` resolves localized text for the classroom dashboard.
//!
//! It provides a locale registry, embedded translation catalogs, a
//! fallback-chained resolver and persistence of the selected language in
//! `settings.toml`.
//!
//! ```
//! use classroom_i18n::i18n::{MemoryStore, Translator};
//!
//! let translator = Translator::builtin(MemoryStore::new()).unwrap();
//! translator.initialize();
//! translator.select_code("hi");
//! assert_eq!(translator.translate("welcome"), "स्वागत");
//! assert_eq!(translator.translate("unknown.key"), "unknown.key");
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;

pub use error::{CatalogError, Error, Result};
pub use i18n::{Locale, Translator};
