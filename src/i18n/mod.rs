// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the classroom dashboard.
//!
//! This module resolves user-visible strings for the active locale and keeps
//! the user's language choice across sessions.
//!
//! # Features
//!
//! - Ordered locale registry with one base locale
//! - Embedded TOML catalogs, one per locale
//! - Fallback from the active locale to the base locale, then to the key
//! - Persisted selection through an injected [`PreferenceStore`]
//! - Coverage reporting and a headless language-menu model

pub mod catalog;
pub mod coverage;
pub mod dictionary;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod selector;
pub mod storage;

pub use catalog::Catalog;
pub use coverage::{coverage, CoverageReport, LocaleCoverage};
pub use dictionary::Dictionary;
pub use locale::Locale;
pub use registry::LocaleRegistry;
pub use resolver::Translator;
pub use selector::{menu_entries, trigger_label, MenuEntry};
pub use storage::{ConfigFileStore, MemoryStore, PreferenceStore, UnavailableStore};
