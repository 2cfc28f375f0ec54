// SPDX-License-Identifier: MPL-2.0
//! The translation resolver: active locale lifecycle and key resolution.
//!
//! # Resolution order
//!
//! 1. The active locale's dictionary.
//! 2. The base locale's dictionary, when base and active differ.
//! 3. The key itself, so gaps stay visible instead of rendering blank.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Unknown locale selected | Ignored, previous locale kept |
//! | Unknown persisted code | Ignored, current locale kept |
//! | Missing key | Base value, then the key |
//! | Storage read fails | Treated as "nothing saved" |
//! | Storage write fails | Logged, selection still applies |

use super::catalog::Catalog;
use super::locale::Locale;
use super::registry::LocaleRegistry;
use super::storage::PreferenceStore;
use crate::config::PREFERENCE_KEY;
use crate::error::Result;
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// Localization service owning the catalog and the active selection.
///
/// The active locale lives in an [`ArcSwap`]: selection replaces the whole
/// value, readers never block and never see a partial update. The base
/// locale is active from construction on, so every method is usable before
/// [`Translator::initialize`] runs.
pub struct Translator {
    catalog: Catalog,
    store: Box<dyn PreferenceStore>,
    active: ArcSwap<Locale>,
}

impl Translator {
    pub fn new(catalog: Catalog, store: impl PreferenceStore + 'static) -> Self {
        let base = catalog.registry().base().clone();
        Self {
            catalog,
            store: Box::new(store),
            active: ArcSwap::from_pointee(base),
        }
    }

    /// Translator over the embedded dashboard catalog.
    pub fn builtin(store: impl PreferenceStore + 'static) -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?, store))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &LocaleRegistry {
        self.catalog.registry()
    }

    /// The currently selected locale. Always a registered one.
    pub fn active_locale(&self) -> Arc<Locale> {
        self.active.load_full()
    }

    pub fn is_active(&self, locale: &Locale) -> bool {
        self.active.load().code() == locale.code()
    }

    /// Selects `locale` and persists the choice.
    ///
    /// Returns `false` and changes nothing when the code is not registered.
    /// A failed write is logged; the in-memory selection still applies.
    pub fn set_active_locale(&self, locale: &Locale) -> bool {
        self.activate(locale, true)
    }

    /// Selects a locale by code and persists the choice.
    pub fn select_code(&self, code: &str) -> bool {
        match self.registry().find_locale(code) {
            Some(locale) => {
                let locale = locale.clone();
                self.activate(&locale, true)
            }
            None => {
                tracing::debug!(code, "ignoring selection of unregistered locale");
                false
            }
        }
    }

    /// Selects a locale for this session only, leaving the stored preference
    /// untouched.
    pub fn use_for_session(&self, code: &str) -> bool {
        match self.registry().find_locale(code) {
            Some(locale) => {
                let locale = locale.clone();
                self.activate(&locale, false)
            }
            None => false,
        }
    }

    /// Restores the persisted preference, if it names a registered locale.
    ///
    /// Anything else (no preference, unknown code, unreadable storage) keeps
    /// the current locale. Calling this repeatedly yields the same result.
    pub fn initialize(&self) -> Arc<Locale> {
        match self.store.get(PREFERENCE_KEY) {
            Ok(Some(code)) => match self.registry().find_locale(&code) {
                Some(locale) => {
                    let locale = locale.clone();
                    self.activate(&locale, false);
                }
                None => {
                    tracing::warn!(code = %code, "persisted locale is not registered, ignoring");
                }
            },
            Ok(None) => {
                tracing::debug!("no persisted locale preference");
            }
            Err(error) => {
                tracing::warn!(%error, "could not read locale preference, using current locale");
            }
        }
        self.active_locale()
    }

    fn activate(&self, locale: &Locale, persist: bool) -> bool {
        let Some(registered) = self.registry().find_by_id(locale.code()) else {
            tracing::debug!(code = %locale.code(), "ignoring selection of unregistered locale");
            return false;
        };

        self.active.store(Arc::new(registered.clone()));
        tracing::debug!(code = %registered.code(), persist, "active locale changed");

        if persist {
            let code = registered.code().to_string();
            if let Err(error) = self.store.set(PREFERENCE_KEY, &code) {
                tracing::warn!(%error, code = %code, "failed to persist locale preference");
            }
        }
        true
    }

    /// Resolves `key` for the active locale. Never fails; worst case the key
    /// is echoed back.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let active = self.active.load();
        let base = self.registry().base().code();

        if let Some(value) = self.catalog.lookup(active.code(), key) {
            return value;
        }
        if active.code() != base {
            if let Some(value) = self.catalog.lookup(base, key) {
                return value;
            }
        }
        key
    }

    /// Resolves `key` like [`Translator::translate`], then substitutes
    /// `{name}` tokens from `args` in a single pass.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.translate(key), args)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("active", &self.active.load().code().to_string())
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// Single-pass `{name}` interpolation. Unmatched tokens are left as-is.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        match args.iter().find(|&&(name, _)| closed && name == token) {
            Some(&(_, value)) => result.push_str(value),
            None => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
