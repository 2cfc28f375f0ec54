// SPDX-License-Identifier: MPL-2.0
//! Headless model of the language selector menu.
//!
//! Front-ends render these entries however they like; the model only
//! decides what is shown and which entry is highlighted.

use super::resolver::Translator;

/// One row of the language menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: String,
    pub glyph: String,
    pub native_name: String,
    pub display_name: String,
    pub is_active: bool,
}

impl MenuEntry {
    /// Row text: glyph, native name, then the reference name in parentheses.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.glyph, self.native_name, self.display_name)
    }
}

/// Entries for every registered locale in registry order.
pub fn menu_entries(translator: &Translator) -> Vec<MenuEntry> {
    translator
        .registry()
        .list_locales()
        .iter()
        .map(|locale| MenuEntry {
            code: locale.code().to_string(),
            glyph: locale.glyph().to_string(),
            native_name: locale.native_name().to_string(),
            display_name: locale.display_name().to_string(),
            is_active: translator.is_active(locale),
        })
        .collect()
}

/// Text of the collapsed selector button: active glyph and native name.
pub fn trigger_label(translator: &Translator) -> String {
    let active = translator.active_locale();
    format!("{} {}", active.glyph(), active.native_name())
}
