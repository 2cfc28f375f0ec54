// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and persistence.

/// File name of the settings document inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Preference name under which the selected locale code is persisted.
pub const PREFERENCE_KEY: &str = "selectedLanguage";

/// Code of the base locale of the built-in catalog.
pub const BASE_LOCALE_CODE: &str = "en";

/// Log filter used by the CLI when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

const _: () = {
    assert!(!CONFIG_FILE.is_empty());
    assert!(!PREFERENCE_KEY.is_empty());
    assert!(!BASE_LOCALE_CODE.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_key_matches_persisted_name() {
        assert_eq!(PREFERENCE_KEY, "selectedLanguage");
    }

    #[test]
    fn base_locale_is_english() {
        assert_eq!(BASE_LOCALE_CODE, "en");
    }
}
