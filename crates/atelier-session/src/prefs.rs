//! Theme and language preferences.
//!
//! Read once at startup, written back on toggle. Unknown or missing stored
//! values fall back to the defaults instead of failing.

use crate::kv::{KeyValueStore, StorageError};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Document text direction for this language.
    pub fn direction(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// The persisted preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Load preferences, defaulting anything missing or unrecognized.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let theme = store
            .get(THEME_KEY)?
            .and_then(|raw| Theme::from_code(&raw))
            .unwrap_or_default();
        let language = store
            .get(LANGUAGE_KEY)?
            .and_then(|raw| Language::from_code(&raw))
            .unwrap_or_default();
        Ok(Self { theme, language })
    }

    /// Set and persist the theme.
    pub fn set_theme(
        &mut self,
        store: &mut dyn KeyValueStore,
        theme: Theme,
    ) -> Result<(), StorageError> {
        self.theme = theme;
        store.set(THEME_KEY, theme.as_str())
    }

    /// Set and persist the language.
    pub fn set_language(
        &mut self,
        store: &mut dyn KeyValueStore,
        language: Language,
    ) -> Result<(), StorageError> {
        self.language = language;
        store.set(LANGUAGE_KEY, language.as_str())
    }

    /// Flip and persist the theme.
    pub fn toggle_theme(&mut self, store: &mut dyn KeyValueStore) -> Result<Theme, StorageError> {
        self.set_theme(store, self.theme.toggled())?;
        Ok(self.theme)
    }

    /// Flip and persist the language.
    pub fn toggle_language(
        &mut self,
        store: &mut dyn KeyValueStore,
    ) -> Result<Language, StorageError> {
        self.set_language(store, self.language.toggled())?;
        Ok(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(LANGUAGE_KEY, "fr").unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store).unwrap();

        assert_eq!(prefs.toggle_theme(&mut store).unwrap(), Theme::Dark);
        assert_eq!(prefs.toggle_language(&mut store).unwrap(), Language::Ar);

        let reloaded = Preferences::load(&store).unwrap();
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.language, Language::Ar);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.direction(), "ltr");
        assert_eq!(Language::Ar.direction(), "rtl");
    }

    #[test]
    fn test_roundtrip_strings() {
        assert_eq!(Theme::from_code("dark"), Some(Theme::Dark));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
