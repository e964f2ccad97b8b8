//! Locale selection: the resolver, the switch action and the render session
//! that ties them together.

use std::fmt;

use super::storage::PreferenceStore;

/// Key of the persisted preference slot
pub const PREFERENCE_KEY: &str = "language";

/// Supported content variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// All locales in switcher order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Code stored in the preference slot and used for `<html lang>`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Exact, case-sensitive match against a stored code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Flag shown on the switcher button
    pub fn flag(&self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Ru => "🇷🇺",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Read the persisted preference.
///
/// Total: a missing slot or any value other than `en`/`ru` yields `En`.
pub fn resolve(store: &dyn PreferenceStore) -> Locale {
    match store.get(PREFERENCE_KEY) {
        Some(value) => Locale::from_code(&value).unwrap_or_else(|| {
            tracing::debug!(stored = %value, "unrecognized locale preference, using default");
            Locale::default()
        }),
        None => Locale::default(),
    }
}

/// Persist `target` as the new preference.
///
/// A failed write is logged and otherwise ignored; the next `resolve`
/// then falls back to whatever the slot still holds.
pub fn switch_locale(store: &dyn PreferenceStore, target: Locale) {
    if let Err(err) = store.set(PREFERENCE_KEY, target.code()) {
        tracing::warn!(locale = %target, error = %err, "failed to persist locale preference");
    }
}

/// One render cycle's view of the locale.
///
/// `start` resolves once; `switch` persists and restarts the cycle by
/// resolving again, so the locale always reflects what storage holds.
pub struct LocaleSession<S> {
    store: S,
    locale: Locale,
    cycle: u32,
}

impl<S: PreferenceStore> LocaleSession<S> {
    pub fn start(store: S) -> Self {
        let locale = resolve(&store);
        Self {
            store,
            locale,
            cycle: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of restarts since `start`
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist `target`, then restart. Returns the locale of the new cycle.
    pub fn switch(&mut self, target: Locale) -> Locale {
        switch_locale(&self.store, target);
        self.restart()
    }

    /// Re-run the resolver, as a fresh page load would
    pub fn restart(&mut self) -> Locale {
        self.locale = resolve(&self.store);
        self.cycle = self.cycle.wrapping_add(1);
        self.locale
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStore;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Ru.code(), "ru");
        assert_eq!(Locale::Ru.to_string(), "ru");
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ru"), Some(Locale::Ru));
        assert_eq!(Locale::from_code("RU"), None);
        assert_eq!(Locale::from_code(" ru"), None);
        assert_eq!(Locale::from_code("ru-RU"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::ALL, [Locale::En, Locale::Ru]);
    }

    #[test]
    fn test_resolve_recognized_values() {
        for locale in Locale::ALL {
            let store = MemoryStore::with_entry(PREFERENCE_KEY, locale.code());
            assert_eq!(resolve(&store), locale);
        }
    }

    #[test]
    fn test_resolve_absent_slot() {
        assert_eq!(resolve(&MemoryStore::new()), Locale::En);
    }

    #[test]
    fn test_resolve_unrecognized_values_default() {
        for value in ["fr", "", "EN", "Ru", "russian", "en ", "\u{0}", "ру"] {
            let store = MemoryStore::with_entry(PREFERENCE_KEY, value);
            assert_eq!(resolve(&store), Locale::En, "value {value:?}");
        }
    }

    #[test]
    fn test_resolve_ignores_other_keys() {
        let store = MemoryStore::with_entry("lang", "ru");
        assert_eq!(resolve(&store), Locale::En);
    }

    #[test]
    fn test_switch_overwrites_slot() {
        let store = MemoryStore::with_entry(PREFERENCE_KEY, "fr");
        switch_locale(&store, Locale::Ru);
        assert_eq!(store.get(PREFERENCE_KEY), Some("ru".to_string()));
    }

    #[test]
    fn test_switch_is_idempotent() {
        let store = MemoryStore::new();
        switch_locale(&store, Locale::Ru);
        switch_locale(&store, Locale::Ru);

        assert_eq!(store.get(PREFERENCE_KEY), Some("ru".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_session_start_resolves_once() {
        let session = LocaleSession::start(MemoryStore::with_entry(PREFERENCE_KEY, "ru"));
        assert_eq!(session.locale(), Locale::Ru);
    }

    #[test]
    fn test_session_switch_returns_new_locale() {
        let mut session = LocaleSession::start(MemoryStore::new());
        assert_eq!(session.switch(Locale::Ru), Locale::Ru);
        assert_eq!(session.switch(Locale::En), Locale::En);
        assert_eq!(session.locale(), Locale::En);
    }

    #[test]
    fn test_every_switch_starts_a_cycle() {
        let mut session = LocaleSession::start(MemoryStore::new());
        assert_eq!(session.cycle(), 0);

        session.switch(Locale::En);
        session.switch(Locale::En);
        assert_eq!(session.cycle(), 2);
        assert_eq!(session.locale(), Locale::En);
    }
}
