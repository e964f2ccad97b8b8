//! Locale-keyed string tables.
//!
//! Page structure is rendered once; all visible copy comes from the Fluent
//! files under `locales/`, embedded at compile time.

use std::sync::LazyLock;

use fluent_bundle::FluentResource;
use fluent_bundle::concurrent::FluentBundle;
use unic_langid::{LanguageIdentifier, langid};

use super::locale::Locale;

const EN_FTL: &str = include_str!("../../locales/en.ftl");
const RU_FTL: &str = include_str!("../../locales/ru.ftl");

type Bundle = FluentBundle<FluentResource>;

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::load);

/// Message ids rendered by the landing templates
pub const MESSAGE_KEYS: &[&str] = &[
    "brand-name",
    "meta-title",
    "meta-description",
    "nav-features",
    "nav-case-study",
    "nav-benefits",
    "nav-roi",
    "nav-master",
    "nav-download",
    "nav-get-plugin",
    "nav-switch-en",
    "nav-switch-ru",
    "nav-toggle-menu",
    "nav-language",
    "hero-title",
    "hero-title-accent",
    "hero-lead",
    "hero-cta-download",
    "hero-cta-more",
    "hero-stat-students",
    "hero-stat-students-value",
    "hero-stat-conversion",
    "hero-stat-conversion-value",
    "hero-stat-funnel",
    "hero-stat-funnel-value",
    "problem-heading",
    "problem-chaos-title",
    "problem-chaos-body",
    "problem-wall-title",
    "problem-wall-body",
    "problem-blind-title",
    "problem-blind-body",
    "solution-heading",
    "solution-autopilot-title",
    "solution-autopilot-body",
    "solution-entry-title",
    "solution-entry-body",
    "solution-clarity-title",
    "solution-clarity-body",
    "testimonial-quote",
    "testimonial-author",
    "testimonial-role",
    "manifesto-lead",
    "manifesto-point",
    "manifesto-claim",
    "manifesto-mindset",
    "stats-role-lead",
    "stats-role-highlight",
    "stats-role-tail",
    "stats-role-result",
    "stats-heading",
    "stats-lead",
    "stats-lead-accent",
    "stats-team-cost",
    "stats-team-meta",
    "stats-team-label",
    "stats-ai-cost",
    "stats-ai-meta",
    "stats-ai-label",
    "story-heading",
    "story-lead-before",
    "story-lead-hours",
    "story-lead-after",
    "story-cost-heading",
    "story-label-time",
    "story-label-cost",
    "story-label-team",
    "story-hiring-title",
    "story-hiring-time",
    "story-hiring-cost",
    "story-hiring-team",
    "story-freelance-title",
    "story-freelance-time",
    "story-freelance-cost",
    "story-freelance-team",
    "story-ai-title",
    "story-ai-time",
    "story-ai-cost",
    "story-ai-team",
    "story-savings",
    "story-ai-did-heading",
    "story-ai-did-1",
    "story-ai-did-2",
    "story-ai-did-3",
    "story-ai-did-4",
    "story-ai-did-5",
    "story-ai-did-6",
    "story-human-did-heading",
    "story-human-did-1",
    "story-human-did-2",
    "story-human-did-3",
    "story-human-did-4",
    "story-closing",
    "story-closing-accent",
    "cta-tool-heading",
    "cta-tool-title",
    "cta-tool-body",
    "cta-tool-button",
    "cta-course-heading",
    "cta-course-title",
    "cta-course-body",
    "cta-course-trial",
    "cta-course-curriculum",
    "footer-github",
    "footer-docs",
    "footer-course",
    "footer-built-with",
    "footer-vibe",
    "notfound-title",
    "notfound-body",
    "notfound-home",
];

/// Both locale bundles
pub struct Catalog {
    en: Bundle,
    ru: Bundle,
}

impl Catalog {
    fn load() -> Self {
        Self {
            en: build_bundle(langid!("en"), EN_FTL),
            ru: build_bundle(langid!("ru"), RU_FTL),
        }
    }

    /// Process-wide catalog, parsed on first use
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn bundle(&self, locale: Locale) -> &Bundle {
        match locale {
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
        }
    }

    /// Formatted message, if the locale's table defines it
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let bundle = self.bundle(locale);
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(%locale, key, ?errors, "message formatted with errors");
        }
        Some(value.into_owned())
    }

    /// Message text with fallback to English, then to the key itself
    pub fn text(&self, locale: Locale, key: &str) -> String {
        if let Some(value) = self.lookup(locale, key) {
            return value;
        }
        tracing::warn!(%locale, key, "missing message");
        if locale != Locale::En {
            if let Some(value) = self.lookup(Locale::En, key) {
                return value;
            }
        }
        key.to_string()
    }

    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.bundle(locale).has_message(key)
    }
}

fn build_bundle(lang: LanguageIdentifier, source: &str) -> Bundle {
    let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(resource, errors)| {
        tracing::warn!(%lang, ?errors, "locale table parsed with errors");
        resource
    });

    let mut bundle = FluentBundle::new_concurrent(vec![lang]);
    // Plain text output, no FSI/PDI marks around placeables
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(?errors, "duplicate messages in locale table");
    }
    bundle
}

/// Copyable message accessor bound to one locale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        Catalog::global().text(self.locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_tables_parse_cleanly() {
        for source in [EN_FTL, RU_FTL] {
            assert!(FluentResource::try_new(source.to_string()).is_ok());
        }
    }

    #[test]
    fn test_every_key_defined_in_both_locales() {
        let catalog = Catalog::global();
        for locale in Locale::ALL {
            for key in MESSAGE_KEYS {
                assert!(catalog.has_message(locale, key), "{locale}: {key}");
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys = MESSAGE_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MESSAGE_KEYS.len());
    }

    #[test]
    fn test_prose_differs_between_locales() {
        let en = Messages::new(Locale::En);
        let ru = Messages::new(Locale::Ru);
        for key in ["hero-title", "problem-heading", "nav-features", "cta-tool-button"] {
            assert_ne!(en.t(key), ru.t(key), "{key}");
        }
    }

    #[test]
    fn test_known_values() {
        let catalog = Catalog::global();
        assert_eq!(
            catalog.lookup(Locale::En, "problem-heading").as_deref(),
            Some("The WordPress Growth Trap")
        );
        assert_eq!(
            catalog.lookup(Locale::Ru, "nav-features").as_deref(),
            Some("Возможности")
        );
    }

    #[test]
    fn test_text_has_no_isolation_marks() {
        let text = Messages::new(Locale::En).t("stats-team-cost");
        assert_eq!(text, "$86,000");
        assert!(!text.contains('\u{2068}'));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Catalog::global();
        assert!(catalog.lookup(Locale::Ru, "no-such-message").is_none());
        assert_eq!(catalog.text(Locale::Ru, "no-such-message"), "no-such-message");
    }

    #[test]
    fn test_messages_accessor_keeps_locale() {
        let messages = Messages::new(Locale::Ru);
        assert_eq!(messages.locale(), Locale::Ru);
        assert_eq!(messages.t("brand-name"), "Supabase WordPress Bridge");
    }
}
