//! Not found page component
//!
//! Shown for any client-side path other than `/`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_messages;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let m = use_messages();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-50 via-slate-50 to-teal-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/80 rounded-full flex items-center justify-center shadow-lg">
                    <Icon name=icons::DATABASE class="w-12 h-12" />
                </div>

                // Error code
                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-900 mb-2">{m.t("notfound-title")}</h2>

                <p class="text-slate-600 mb-8 max-w-md mx-auto">{m.t("notfound-body")}</p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 text-white font-medium rounded-lg transition-colors"
                >
                    {m.t("notfound-home")}
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::core::{Locale, MemoryStore, Messages, PREFERENCE_KEY};
    use crate::ui::locale::provide_locale_context;

    fn render(locale: Locale) -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new("/missing"));
            let store = MemoryStore::with_entry(PREFERENCE_KEY, locale.code());
            provide_locale_context(Arc::new(store));
            view! {
                <Router>
                    <NotFoundPage />
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn test_not_found_is_localized() {
        for locale in Locale::ALL {
            let html = render(locale);
            let m = Messages::new(locale);

            assert!(html.contains(&m.t("notfound-title")), "{locale}");
            assert!(html.contains(&m.t("notfound-home")), "{locale}");
            assert!(html.contains("404"));
        }
    }

    #[test]
    fn test_not_found_links_home() {
        let html = render(Locale::En);
        assert!(html.contains("href=\"/\""));
    }
}
