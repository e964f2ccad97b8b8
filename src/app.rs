use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::{Locale, MOUNT_TARGET_ID, Messages, PreferenceStore};
use crate::ui::{BrowserStorage, LandingPage, NotFoundPage, provide_locale_context};

/// Static hosting document: the wasm bundle mounts into `#root`.
///
/// Rendered once at startup and served for every page route.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions, canonical_url: Option<String>) -> impl IntoView {
    let pkg = format!("/{}/{}", options.site_pkg_dir, options.output_name);
    let stylesheet = format!("{pkg}.css");
    let loader = format!("import init from '{pkg}.js'; init({{ module_or_path: '{pkg}.wasm' }});");
    let m = Messages::new(Locale::default());

    view! {
        <!DOCTYPE html>
        <html lang=Locale::default().code()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{m.t("meta-title")}</title>
                <meta name="description" content=m.t("meta-description")/>
                {canonical_url.map(|url| view! { <link rel="canonical" href=url/> })}
                <link rel="icon" type="image/svg+xml" href="/icons/database.svg"/>
                <link rel="stylesheet" href=stylesheet/>
                <script type="module" inner_html=loader></script>
            </head>
            <body>
                <div id=MOUNT_TARGET_ID></div>
            </body>
        </html>
    }
}

/// Render the hosting document to a string
#[cfg(feature = "ssr")]
pub fn render_shell(options: LeptosOptions, canonical_url: Option<String>) -> String {
    Owner::new().with(|| shell(options, canonical_url).to_html())
}

#[component]
pub fn App() -> impl IntoView {
    view! { <Site store=Arc::new(BrowserStorage) /> }
}

/// Site root over the given preference store
#[component]
pub fn Site(store: Arc<dyn PreferenceStore>) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let ctx = provide_locale_context(store);

    // Every locale switch tears the whole tree down and renders it again
    ctx.remount(|locale| view! { <LocalizedSite locale=locale /> })
}

#[component]
fn LocalizedSite(locale: Locale) -> impl IntoView {
    let m = Messages::new(locale);

    view! {
        <Title text=m.t("meta-title")/>
        <Meta name="description" content=m.t("meta-description")/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
