//! Locale context module for the language switch
//!
//! Provides:
//! - BrowserStorage, the localStorage-backed preference store
//! - LocaleContext for the reactive locale of the current render cycle
//! - `<html lang>` kept in sync with the mounted locale

use std::sync::Arc;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos::web_sys;

use crate::core::{Locale, LocaleSession, Messages, PreferenceStore, StorageError};

/// Preference store over `window.localStorage`.
///
/// Looks the storage up on every call, so it holds no JS handles and can
/// live in reactive context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| {
            leptos::logging::warn!("localStorage write failed: {err:?}");
            StorageError::Write(format!("{err:?}"))
        })
    }
}

// Server builds never render the app, but the type must exist for them.
#[cfg(not(feature = "csr"))]
impl PreferenceStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Locale context for the mounted document
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Locale of the current render cycle; every change remounts the tree
    pub locale: RwSignal<Locale>,
    session: StoredValue<LocaleSession<Arc<dyn PreferenceStore>>>,
}

impl LocaleContext {
    /// Persist `target` and restart the render cycle.
    ///
    /// The new locale is whatever the store resolves to afterwards, so a
    /// failed write keeps the previous locale. The signal is always set,
    /// which remounts the tree even when the locale did not change.
    pub fn switch(&self, target: Locale) {
        let mut next = Locale::default();
        self.session
            .update_value(|session| next = session.switch(target));
        self.locale.set(next);
    }

    /// Render cycles started since the context was provided
    pub fn cycle(&self) -> u32 {
        self.session.with_value(|session| session.cycle())
    }

    /// Render `page` for the mounted locale.
    ///
    /// Every switch disposes the rendered tree and calls `page` again, the
    /// way a page load would start from scratch.
    pub fn remount<V>(self, page: impl Fn(Locale) -> V + Send + Sync + 'static) -> impl IntoView
    where
        V: IntoView + 'static,
    {
        move || page(self.locale.get())
    }

    /// Messages for the current cycle (read once per mount)
    pub fn messages(&self) -> Messages {
        Messages::new(self.locale.get_untracked())
    }
}

/// Resolve the initial locale from `store` and provide the context
pub fn provide_locale_context(store: Arc<dyn PreferenceStore>) -> LocaleContext {
    let session = LocaleSession::start(store);
    let locale = RwSignal::new(session.locale());

    let ctx = LocaleContext {
        locale,
        session: StoredValue::new(session),
    };

    // Keep <html lang> in step with the mounted locale
    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        apply_document_lang(locale.get());
    });

    provide_context(ctx);

    ctx
}

#[cfg(feature = "csr")]
fn apply_document_lang(locale: Locale) {
    if let Some(html) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = html.set_attribute("lang", locale.code());
    }
}

/// Use locale context from anywhere in the component tree
pub fn use_locale_context() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}

/// Messages of the mounted locale
pub fn use_messages() -> Messages {
    use_locale_context().messages()
}
