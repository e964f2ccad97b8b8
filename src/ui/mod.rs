#[cfg(any(feature = "csr", test))]
pub mod console;
pub mod icon;
pub mod locale;
#[cfg(feature = "csr")]
pub mod mount;
pub mod pages;
pub mod reveal;

pub use icon::{Icon, icons};
pub use locale::{
    BrowserStorage, LocaleContext, provide_locale_context, use_locale_context, use_messages,
};
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::Reveal;
