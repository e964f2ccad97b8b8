//! Locale selection, string tables and the landing document outline

#[cfg(feature = "ssr")]
pub mod config;
pub mod document;
mod error;
pub mod locale;
pub mod messages;
pub mod storage;

pub use document::{Anchor, MOUNT_TARGET_ID, SECTION_ORDER, SectionKind};
pub use error::{MountError, StorageError};
pub use locale::{Locale, LocaleSession, PREFERENCE_KEY, resolve, switch_locale};
pub use messages::{Catalog, Messages};
pub use storage::{MemoryStore, PreferenceStore};
