//! Attaches the app to the hosting document.

use leptos::web_sys;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::core::{MOUNT_TARGET_ID, MountError};

/// Mount `App` into the `#root` element, replacing its placeholder content.
///
/// Fails when the element is missing; the caller treats that as fatal.
pub fn mount_app() -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;

    let target = document
        .get_element_by_id(MOUNT_TARGET_ID)
        .ok_or(MountError::MissingTarget(MOUNT_TARGET_ID))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotAnElement(MOUNT_TARGET_ID))?;

    target.set_inner_html("");
    leptos::mount::mount_to(target, App).forget();

    leptos::logging::log!("mounted into #{}", MOUNT_TARGET_ID);
    Ok(())
}
