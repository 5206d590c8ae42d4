//! Browser bindings for the theme seams.
//!
//! `LocalStorage` persists the preference in `window.localStorage`,
//! `DocumentClasses` toggles class names on the `<html>` element and
//! `SystemColorScheme` reads `prefers-color-scheme`. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! The three adapters are stateless unit structs that look up the window on
//! every call, so the controller holding them stays `Send + Sync`. Without
//! `hydrate` there is no window: reads come back empty, class-list and storage
//! writes are dropped, and the server always renders the light theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{ColorSchemeSignal, PreferenceStore, PresentationSink};

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// Class list of the document root element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentClasses;

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemColorScheme;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::debug!("localStorage unavailable");
    }
    storage
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::debug!("localStorage rejected write of {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

impl PresentationSink for DocumentClasses {
    fn clear_flag(&self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let _ = el.class_list().remove_1(name);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }

    fn set_flag(&self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let _ = el.class_list().add_1(name);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }
}

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}
