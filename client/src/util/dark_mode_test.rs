#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{STORAGE_KEY, Theme, ThemeController, ThemeEffect};

#[test]
fn local_storage_reads_nothing_outside_browser() {
    LocalStorage.write(STORAGE_KEY, "dark");
    assert_eq!(LocalStorage.read(STORAGE_KEY), None);
}

#[test]
fn system_scheme_is_light_outside_browser() {
    assert!(!SystemColorScheme.prefers_dark());
}

#[test]
fn document_classes_are_noop_but_callable() {
    DocumentClasses.set_flag("dark");
    DocumentClasses.clear_flag("dark");
}

#[test]
fn browser_controller_falls_back_to_light() {
    let mut ctrl = ThemeController::new(ThemeEffect::new(LocalStorage, DocumentClasses));
    assert_eq!(ctrl.initialize(&LocalStorage, &SystemColorScheme), Theme::Light);
    assert_eq!(ctrl.toggle(), Theme::Dark);
}
