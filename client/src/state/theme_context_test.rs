#![cfg(not(feature = "hydrate"))]

use super::*;

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.set();
    test();
}

// =============================================================
// Before initialization
// =============================================================

#[test]
fn toggle_before_initialize_keeps_light() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(ctx.icon(), "☀️");
    });
}

// =============================================================
// After initialization
// =============================================================

#[test]
fn initialize_resolves_default_outside_browser() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.initialize();
        assert_eq!(ctx.theme(), Theme::Light);
    });
}

#[test]
fn toggle_after_initialize_updates_signal_and_icon() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.initialize();
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(ctx.icon(), "🌙");
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
    });
}

#[test]
fn second_initialize_keeps_toggled_theme() {
    with_owner(|| {
        let ctx = ThemeContext::new();
        ctx.initialize();
        ctx.toggle();
        ctx.initialize();
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(ctx.icon(), "🌙");
    });
}
