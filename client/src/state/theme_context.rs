//! Reactive handle that carries the theme controller through the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component installs one `ThemeContext`; components read the current
//! theme through its signal and route clicks to `toggle`. Resolution happens in
//! a mount effect, so server-rendered markup always starts from the default.

#[cfg(test)]
#[path = "theme_context_test.rs"]
mod theme_context_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeController, ThemeEffect};
use crate::util::dark_mode::{DocumentClasses, LocalStorage, SystemColorScheme};

/// Controller bound to the browser storage and document root.
pub type BrowserThemeController = ThemeController<ThemeEffect<LocalStorage, DocumentClasses>>;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    controller: StoredValue<BrowserThemeController>,
}

impl ThemeContext {
    fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            controller: StoredValue::new(ThemeController::new(ThemeEffect::new(LocalStorage, DocumentClasses))),
        }
    }

    /// Provide a fresh context to the current owner and schedule the one-time
    /// resolution after mount.
    pub fn install() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        Effect::new(move || ctx.initialize());
        ctx
    }

    /// Resolve the stored or system preference. Repeated calls are ignored.
    pub fn initialize(&self) {
        let mut resolved = Theme::default();
        self.controller
            .update_value(|c| resolved = c.initialize(&LocalStorage, &SystemColorScheme));
        self.theme.set(resolved);
    }

    /// Switch to the other theme. Ignored until the context is initialized.
    pub fn toggle(&self) {
        let mut next = None;
        self.controller.update_value(|c| {
            if c.is_initialized() {
                next = Some(c.toggle());
            }
        });
        if let Some(theme) = next {
            self.theme.set(theme);
        }
    }

    /// Current theme; tracked when read inside a reactive scope.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Icon for the current theme; tracked like [`ThemeContext::theme`].
    pub fn icon(&self) -> &'static str {
        self.theme.track();
        self.controller.with_value(BrowserThemeController::current_icon)
    }
}
