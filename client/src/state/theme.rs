//! Light/dark theme state machine.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the current `Theme` and reports every change to a
//! single `ThemeObserver`. The production observer, `ThemeEffect`, writes the
//! value to a `PreferenceStore` and flips the matching flag on a
//! `PresentationSink`. Browser bindings for those seams live in
//! `util::dark_mode`; tests use in-memory fakes.
//!
//! LIFECYCLE
//! =========
//! created (`light`, no effects) -> `initialize` (persisted value, then system
//! preference, then default; effect runs once) -> `toggle` (effect runs on
//! every change).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Key under which the theme is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Glyph shown for a value that is not a known theme.
pub const FALLBACK_ICON: &str = "🌓";

/// Presentation mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Fixed toggle order.
    pub const CYCLE: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Serialized form used for storage and as the document class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class name set on the document root while this theme is active.
    pub fn flag(self) -> &'static str {
        self.as_str()
    }

    /// The value following `self` in [`Theme::CYCLE`], wrapping around.
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|t| *t == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }

    /// Short label shown next to the toggle icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Mode name used in the toggle tooltip.
    pub fn mode_name(self) -> &'static str {
        match self {
            Self::Light => "ライト",
            Self::Dark => "ダーク",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Icon for a raw, possibly invalid theme value.
pub fn icon_for(raw: &str) -> &'static str {
    raw.parse::<Theme>().map_or(FALLBACK_ICON, Theme::icon)
}

/// Durable string key-value storage.
///
/// Implementations swallow their own failures: an unavailable store reads as
/// empty and ignores writes.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Global style-flag surface (class names on the document root).
pub trait PresentationSink {
    fn clear_flag(&self, name: &str);
    fn set_flag(&self, name: &str);
}

/// Environment hint for the preferred color scheme.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Receives exactly one notification per theme change.
pub trait ThemeObserver {
    fn on_theme_change(&mut self, theme: Theme);
}

/// Pick the starting theme: a valid persisted value wins, then the system
/// preference, then the default.
///
/// The signal is only consulted when nothing valid is persisted.
pub fn resolve(persisted: Option<&str>, signal: &impl ColorSchemeSignal) -> Theme {
    if let Some(theme) = persisted.and_then(|raw| raw.parse::<Theme>().ok()) {
        return theme;
    }
    if signal.prefers_dark() { Theme::Dark } else { Theme::default() }
}

/// Persists the theme and keeps exactly one presentation flag active.
#[derive(Debug, Clone)]
pub struct ThemeEffect<S, P> {
    store: S,
    sink: P,
}

impl<S: PreferenceStore, P: PresentationSink> ThemeEffect<S, P> {
    pub fn new(store: S, sink: P) -> Self {
        Self { store, sink }
    }

    /// Write `theme` to the store, then swap the presentation flag.
    pub fn apply(&self, theme: Theme) {
        self.store.write(STORAGE_KEY, theme.as_str());
        for other in Theme::CYCLE.iter().filter(|t| **t != theme) {
            self.sink.clear_flag(other.flag());
        }
        self.sink.set_flag(theme.flag());
    }
}

impl<S: PreferenceStore, P: PresentationSink> ThemeObserver for ThemeEffect<S, P> {
    fn on_theme_change(&mut self, theme: Theme) {
        self.apply(theme);
    }
}

/// Owner of the current theme.
#[derive(Debug, Clone)]
pub struct ThemeController<O> {
    theme: Theme,
    initialized: bool,
    observer: O,
}

impl<O: ThemeObserver> ThemeController<O> {
    /// Create a controller holding the provisional default. No effects run
    /// until [`ThemeController::initialize`].
    pub fn new(observer: O) -> Self {
        Self { theme: Theme::default(), initialized: false, observer }
    }

    /// Resolve the starting theme from `store` and `signal` and notify the
    /// observer. Only the first call has any effect.
    pub fn initialize(&mut self, store: &impl PreferenceStore, signal: &impl ColorSchemeSignal) -> Theme {
        if self.initialized {
            log::debug!("theme already initialized as {}", self.theme);
            return self.theme;
        }
        self.initialized = true;
        let persisted = store.read(STORAGE_KEY);
        let theme = resolve(persisted.as_deref(), signal);
        log::debug!("theme resolved to {theme} (persisted: {persisted:?})");
        self.set(theme);
        theme
    }

    /// Advance to the next theme in the cycle and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.next();
        log::debug!("theme toggled {} -> {next}", self.theme);
        self.set(next);
        next
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn current_icon(&self) -> &'static str {
        self.theme.icon()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.observer.on_theme_change(theme);
    }
}
