//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `theme` is the framework-free state machine, `theme_context` binds it to
//! Leptos reactivity, and `content` holds the static records the page renders.

pub mod content;
pub mod theme;
pub mod theme_context;
