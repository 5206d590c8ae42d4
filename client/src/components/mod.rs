//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the static content sections. Only the
//! theme toggle reads shared state, through the `ThemeContext` provider.

pub mod about_section;
pub mod articles_section;
pub mod career_section;
pub mod footer;
pub mod header;
pub mod links_section;
pub mod projects_section;
pub mod section;
pub mod theme_toggle;
