//! Browser bindings kept apart from the framework-free state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` implements the theme seams over `localStorage`, the root
//! element's class list and the color-scheme media query.

pub mod dark_mode;
