//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one page; it only composes `components`.

pub mod home;
