//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, debouncing, status
//! changes) and delegates rendering details to `components`.

pub mod detail;
pub mod home;
pub mod overview;
pub mod search;
pub mod viewport_demo;
