//! # client
//!
//! Leptos CSR frontend for the case service: a dashboard of the user's own
//! cases, a drag-and-drop kanban overview, search, a case detail view, and a
//! viewport demo.
//!
//! Board logic lives in the `board` crate and viewport classification in the
//! `viewport` crate; this crate renders them and supplies the browser side:
//! the `gloo-net` transport, the window resize hook, and drag data transfer.
//! Everything touching browser APIs is behind the `csr` feature so the rest
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install logging and the panic hook, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
