//! Shared UI crate for OKR Board: the upload → dashboard session flow, the
//! report renderer and every component the platform launchers mount.

pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    // Brand bar + locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
