//! Shared UI crate for Filmdash: the dashboard logic, components and views used
//! by both the web and desktop launchers.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Dashboard theme shared by every launcher.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same theme as text, for launchers that inline their styles.
pub const THEME_CSS_INLINE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
