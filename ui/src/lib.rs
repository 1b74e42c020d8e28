//! Shared UI crate for Painel. Views, components and report aggregation live
//! here; the platform crates only add routing and launch glue.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod icon;
    pub use icon::{Icon, IconKind};

    mod stat_card;
    pub use stat_card::{Accent, StatCard};
}
