#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::storage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, always inlined so packaged builds need no asset folder.

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).ok();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Painel – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).ok();
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[component]
fn Home() -> Element {
    let nav = navigator();
    rsx! {
        ui::views::Home {
            on_open_dashboard: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}

#[component]
fn Dashboard() -> Element {
    // Read once per mount; the export is owned by the submission pipeline.
    let reports = use_hook(storage::load_reports_or_none);
    let nav = navigator();

    let on_back = move |_: ()| {
        info!("back to the form requested");
        nav.push(Route::Home {});
    };

    match reports {
        Some(reports) => rsx! { ui::views::Dashboard { reports, on_back } },
        None => rsx! { ui::views::Dashboard { on_back } },
    }
}

/// A desktop-specific layout around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
