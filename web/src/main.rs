use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::storage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
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
    // localStorage is read once per mount.
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

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_shared_layout() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
    }
}
