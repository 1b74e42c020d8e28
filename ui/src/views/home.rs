use dioxus::prelude::*;

#[component]
pub fn Home(on_open_dashboard: EventHandler) -> Element {
    crate::i18n::init();

    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__cta",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_open_dashboard.call(()),
                    {crate::t!("home-cta")}
                }
            }
        }
    }
}
