use dioxus::prelude::*;

/// Outline icons used by the dashboard. Paths are 24×24, stroke-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Heart,
    Users,
    GraduationCap,
    ClipboardList,
    Gift,
    CheckCircle,
    ArrowLeft,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Heart => "heart",
            IconKind::Users => "users",
            IconKind::GraduationCap => "graduation-cap",
            IconKind::ClipboardList => "clipboard-list",
            IconKind::Gift => "gift",
            IconKind::CheckCircle => "check-circle",
            IconKind::ArrowLeft => "arrow-left",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Heart => &[
                "M21 8.25c0-2.485-2.099-4.5-4.688-4.5-1.935 0-3.597 1.126-4.312 2.733-.715-1.607-2.377-2.733-4.313-2.733C5.1 3.75 3 5.765 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12z",
            ],
            IconKind::Users => &[
                "M15 19.128a9.38 9.38 0 002.625.372 9.337 9.337 0 004.121-.952 4.125 4.125 0 00-7.533-2.493",
                "M15 19.128v-.003c0-1.113-.285-2.16-.786-3.07M15 19.128v.106A12.318 12.318 0 018.624 21c-2.331 0-4.512-.645-6.374-1.766l-.001-.109a6.375 6.375 0 0111.964-3.07",
                "M12 6.375a3.375 3.375 0 11-6.75 0 3.375 3.375 0 016.75 0zm8.25 2.25a2.625 2.625 0 11-5.25 0 2.625 2.625 0 015.25 0z",
            ],
            IconKind::GraduationCap => &[
                "M4.26 10.147a60.436 60.436 0 00-.491 6.347A48.627 48.627 0 0112 20.904a48.627 48.627 0 018.232-4.41 60.46 60.46 0 00-.491-6.347",
                "M4.26 10.147a50.57 50.57 0 00-2.658-.813A59.905 59.905 0 0112 3.493a59.902 59.902 0 0110.399 5.84c-.896.248-1.783.52-2.658.814m-15.482 0A50.697 50.697 0 0112 13.489a50.702 50.702 0 017.74-3.342",
            ],
            IconKind::ClipboardList => &[
                "M9 12h3.75M9 15h3.75M9 18h3.75m3 .75H18a2.25 2.25 0 002.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 00-1.123-.08",
                "M15.75 18H18M8.25 8.25H4.875c-.621 0-1.125.504-1.125 1.125v11.25c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V9.375c0-.621-.504-1.125-1.125-1.125H8.25z",
                "M6.75 12h.008v.008H6.75V12zm0 3h.008v.008H6.75V15zm0 3h.008v.008H6.75V18z",
            ],
            IconKind::Gift => &[
                "M21 11.25v8.25a1.5 1.5 0 01-1.5 1.5H5.25a1.5 1.5 0 01-1.5-1.5v-8.25M12 4.875A2.625 2.625 0 109.375 7.5H12m0-2.625V7.5m0-2.625A2.625 2.625 0 1114.625 7.5H12m0 0V21",
                "M3.375 7.5h17.25c.621 0 1.125.504 1.125 1.125v1.5c0 .621-.504 1.125-1.125 1.125H3.375A1.125 1.125 0 012.25 10.125v-1.5c0-.621.504-1.125 1.125-1.125z",
            ],
            IconKind::CheckCircle => &["M9 12.75L11.25 15 15 9.75M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            IconKind::ArrowLeft => &["M10.5 19.5L3 12m0 0l7.5-7.5M3 12h18"],
        }
    }
}

/// Inline SVG icon. `class` carries sizing and tint from the caller.
#[component]
pub fn Icon(kind: IconKind, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon icon--{kind.name()} {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            "aria-hidden": "true",
            for d in kind.paths().iter() {
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: "{d}",
                }
            }
        }
    }
}
