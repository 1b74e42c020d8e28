use dioxus::prelude::*;

use super::icon::{Icon, IconKind};

/// Left-border accent of a stat tile. Also tints the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Purple,
    Green,
    Blue,
    Yellow,
    Teal,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Purple => "purple",
            Accent::Green => "green",
            Accent::Blue => "blue",
            Accent::Yellow => "yellow",
            Accent::Teal => "teal",
        }
    }

    /// Modifier class, e.g. `stat-card--teal`.
    pub fn css_class(self) -> String {
        format!("stat-card--{}", self.name())
    }
}

/// A single metric tile: icon, title and value.
#[component]
pub fn StatCard(icon: IconKind, title: String, value: String, accent: Accent) -> Element {
    rsx! {
        div { class: "stat-card {accent.css_class()}",
            div { class: "stat-card__body",
                div { class: "stat-card__icon",
                    Icon { kind: icon }
                }
                div { class: "stat-card__text",
                    p { class: "stat-card__title", "{title}" }
                    p { class: "stat-card__value", "{value}" }
                }
            }
        }
    }
}
