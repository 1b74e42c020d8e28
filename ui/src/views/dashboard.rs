use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{Accent, Icon, IconKind, StatCard};
use crate::core::{metrics, AggregateMetrics, Metric, Report};
use crate::t;

/// Activity dashboard.
///
/// With `reports` it shows totals over the validated subset, or an empty
/// state when nothing is validated yet. Without `reports` it shows the fixed
/// sample figures.
#[component]
pub fn Dashboard(on_back: EventHandler, reports: Option<Vec<Report>>) -> Element {
    crate::i18n::init();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let totals = match reports.as_deref() {
        None => {
            debug!("dashboard render: sample figures");
            Some(AggregateMetrics::SAMPLE)
        }
        Some(reports) => {
            let validated = metrics::validated(reports).count();
            debug!(total = reports.len(), validated, "dashboard render: live figures");
            (validated > 0).then(|| AggregateMetrics::from_reports(reports))
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            div { class: "dashboard__header",
                h1 { class: "dashboard__title", {t!("dashboard-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost dashboard__back",
                    onclick: move |_| on_back.call(()),
                    Icon { kind: IconKind::ArrowLeft, class: "dashboard__back-icon".to_string() }
                    {t!("dashboard-back")}
                }
            }

            match totals {
                Some(totals) => rsx! {
                    div { class: "dashboard__grid",
                        for (metric, value) in totals.entries() {
                            StatCard {
                                key: "{metric:?}",
                                icon: metric_icon(metric),
                                title: metric_title(metric),
                                value: value.to_string(),
                                accent: metric_accent(metric),
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "dashboard__empty",
                        Icon { kind: IconKind::CheckCircle, class: "dashboard__empty-icon".to_string() }
                        h2 { {t!("dashboard-empty-title")} }
                        p { {t!("dashboard-empty-hint")} }
                    }
                },
            }

            div { class: "dashboard__coming-soon",
                h2 { {t!("dashboard-coming-soon-title")} }
                p { {t!("dashboard-coming-soon-body")} }
            }
        }
    }
}

pub fn metric_title(metric: Metric) -> String {
    match metric {
        Metric::Conversions => t!("metric-conversions"),
        Metric::Students => t!("metric-students"),
        Metric::Enrollments => t!("metric-enrollments"),
        Metric::Evangelisms => t!("metric-evangelisms"),
        Metric::Blessings => t!("metric-blessings"),
        Metric::Baptisms => t!("metric-baptisms"),
    }
}

pub fn metric_icon(metric: Metric) -> IconKind {
    match metric {
        Metric::Conversions => IconKind::Heart,
        Metric::Students => IconKind::Users,
        Metric::Enrollments => IconKind::GraduationCap,
        Metric::Evangelisms => IconKind::ClipboardList,
        Metric::Blessings => IconKind::Gift,
        Metric::Baptisms => IconKind::CheckCircle,
    }
}

pub fn metric_accent(metric: Metric) -> Accent {
    match metric {
        Metric::Conversions => Accent::Red,
        Metric::Students => Accent::Purple,
        Metric::Enrollments => Accent::Green,
        Metric::Evangelisms => Accent::Blue,
        Metric::Blessings => Accent::Yellow,
        Metric::Baptisms => Accent::Teal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_table_is_fixed() {
        let table: Vec<(&str, &str)> = Metric::ALL
            .iter()
            .map(|&m| (metric_icon(m).name(), metric_accent(m).name()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("heart", "red"),
                ("users", "purple"),
                ("graduation-cap", "green"),
                ("clipboard-list", "blue"),
                ("gift", "yellow"),
                ("check-circle", "teal"),
            ]
        );
    }
}
