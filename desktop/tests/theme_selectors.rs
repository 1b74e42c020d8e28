#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components emit these class names; if a refactor of
`ui/assets/theme/main.css` drops one, the packaged desktop build silently
loses that styling. When renaming a selector, update the component markup
and `REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dashboard layout
    ".dashboard__header",
    ".dashboard__title",
    ".dashboard__back-icon",
    ".dashboard__grid",
    ".dashboard__empty",
    ".dashboard__empty-icon",
    ".dashboard__coming-soon",
    // Stat cards
    ".stat-card {",
    ".stat-card__body",
    ".stat-card__icon",
    ".stat-card__title",
    ".stat-card__value",
    ".stat-card--red",
    ".stat-card--purple",
    ".stat-card--green",
    ".stat-card--blue",
    ".stat-card--yellow",
    ".stat-card--teal",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{:?}",
        missing.len(),
        missing
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or path change?"
    );
}
