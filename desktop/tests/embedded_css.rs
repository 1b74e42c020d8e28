#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! A broken path or truncated file would only show up as an unstyled window,
//! so check it here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_defines_accent_palette() {
    for color in ["red", "purple", "green", "blue", "yellow", "teal"] {
        let token = format!("--accent-{color}");
        assert!(
            EMBEDDED_CSS.contains(&token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
