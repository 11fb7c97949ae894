//! Built-in color themes
//!
//! Two fixed palettes modeled on GitHub's dark and light UI colors. Theme
//! data is immutable static records; resolution is a total lookup with a
//! fallback to the dark palette for unrecognized names.

/// Fixed color palette for a rendered diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub folder_bg: &'static str,
    pub folder_border: &'static str,
    pub file_bg: &'static str,
    pub file_border: &'static str,
    pub line: &'static str,
    pub dot: &'static str,
    pub dot_stroke: &'static str,
    pub title_text: &'static str,
}

/// GitHub dark palette (default)
pub static GITHUB_DARK: Theme = Theme {
    background: "#0d1117",
    card_bg: "#161b22",
    card_border: "#30363d",
    text: "#c9d1d9",
    text_muted: "#8b949e",
    folder_bg: "#1f6feb",
    folder_border: "#58a6ff",
    file_bg: "#238636",
    file_border: "#3fb950",
    line: "#30363d",
    dot: "#58a6ff",
    dot_stroke: "#1f6feb",
    title_text: "#f0f6fc",
};

/// GitHub light palette
pub static GITHUB_LIGHT: Theme = Theme {
    background: "#ffffff",
    card_bg: "#f6f8fa",
    card_border: "#d0d7de",
    text: "#24292f",
    text_muted: "#57606a",
    folder_bg: "#0969da",
    folder_border: "#0969da",
    file_bg: "#1a7f37",
    file_border: "#1a7f37",
    line: "#d0d7de",
    dot: "#0969da",
    dot_stroke: "#0969da",
    title_text: "#24292f",
};

/// Resolve a theme name to its palette.
///
/// Only `"github-light"` selects the light palette; every other name,
/// including `"github-dark"` and unknown input, resolves to the dark
/// palette. Callers relying on the fallback get the default theme rather
/// than an error.
pub fn resolve(name: &str) -> &'static Theme {
    if name == "github-light" {
        &GITHUB_LIGHT
    } else {
        &GITHUB_DARK
    }
}
