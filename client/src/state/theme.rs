//! Light/dark theme preference and the assets each theme selects.
//!
//! The preference is persisted as the literal `"dark"` or `"light"`; anything
//! else reads back as [`Theme::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key shared with the search page.
pub const STORAGE_KEY: &str = "theme_pref_v1";

/// Class set on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

const PRISM_LIGHT: &str = "https://cdn.jsdelivr.net/npm/prismjs@1.30.0/themes/prism.css";
const PRISM_DARK: &str = "https://cdn.jsdelivr.net/npm/prismjs@1.30.0/themes/prism-okaidia.css";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; absent or unrecognized values are `Light`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon on the theme button: it shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "/assets/moon-icon.svg",
            Self::Dark => "/assets/sun-icon.svg",
        }
    }

    pub fn toggle_tooltip(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Syntax-highlighting stylesheet matching the theme.
    pub fn highlight_stylesheet(self) -> &'static str {
        match self {
            Self::Light => PRISM_LIGHT,
            Self::Dark => PRISM_DARK,
        }
    }

    pub fn copy_icon(self) -> &'static str {
        match self {
            Self::Light => "/assets/copy-icon-modo-claro.svg",
            Self::Dark => "/assets/copy-icon-modo-oscuro.svg",
        }
    }

    pub fn tick_icon(self) -> &'static str {
        match self {
            Self::Light => "/assets/tick-icon-modo-claro.svg",
            Self::Dark => "/assets/tick-icon-modo-oscuro.svg",
        }
    }
}
