//! Light/dark presentation flag.
//!
//! The root `App` owns the current [`Theme`] and hands it to every page as a
//! prop, together with a callback that flips it.

use serde::{Deserialize, Serialize};
use yew::{Callback, Properties};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Modifier class set on section roots, e.g. `section theme-dark`.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn pick<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Theme::Light => light,
            Theme::Dark => dark,
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Props for sections that only need to know the current theme.
#[derive(Properties, PartialEq)]
pub struct ThemeProps {
    pub theme: Theme,
}

/// Props for pages and for sections that host the theme toggle.
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn toggle_flips_and_is_an_involution() {
        let once = Theme::Light.toggle();
        assert_eq!(once, Theme::Dark);
        assert_eq!(once.toggle(), Theme::Light);
    }

    #[test]
    fn pick_follows_theme() {
        assert_eq!(Theme::Light.pick("bg-white", "bg-gray-900"), "bg-white");
        assert_eq!(Theme::Dark.pick("bg-white", "bg-gray-900"), "bg-gray-900");
        assert_eq!(Theme::Dark.class(), "theme-dark");
    }
}
