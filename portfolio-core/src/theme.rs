//! Colour theme and the presentational values derived from it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Seeds the theme from the ambient `prefers-color-scheme: light` query.
    pub fn from_ambient(prefers_light: bool) -> Self {
        if prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                root: "theme-dark",
                accent: "accent-green",
                spotlight: "rgba(51, 255, 0, 0.15)",
                backdrop: "backdrop-grid",
                toggle_icon: crate::content::Icon::Sun,
                hero_opacity: "0.3",
            },
            Theme::Light => Palette {
                root: "theme-light",
                accent: "accent-blue",
                spotlight: "rgba(37, 99, 235, 0.15)",
                backdrop: "backdrop-dots",
                toggle_icon: crate::content::Icon::Moon,
                hero_opacity: "0.1",
            },
        }
    }
}

/// Every theme-dependent value the page reads. Colours themselves live in
/// the stylesheet under the `root` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub root: &'static str,
    pub accent: &'static str,
    pub spotlight: &'static str,
    pub backdrop: &'static str,
    pub toggle_icon: crate::content::Icon,
    pub hero_opacity: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_seed() {
        assert_eq!(Theme::from_ambient(true), Theme::Light);
        assert_eq!(Theme::from_ambient(false), Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_palette() {
        for theme in [Theme::Dark, Theme::Light] {
            let before = theme.palette();
            let after = theme.toggled().toggled().palette();
            assert_eq!(before, after);
            assert_ne!(before, theme.toggled().palette());
        }
    }
}
