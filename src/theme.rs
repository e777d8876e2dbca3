use dioxus::prelude::*;

/// The two fixed modes a switch can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// A named theme. The name doubles as the `data-theme` value the stylesheet
/// keys its variable sets on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
}

pub const LIGHT_THEME: Theme = Theme {
    name: "light-theme",
};
pub const DARK_THEME: Theme = Theme { name: "dark-theme" };

/// Shared theme state. The UI reads the current theme and requests switches,
/// it never swaps the theme in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    current_theme: Theme,
}

impl ThemeState {
    /// Restores a saved theme name. Anything that is not `light-theme` falls
    /// back to the dark theme.
    pub fn from_saved(name: &str) -> Self {
        let current_theme = if name == LIGHT_THEME.name {
            LIGHT_THEME
        } else {
            DARK_THEME
        };
        Self { current_theme }
    }

    pub fn current_theme(&self) -> &Theme {
        &self.current_theme
    }

    /// The mode a toggle should request next: `Light` while the dark theme
    /// is active, `Dark` for any other theme.
    pub fn toggle_target(&self) -> ThemeMode {
        if self.current_theme.name == DARK_THEME.name {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn change_theme(&mut self, mode: ThemeMode) {
        self.current_theme = match mode {
            ThemeMode::Light => LIGHT_THEME,
            ThemeMode::Dark => DARK_THEME,
        };
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            current_theme: DARK_THEME,
        }
    }
}

pub fn use_themes() -> Signal<ThemeState> {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_requests_light() {
        let themes = ThemeState::from_saved("dark-theme");
        assert_eq!(themes.toggle_target(), ThemeMode::Light);
    }

    #[test]
    fn any_other_theme_requests_dark() {
        assert_eq!(
            ThemeState::from_saved("light-theme").toggle_target(),
            ThemeMode::Dark
        );
    }

    #[test]
    fn unrecognized_saved_name_falls_back_to_dark() {
        let themes = ThemeState::from_saved("solarized");
        assert_eq!(themes.current_theme().name, "dark-theme");
    }

    #[test]
    fn change_theme_applies_the_requested_mode() {
        let mut themes = ThemeState::default();
        themes.change_theme(ThemeMode::Light);
        assert_eq!(themes.current_theme().name, "light-theme");
        themes.change_theme(ThemeMode::Dark);
        assert_eq!(themes.current_theme().name, "dark-theme");
    }
}
