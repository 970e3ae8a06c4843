//! Appearance: the shared presentation configuration.
//!
//! A single [`Appearance`] value is created at initialization, owned by
//! `AppState`, and handed by reference to every render call. Toggling the
//! light/dark mode mutates it in place; no component reads theme state from
//! anywhere else.

use super::theme::Theme;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    const fn builtin_name(self) -> &'static str {
        match self {
            Self::Light => Theme::LIGHT,
            Self::Dark => Theme::DARK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Appearance {
    mode: ThemeMode,
    theme: Theme,
}

impl Appearance {
    /// Wraps the initial theme; the mode follows the theme's `dark` flag.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mode = if theme.dark { ThemeMode::Dark } else { ThemeMode::Light };
        Self { mode, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches to the built-in theme of the opposite mode. A custom theme
    /// loaded from file is replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::ui::{Appearance, Theme, ThemeMode};
    ///
    /// let mut appearance = Appearance::new(Theme::default());
    /// appearance.toggle();
    /// assert_eq!(appearance.mode(), ThemeMode::Dark);
    /// assert_eq!(appearance.theme().name, "ocean-dark");
    /// ```
    pub fn toggle(&mut self) {
        let mode = self.mode.toggled();
        let theme = Theme::from_name(mode.builtin_name()).unwrap_or_else(|| {
            tracing::debug!(mode = ?mode, "built-in theme missing, keeping current colors");
            self.theme.clone()
        });
        tracing::debug!(theme = %theme.name, "appearance toggled");
        self.set_theme(theme);
        self.mode = mode;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.mode = if theme.dark { ThemeMode::Dark } else { ThemeMode::Light };
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_light() {
        let mut appearance = Appearance::new(Theme::default());
        appearance.toggle();
        appearance.toggle();
        assert_eq!(appearance.mode(), ThemeMode::Light);
        assert_eq!(appearance.theme(), &Theme::default());
    }

    #[test]
    fn custom_dark_theme_toggles_to_builtin_light() {
        let mut custom = Theme::from_name(Theme::DARK).unwrap();
        custom.name = "midnight".to_string();
        let mut appearance = Appearance::new(custom);
        assert_eq!(appearance.mode(), ThemeMode::Dark);

        appearance.toggle();
        assert_eq!(appearance.theme().name, Theme::LIGHT);
    }
}
