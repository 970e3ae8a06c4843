//! Theme management and ANSI escape sequence generation.
//!
//! Themes are color schemes loaded from built-in TOML definitions or from a
//! user supplied TOML file. The built-in pair follows the Ocean Professional
//! palette: blue primary with amber accents.
//!
//! # Built-in Themes
//!
//! - `ocean-light`: light surfaces, blue selection (default)
//! - `ocean-dark`: dark surfaces, lighter blue selection
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! dark = false
//!
//! [colors]
//! header_fg = "#111827"
//! brand_fg = "#2563EB"
//! selection_fg = "#ffffff"
//! selection_bg = "#2563EB"
//! text_normal = "#111827"
//! text_dim = "#6b7280"
//! border = "#d1d5db"
//! input_border = "#d1d5db"
//! input_focus_border = "#1D4ED8"
//! match_highlight_fg = "#111827"
//! match_highlight_bg = "#F59E0B"
//! badge_fg = "#F59E0B"
//! empty_state_fg = "#2563EB"
//! modal_border = "#1D4ED8"
//! error_fg = "#EF4444"
//! ```

use crate::domain::{RecipeExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The Ocean Professional palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OceanPalette {
    pub primary: &'static str,
    pub primary600: &'static str,
    pub amber: &'static str,
    pub error: &'static str,
    pub bg: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
}

/// Returns the Ocean Professional palette for use outside the built-in themes.
#[must_use]
pub const fn ocean_palette() -> OceanPalette {
    OceanPalette {
        primary: "#2563EB",
        primary600: "#1D4ED8",
        amber: "#F59E0B",
        error: "#EF4444",
        bg: "#f9fafb",
        surface: "#ffffff",
        text: "#111827",
    }
}

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Whether the scheme is meant for dark terminals.
    #[serde(default)]
    pub dark: bool,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Brand mark and page title.
    pub brand_fg: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, metadata, placeholders.
    pub text_dim: String,

    pub border: String,
    /// Sidebar input boxes.
    pub input_border: String,
    /// Sidebar input box being edited.
    pub input_focus_border: String,

    /// Query match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Category badges.
    pub badge_fg: String,
    pub empty_state_fg: String,
    pub modal_border: String,
    pub error_fg: String,
}

impl Theme {
    /// Name of the built-in light theme.
    pub const LIGHT: &'static str = "ocean-light";
    /// Name of the built-in dark theme.
    pub const DARK: &'static str = "ocean-dark";

    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recipe_explorer::ui::Theme;
    ///
    /// let theme = Theme::from_name("ocean-dark").unwrap();
    /// assert!(theme.dark);
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            Self::LIGHT => include_str!("../../themes/ocean-light.toml"),
            Self::DARK => include_str!("../../themes/ocean-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Theme`] if the file cannot be read or
    /// its TOML is invalid or incomplete.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RecipeExplorerError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| RecipeExplorerError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Builds a light theme directly from a palette.
    #[must_use]
    pub fn from_palette(name: &str, palette: &OceanPalette) -> Self {
        Self {
            name: name.to_string(),
            dark: false,
            colors: ThemeColors {
                header_fg: palette.text.to_string(),
                header_bg: Some(palette.surface.to_string()),
                brand_fg: palette.primary.to_string(),
                selection_fg: palette.surface.to_string(),
                selection_bg: palette.primary.to_string(),
                text_normal: palette.text.to_string(),
                text_dim: "#6b7280".to_string(),
                border: "#d1d5db".to_string(),
                input_border: "#d1d5db".to_string(),
                input_focus_border: palette.primary600.to_string(),
                match_highlight_fg: palette.text.to_string(),
                match_highlight_bg: palette.amber.to_string(),
                badge_fg: palette.amber.to_string(),
                empty_state_fg: palette.primary.to_string(),
                modal_border: palette.primary600.to_string(),
                error_fg: palette.error.to_string(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white on
    /// malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in `ocean-light` theme.
    fn default() -> Self {
        Self::from_name(Self::LIGHT)
            .unwrap_or_else(|| Self::from_palette(Self::LIGHT, &ocean_palette()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        let light = Theme::from_name(Theme::LIGHT).unwrap();
        let dark = Theme::from_name(Theme::DARK).unwrap();
        assert!(!light.dark);
        assert!(dark.dark);
        assert_eq!(Theme::default(), light);
    }

    #[test]
    fn light_theme_matches_palette_fallback() {
        let from_toml = Theme::from_name(Theme::LIGHT).unwrap();
        let from_palette = Theme::from_palette(Theme::LIGHT, &ocean_palette());
        assert_eq!(
            from_toml.colors.selection_bg.to_lowercase(),
            from_palette.colors.selection_bg.to_lowercase()
        );
        assert_eq!(
            from_toml.colors.badge_fg.to_lowercase(),
            from_palette.colors.badge_fg.to_lowercase()
        );
        assert_eq!(from_toml.colors.error_fg, ocean_palette().error);
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#2563EB"), "\u{1b}[38;2;37;99;235m");
        assert_eq!(Theme::bg("ffffff"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        assert!(matches!(
            Theme::from_file(file.path()),
            Err(RecipeExplorerError::Theme(_))
        ));
    }
}
