/// Theme preference store
///
/// Holds the dark/light flag and the named color theme, and persists both
/// to the settings file synchronously on every mutation. The store is
/// constructed once at startup and injected into the application struct;
/// nothing else reads or writes the preference.
///
/// First-launch fallbacks: the dark flag follows the system preference and
/// the color theme is green. Unrecognized persisted values silently fall
/// back the same way.

use crate::color;
use crate::config::{self, Config};
use iced::theme::Palette;
use iced::{Color, Theme};
use std::path::PathBuf;

/// The named color palettes selectable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Green,
    Turquoise,
    Amaretto,
    Burgundy,
    Boring,
    NeoBrutalism,
}

impl ColorTheme {
    /// All themes, in picker order.
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::Green,
        ColorTheme::Turquoise,
        ColorTheme::Amaretto,
        ColorTheme::Burgundy,
        ColorTheme::Boring,
        ColorTheme::NeoBrutalism,
    ];

    /// The persisted (and displayed) name of this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Green => "green",
            ColorTheme::Turquoise => "turquoise",
            ColorTheme::Amaretto => "amaretto",
            ColorTheme::Burgundy => "burgundy",
            ColorTheme::Boring => "boring",
            ColorTheme::NeoBrutalism => "neo-brutalism",
        }
    }

    /// Parse a persisted name. Returns None for anything unrecognized so
    /// the caller can fall back to the default without erroring.
    pub fn parse(name: &str) -> Option<Self> {
        ColorTheme::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// The accent color of this theme.
    ///
    /// The chromatic palettes are defined in OKLCH at matched lightness
    /// and chroma so they read as a family; neo-brutalism uses its fixed
    /// violet hex.
    pub fn accent(&self) -> Color {
        match self {
            ColorTheme::Green => color::oklch(0.58, 0.12, 145.0),
            ColorTheme::Turquoise => color::oklch(0.58, 0.14, 200.0),
            ColorTheme::Amaretto => color::oklch(0.58, 0.14, 55.0),
            ColorTheme::Burgundy => color::oklch(0.58, 0.14, 15.0),
            ColorTheme::Boring => color::oklch(0.50, 0.0, 0.0),
            ColorTheme::NeoBrutalism => color::hex(0xA8A6FF),
        }
    }

    /// Swatch colors shown in the picker. All themes show a single color
    /// except neo-brutalism, whose swatch is a violet/pink/lime stack.
    pub fn swatch(&self) -> Vec<Color> {
        match self {
            ColorTheme::NeoBrutalism => {
                vec![color::hex(0xA8A6FF), color::hex(0xFFA6F6), color::hex(0xB8FF9F)]
            }
            other => vec![other.accent()],
        }
    }
}

/// The full persisted preference: dark flag plus color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    pub dark: bool,
    pub color: ColorTheme,
}

impl ThemePreference {
    /// Build the iced theme for this preference.
    pub fn iced_theme(&self) -> Theme {
        let accent = self.color.accent();
        let (background, text) = if self.dark {
            // Near-black surface with a faint accent tint
            (
                color::mix(Color::from_rgb(0.07, 0.07, 0.08), accent, 0.04),
                Color::from_rgb(0.93, 0.93, 0.92),
            )
        } else {
            (
                color::mix(Color::from_rgb(0.97, 0.97, 0.96), accent, 0.04),
                Color::from_rgb(0.12, 0.12, 0.13),
            )
        };

        Theme::custom(
            format!("folio-{}", self.color.as_str()),
            Palette {
                background,
                text,
                primary: accent,
                success: color::oklch(0.58, 0.12, 145.0),
                danger: color::oklch(0.55, 0.16, 25.0),
            },
        )
    }

    /// Muted text color derived from the palette.
    pub fn muted_text(&self) -> Color {
        let theme = if self.dark {
            Color::from_rgb(0.62, 0.62, 0.64)
        } else {
            Color::from_rgb(0.42, 0.42, 0.44)
        };
        color::mix(theme, self.color.accent(), 0.12)
    }
}

/// The explicit preference store: getters, mutators, synchronous
/// persistence. The optional path override exists for tests; the default
/// store writes through the `config` module's standard location.
#[derive(Debug)]
pub struct ThemeStore {
    prefs: ThemePreference,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Load the store from the default settings location, falling back to
    /// the system dark-mode preference and the green theme.
    pub fn load() -> Self {
        Self::from_config(config::load(), None)
    }

    /// Load the store from an explicit settings path (tests).
    #[cfg(test)]
    pub fn load_from(path: PathBuf) -> Self {
        Self::from_config(config::load_from_path(&path), Some(path))
    }

    fn from_config(config: Config, path: Option<PathBuf>) -> Self {
        let dark = match config.theme.as_deref() {
            Some("dark") => true,
            Some("light") => false,
            // Nothing persisted (or junk): follow the system preference
            _ => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        };
        let color = config
            .color_theme
            .as_deref()
            .and_then(ColorTheme::parse)
            .unwrap_or_default();

        ThemeStore {
            prefs: ThemePreference { dark, color },
            path,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.prefs
    }

    pub fn is_dark(&self) -> bool {
        self.prefs.dark
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.prefs.color
    }

    /// Flip dark/light and persist immediately.
    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark = !self.prefs.dark;
        self.persist();
    }

    /// Switch the color theme and persist immediately.
    pub fn set_color_theme(&mut self, color: ColorTheme) {
        self.prefs.color = color;
        self.persist();
    }

    fn persist(&self) {
        let config = Config {
            theme: Some(if self.prefs.dark { "dark" } else { "light" }.to_string()),
            color_theme: Some(self.prefs.color.as_str().to_string()),
        };
        let result = match &self.path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
        if let Err(e) = result {
            // Losing the preference is not fatal; the session keeps its
            // in-memory value
            eprintln!("⚠️  Failed to save theme preference: {e}");
        }
    }
}
