use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// The persisted theme choice. `System` follows the window system's reported
/// preference and falls back to light when nothing is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    System,
}

impl ThemePreference {
    /// Toggle order: system -> light -> dark -> system.
    pub fn cycled(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    pub fn resolve(self, system_dark: bool) -> Theme {
        match self {
            Self::Dark => Theme::dark(),
            Self::Light => Theme::light(),
            Self::System => {
                if system_dark {
                    Theme::dark()
                } else {
                    Theme::light()
                }
            }
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub chrome_background: Color32,
    pub title_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            chrome_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            title_size: 72.0,
            body_size: 32.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            chrome_background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            title_size: 72.0,
            body_size: 32.0,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Decorative particle colors, translucent blue and orange tones.
    pub fn particle_palette(&self) -> [Color32; 3] {
        [
            Color32::from_rgba_unmultiplied(0, 80, 200, 128),
            Color32::from_rgba_unmultiplied(255, 90, 0, 128),
            Color32::from_rgba_unmultiplied(0, 150, 255, 102),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_three_preferences() {
        let start = ThemePreference::System;
        assert_eq!(start.cycled(), ThemePreference::Light);
        assert_eq!(start.cycled().cycled(), ThemePreference::Dark);
        assert_eq!(start.cycled().cycled().cycled(), ThemePreference::System);
    }

    #[test]
    fn system_resolves_by_reported_preference() {
        assert_eq!(ThemePreference::System.resolve(true).name, "dark");
        assert_eq!(ThemePreference::System.resolve(false).name, "light");
        assert_eq!(ThemePreference::Dark.resolve(false).name, "dark");
        assert_eq!(ThemePreference::Light.resolve(true).name, "light");
    }

    #[test]
    fn names_round_trip() {
        for pref in [
            ThemePreference::Dark,
            ThemePreference::Light,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_name(pref.name()), Some(pref));
        }
        assert_eq!(ThemePreference::from_name("sepia"), None);
    }
}
