// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection (light, dark, or follow the OS).

use iced::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parses the `theme` config value; anything unknown falls back to System.
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Unknown OS preference reads as dark, the friendlier default
            // for a photo grid.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_values_parse() {
        assert_eq!(ThemeMode::from_config(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_config(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_config(Some("neon")), ThemeMode::System);
        assert_eq!(ThemeMode::from_config(None), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_ignore_the_os() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
