use ratatui::style::Color;

use crate::model::{Category, ThemeMode, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub general: Color,
    pub work: Color,
    pub school: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            general: Color::Rgb(0x44, 0xDD, 0xFF),
            work: Color::Rgb(0xFF, 0xD7, 0x00),
            school: Color::Rgb(0xCC, 0x66, 0xFF),
        }
    }

    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xFA, 0xF8, 0xFF),
            text: Color::Rgb(0x3A, 0x34, 0x5C),
            text_bright: Color::Rgb(0x0C, 0x00, 0x1B),
            highlight: Color::Rgb(0xC2, 0x18, 0x6A),
            dim: Color::Rgb(0x8A, 0x85, 0xA8),
            green: Color::Rgb(0x1B, 0x8A, 0x4A),
            selection_bg: Color::Rgb(0xF3, 0xD9, 0xE8),
            general: Color::Rgb(0x00, 0x7A, 0x99),
            work: Color::Rgb(0xA6, 0x6A, 0x00),
            school: Color::Rgb(0x7B, 0x2F, 0xBF),
        }
    }

    /// Base palette for `mode` with `[ui.colors]` overrides applied
    pub fn from_config(mode: ThemeMode, ui: &UiConfig) -> Self {
        let mut theme = match mode {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        };

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                "general" => theme.general = color,
                "work" => theme.work = color,
                "school" => theme.school = color,
                _ => {}
            }
        }

        theme
    }

    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::General => self.general,
            Category::Work => self.work,
            Category::School => self.school,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn test_mode_selects_palette() {
        let ui = UiConfig::default();
        assert_eq!(Theme::from_config(ThemeMode::Dark, &ui), Theme::dark());
        assert_eq!(Theme::from_config(ThemeMode::Light, &ui), Theme::light());
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn test_overrides_apply_to_either_mode() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#112233".into());
        ui.colors.insert("work".into(), "nonsense".into());

        let light = Theme::from_config(ThemeMode::Light, &ui);
        assert_eq!(light.highlight, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(light.work, Theme::light().work);
        assert_eq!(light.mode, ThemeMode::Light);
    }

    #[test]
    fn test_category_color() {
        let theme = Theme::dark();
        assert_eq!(theme.category_color(Category::Work), theme.work);
        assert_eq!(theme.category_color(Category::School), theme.school);
    }
}
