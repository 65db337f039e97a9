//! Color palettes and width-responsive layout classes.
//!
//! Every draw function takes a [`ThemePalette`] by value; palettes are plain
//! `Copy` bundles of [`Color`]s so there is no shared styling state. The
//! palette to use is selected once at startup (config or `--theme`) and can be
//! cycled at runtime.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named palette presets selectable from config or the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemePreset {
    pub fn all() -> [ThemePreset; 3] {
        [
            ThemePreset::Dark,
            ThemePreset::Light,
            ThemePreset::HighContrast,
        ]
    }

    /// Next preset in cycle order, wrapping at the end.
    pub fn next(self) -> ThemePreset {
        match self {
            ThemePreset::Dark => ThemePreset::Light,
            ThemePreset::Light => ThemePreset::HighContrast,
            ThemePreset::HighContrast => ThemePreset::Dark,
        }
    }

    pub fn to_palette(self) -> ThemePalette {
        match self {
            ThemePreset::Dark => ThemePalette::dark(),
            ThemePreset::Light => ThemePalette::light(),
            ThemePreset::HighContrast => ThemePalette::high_contrast(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
            ThemePreset::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemePreset::Dark),
            "light" => Ok(ThemePreset::Light),
            "high-contrast" | "high_contrast" | "hc" => Ok(ThemePreset::HighContrast),
            other => Err(format!(
                "unknown theme '{other}' (expected dark, light, or high-contrast)"
            )),
        }
    }
}

/// Resolved colors for one theme. Copied freely into draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg: Color,
    pub fg: Color,
    /// Panel/card background, one step off `bg`.
    pub surface: Color,
    pub border: Color,
    pub border_focus: Color,
    /// Primary accent, used for headings and the skill-bar fill.
    pub accent: Color,
    /// Secondary accent for links and selected nav entries.
    pub accent_alt: Color,
    /// De-emphasized text (footer hints, field labels).
    pub hint: Color,
    /// Validation failures and guarded-input feedback.
    pub error: Color,
    pub success: Color,
    /// Row background while the pointer rests on a hoverable line.
    pub hover_bg: Color,
    /// Unfilled remainder of a skill bar.
    pub bar_empty: Color,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(13, 17, 23),
            fg: Color::Rgb(201, 209, 217),
            surface: Color::Rgb(22, 27, 34),
            border: Color::Rgb(48, 54, 61),
            border_focus: Color::Rgb(0, 212, 255),
            accent: Color::Rgb(0, 212, 255),
            accent_alt: Color::Rgb(88, 166, 255),
            hint: Color::Rgb(110, 118, 129),
            error: Color::Rgb(255, 107, 107),
            success: Color::Rgb(63, 185, 80),
            hover_bg: Color::Rgb(21, 40, 47),
            bar_empty: Color::Rgb(33, 38, 45),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 255, 255),
            fg: Color::Rgb(36, 41, 47),
            surface: Color::Rgb(246, 248, 250),
            border: Color::Rgb(208, 215, 222),
            border_focus: Color::Rgb(9, 105, 218),
            accent: Color::Rgb(5, 80, 174),
            accent_alt: Color::Rgb(9, 105, 218),
            hint: Color::Rgb(87, 96, 106),
            error: Color::Rgb(207, 34, 46),
            success: Color::Rgb(26, 127, 55),
            hover_bg: Color::Rgb(221, 244, 255),
            bar_empty: Color::Rgb(234, 238, 242),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Rgb(0, 0, 0),
            fg: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(0, 0, 0),
            border: Color::Rgb(255, 255, 255),
            border_focus: Color::Rgb(255, 255, 0),
            accent: Color::Rgb(0, 255, 255),
            accent_alt: Color::Rgb(0, 255, 255),
            hint: Color::Rgb(192, 192, 192),
            error: Color::Rgb(255, 80, 80),
            success: Color::Rgb(0, 255, 0),
            hover_bg: Color::Rgb(40, 40, 40),
            bar_empty: Color::Rgb(64, 64, 64),
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focus_style(&self) -> Style {
        Style::default().fg(self.border_focus)
    }

    /// Section and card titles.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn title_subtle(&self) -> Style {
        Style::default().fg(self.hint)
    }

    /// Selected nav entry / focused interactive row.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }
}

/// Style for inline key hints like `[q]`.
pub fn kbd_style(palette: ThemePalette) -> Style {
    Style::default()
        .fg(palette.accent_alt)
        .add_modifier(Modifier::BOLD)
}

/// Layout breakpoints, mirroring the narrow/normal/wide split used by
/// responsive pages. Narrow terminals collapse the nav into a toggle menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalWidth {
    Narrow,
    Normal,
    Wide,
}

impl TerminalWidth {
    pub fn from_cols(cols: u16) -> Self {
        match cols {
            0..=79 => TerminalWidth::Narrow,
            80..=120 => TerminalWidth::Normal,
            _ => TerminalWidth::Wide,
        }
    }

    /// Narrow terminals replace the inline nav with a dropdown toggle.
    pub fn collapsed_nav(self) -> bool {
        matches!(self, TerminalWidth::Narrow)
    }

    /// Footer key hints are dropped when there is no room for them.
    pub fn show_hints(self) -> bool {
        !matches!(self, TerminalWidth::Narrow)
    }

    /// Wide terminals pad the document into a centered column.
    pub fn content_margin(self, cols: u16) -> u16 {
        match self {
            TerminalWidth::Narrow | TerminalWidth::Normal => 0,
            TerminalWidth::Wide => cols.saturating_sub(120) / 2,
        }
    }
}

/// WCAG-style contrast classification for palette sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    Fail,
    Aa,
    Aaa,
}

fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        // Non-RGB colors depend on terminal configuration; treat as mid grey.
        _ => (128, 128, 128),
    };
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1.0 (identical) to 21.0.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (light, dark) = if la > lb { (la, lb) } else { (lb, la) };
    (light + 0.05) / (dark + 0.05)
}

pub fn check_contrast(fg: Color, bg: Color) -> ContrastLevel {
    let ratio = contrast_ratio(fg, bg);
    if ratio >= 7.0 {
        ContrastLevel::Aaa
    } else if ratio >= 4.5 {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_cycle_visits_every_theme_once() {
        let mut current = ThemePreset::Dark;
        let mut seen = Vec::new();
        loop {
            seen.push(current);
            current = current.next();
            if current == ThemePreset::Dark {
                break;
            }
        }
        assert_eq!(
            seen.len(),
            ThemePreset::all().len(),
            "cycling should visit every preset exactly once"
        );
        for preset in ThemePreset::all() {
            assert!(seen.contains(&preset), "cycle skipped {preset}");
        }
    }

    #[test]
    fn preset_names_round_trip_through_from_str() {
        for preset in ThemePreset::all() {
            let parsed: ThemePreset = preset.name().parse().unwrap();
            assert_eq!(parsed, preset);
        }
        assert!("mauve".parse::<ThemePreset>().is_err());
    }

    #[test]
    fn dark_and_light_differ() {
        let dark = ThemePalette::dark();
        let light = ThemePalette::light();
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.fg, light.fg);
    }

    #[test]
    fn high_contrast_uses_pure_black_and_white() {
        let hc = ThemePalette::high_contrast();
        assert_eq!(
            hc.bg,
            Color::Rgb(0, 0, 0),
            "high contrast background should be pure black"
        );
        assert_eq!(
            hc.fg,
            Color::Rgb(255, 255, 255),
            "high contrast foreground should be pure white"
        );
    }

    #[test]
    fn body_text_is_readable_on_every_preset() {
        for preset in ThemePreset::all() {
            let palette = preset.to_palette();
            assert_ne!(
                check_contrast(palette.fg, palette.bg),
                ContrastLevel::Fail,
                "{preset}: fg on bg must pass AA"
            );
            assert_ne!(
                check_contrast(palette.error, palette.bg),
                ContrastLevel::Fail,
                "{preset}: validation errors must stay readable"
            );
        }
    }

    #[test]
    fn width_classification_breakpoints() {
        assert_eq!(TerminalWidth::from_cols(60), TerminalWidth::Narrow);
        assert_eq!(TerminalWidth::from_cols(79), TerminalWidth::Narrow);
        assert_eq!(TerminalWidth::from_cols(80), TerminalWidth::Normal);
        assert_eq!(TerminalWidth::from_cols(100), TerminalWidth::Normal);
        assert_eq!(TerminalWidth::from_cols(120), TerminalWidth::Normal);
        assert_eq!(TerminalWidth::from_cols(121), TerminalWidth::Wide);
        assert_eq!(TerminalWidth::from_cols(200), TerminalWidth::Wide);
    }

    #[test]
    fn narrow_terminals_collapse_the_nav() {
        assert!(TerminalWidth::Narrow.collapsed_nav());
        assert!(!TerminalWidth::Normal.collapsed_nav());
        assert!(!TerminalWidth::Wide.collapsed_nav());

        assert!(!TerminalWidth::Narrow.show_hints());
        assert!(TerminalWidth::Normal.show_hints());
        assert!(TerminalWidth::Wide.show_hints());
    }

    #[test]
    fn wide_margin_centers_the_column() {
        assert_eq!(TerminalWidth::Normal.content_margin(100), 0);
        assert_eq!(TerminalWidth::Wide.content_margin(160), 20);
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = contrast_ratio(Color::Rgb(255, 255, 255), Color::Rgb(0, 0, 0));
        assert!((ratio - 21.0).abs() < 0.1, "expected ~21:1, got {ratio}");
    }

    #[test]
    fn contrast_ratio_same_color_is_one() {
        let ratio = contrast_ratio(Color::Rgb(128, 128, 128), Color::Rgb(128, 128, 128));
        assert!((ratio - 1.0).abs() < 0.001, "expected 1:1, got {ratio}");
    }
}
