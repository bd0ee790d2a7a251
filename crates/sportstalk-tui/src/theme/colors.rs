//! Catppuccin color palettes for the TUI.

use ratatui::style::Color;
use sportstalk_engine::{Sender, ThemeName};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub error: Color,

    // Sender attribution
    pub user: Color,
    pub assistant: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Build the palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Label color for a message author.
    pub fn sender(&self, sender: Sender) -> Color {
        match sender {
            Sender::User => self.user,
            Sender::Assistant => self.assistant,
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            error: Color::Rgb(243, 139, 168),   // #f38ba8 (red)

            user: Color::Rgb(137, 180, 250),      // #89b4fa (blue)
            assistant: Color::Rgb(250, 179, 135), // #fab387 (peach)

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),      // #4c4f69
            subtext: Color::Rgb(92, 95, 119),   // #5c5f77
            muted: Color::Rgb(140, 143, 161),   // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)

            error: Color::Rgb(210, 15, 57),     // #d20f39 (red)

            user: Color::Rgb(30, 102, 245),      // #1e66f5 (blue)
            assistant: Color::Rgb(254, 100, 11), // #fe640b (peach)

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            error: Color::Red,

            user: Color::LightBlue,
            assistant: Color::LightYellow,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_from_name() {
        assert!(matches!(
            Theme::from_name(ThemeName::Latte).base,
            Color::Rgb(239, 241, 245)
        ));
        assert!(matches!(
            Theme::from_name(ThemeName::HighContrast).base,
            Color::Black
        ));
    }

    #[test]
    fn test_senders_have_distinct_colors() {
        for theme in [Theme::mocha(), Theme::latte(), Theme::high_contrast()] {
            assert_ne!(theme.sender(Sender::User), theme.sender(Sender::Assistant));
        }
    }
}
