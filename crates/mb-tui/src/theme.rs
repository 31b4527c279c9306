//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal
//! backgrounds. Auto-detects via COLORFGBG env var, or manual override
//! with --light flag or MB_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for the terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,

    /// Default border color
    pub border: Color,
    /// Informational border (birth screens, prompts)
    pub border_accent: Color,
    /// Action border (options overlay)
    pub border_action: Color,

    /// Cursor row foreground
    pub cursor_fg: Color,
    /// Cursor row background
    pub cursor_bg: Color,
    /// Already-committed choices in earlier menus
    pub chosen: Color,

    /// Question/hint line above the menus
    pub question: Color,
    /// Column headers and field labels
    pub header: Color,
    /// Player-entered values (name, stat values)
    pub value: Color,
    /// Warnings (bad password, full account)
    pub warning: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            chosen: Color::LightBlue,
            question: Color::Yellow,
            header: Color::Cyan,
            value: Color::LightBlue,
            warning: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            chosen: Color::Blue,
            question: Color::Magenta,
            header: Color::Blue,
            value: Color::Blue,
            warning: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and MB_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Whether this palette targets a dark terminal background
    pub fn is_dark(&self) -> bool {
        self.text == Color::White
    }

    fn is_light_background() -> bool {
        if std::env::var("MB_LIGHT_BG").is_ok_and(|v| v == "1") {
            return true;
        }
        // COLORFGBG is "fg;bg"; bg values 7 and 15 mean a light terminal
        if let Ok(var) = std::env::var("COLORFGBG") {
            if let Some(bg) = var.rsplit(';').next() {
                return bg == "7" || bg == "15";
            }
        }
        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
