use ratatui::prelude::*;

/// Color palette for the TUI, dark and light variants.
///
/// The dark palette keeps the look of the original dark UI
/// (#1e1e2e background family).
pub struct Palette {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_danger: Color,

    // UI colors
    pub border_default: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(186, 194, 222),
            text_muted: Color::Rgb(108, 112, 134),

            accent_primary: Color::Rgb(137, 180, 250),   // Blue
            accent_success: Color::Rgb(166, 227, 161),   // Green
            accent_warning: Color::Rgb(249, 226, 175),   // Yellow
            accent_danger: Color::Rgb(243, 139, 168),    // Red

            border_default: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(137, 180, 250),
            selection_bg: Color::Rgb(137, 180, 250),
            selection_fg: Color::Rgb(30, 30, 46),
        }
    }

    pub fn light() -> Self {
        Self {
            text_primary: Color::Rgb(76, 79, 105),
            text_secondary: Color::Rgb(92, 95, 119),
            text_muted: Color::Rgb(140, 143, 161),

            accent_primary: Color::Rgb(30, 102, 245),
            accent_success: Color::Rgb(64, 160, 43),
            accent_warning: Color::Rgb(223, 142, 29),
            accent_danger: Color::Rgb(210, 15, 57),

            border_default: Color::Rgb(188, 192, 204),
            border_focused: Color::Rgb(30, 102, 245),
            selection_bg: Color::Rgb(30, 102, 245),
            selection_fg: Color::Rgb(239, 241, 245),
        }
    }

    /// Resolve a settings theme name. "system" falls back to dark: a
    /// terminal has no reliable OS theme query, and dark matches the
    /// default appearance.
    pub fn for_theme(theme: &str) -> Self {
        if theme.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
