mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    pub fn new(theme_name: &str) -> Self {
        Self {
            palette: Palette::for_theme(theme_name),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // Panel title with focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.palette.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(format!(" {} ", title), self.text_muted())
        }
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Secondary/dimmed text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Selected item in a bar or list
    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_fg)
            .bg(self.palette.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status line, success/info
    pub fn status_ok(&self) -> Style {
        Style::default().fg(self.palette.accent_success)
    }

    // Status line, error
    pub fn status_error(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_danger)
            .add_modifier(Modifier::BOLD)
    }

    // Confirm prompt style
    pub fn confirm_prompt(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_danger)
            .add_modifier(Modifier::BOLD)
    }

    // Checkbox / toggle value style
    pub fn setting_value(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.palette.accent_success)
        } else {
            Style::default().fg(self.palette.text_muted)
        }
    }

    // Mode badge shown in the header
    pub fn mode_badge(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_fg)
            .bg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }
}
