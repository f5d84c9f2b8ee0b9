use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let focused = app.focused_pane == Pane::Key;
    let relevant = app.mode.requires_key();

    let title = if app.key_visible {
        "KEY (visible)"
    } else {
        "KEY"
    };

    let block = Block::default()
        .title(t.panel_title(title, focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if app.key.is_empty() {
        let hint = if relevant {
            "Enter an encryption key. Ctrl+K toggles visibility."
        } else {
            "Not used by the current mode."
        };
        Line::styled(hint, t.text_muted())
    } else {
        let shown = if app.key_visible {
            app.key.clone()
        } else {
            "*".repeat(app.key.chars().count())
        };
        let style = if relevant {
            t.text_primary()
        } else {
            t.text_muted()
        };
        let mut text = shown;
        if focused {
            text.push('_');
        }
        Line::styled(text, style)
    };

    frame.render_widget(Paragraph::new(line), inner);
}
