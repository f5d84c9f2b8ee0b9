use cryptopad_core::Mode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let focused = app.focused_pane == Pane::Modes;

    let block = Block::default()
        .title(t.panel_title("MODE", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![];
    for mode in Mode::ALL {
        let selected = mode == app.mode;
        let style = if selected {
            t.selection()
        } else {
            t.text_secondary()
        };
        let label = if mode.requires_key() {
            format!("[{}*]", mode.label())
        } else {
            format!("[{}]", mode.label())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("(* needs a key)", t.text_muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
