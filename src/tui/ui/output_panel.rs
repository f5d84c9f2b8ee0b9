use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let focused = app.focused_pane == Pane::Output;

    let block = Block::default()
        .title(t.panel_title("OUTPUT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.output.is_empty() {
        let hint = if app.status_is_error {
            "No output (see status line)."
        } else {
            "Output appears here as you type."
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, t.text_muted())),
            inner,
        );
        return;
    }

    let lines: Vec<&str> = app.output.lines().collect();
    let visible_height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    let scroll = app.output_scroll.min(max_scroll);

    let para = Paragraph::new(app.output.as_str())
        .style(t.text_primary())
        .scroll((scroll as u16, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
