use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let focused = app.focused_pane == Pane::Input;

    let block = Block::default()
        .title(t.panel_title("INPUT", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "Type here, or Ctrl+O to open a file.",
            t.text_muted(),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    // Show a trailing cursor marker while the pane is focused
    let mut text = app.input.clone();
    if focused {
        text.push('_');
    }

    let para = Paragraph::new(text)
        .style(t.text_primary())
        .wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
