use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let autosave = if app.settings.auto_save {
        "autosave:on"
    } else {
        "autosave:off"
    };

    let line = Line::from(vec![
        Span::styled("cryptopad ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {} ", app.mode.label()), t.mode_badge()),
        Span::raw(" "),
        Span::styled(autosave, t.text_muted()),
        Span::raw("  "),
        Span::styled(
            app.settings.save_location.display().to_string(),
            t.text_muted(),
        ),
        Span::raw(" "),
        Span::styled("Ctrl+Q:quit", t.key_hint()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
