use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::{App, Pane, SettingEntry, SETTING_ENTRIES};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let focused = app.focused_pane == Pane::Settings;

    let block = Block::default()
        .title(t.panel_title("SETTINGS", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(SETTING_ENTRIES.len());
    for (i, entry) in SETTING_ENTRIES.iter().enumerate() {
        let selected = focused && i == app.setting_index;
        let prefix = if selected { ">" } else { " " };
        let value = app.setting_value_text(*entry);
        let enabled = toggle_state(app, *entry);

        let mut spans = vec![
            Span::styled(prefix, t.key_hint()),
            Span::styled(format!(" {:<14}", entry.label()), t.text_secondary()),
        ];
        spans.push(if selected {
            Span::styled(value, t.selection())
        } else {
            Span::styled(value, t.setting_value(enabled))
        });
        if i == 0 {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("s:save  r:reset", t.key_hint()));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// Toggle-style entries get dim styling when off; value entries stay lit
fn toggle_state(app: &App, entry: SettingEntry) -> bool {
    match entry {
        SettingEntry::AutoSave => app.settings.auto_save,
        SettingEntry::ConfirmBeforeClose => app.settings.confirm_before_close,
        _ => true,
    }
}
