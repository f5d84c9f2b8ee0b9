mod footer;
mod header;
mod input_panel;
mod key_panel;
mod mode_bar;
mod output_panel;
mod settings_panel;

use ratatui::prelude::*;

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let t = Theme::new(&app.settings.theme);

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Compact header
            Constraint::Length(3), // Mode bar
            Constraint::Min(8),    // Input | Output
            Constraint::Length(3), // Key field
            Constraint::Length(7), // Settings block
            Constraint::Length(2), // Footer (status + hints)
        ])
        .split(frame.area());

    header::render(frame, app, &t, root[0]);
    mode_bar::render(frame, app, &t, root[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[2]);

    input_panel::render(frame, app, &t, middle[0]);
    output_panel::render(frame, app, &t, middle[1]);
    key_panel::render(frame, app, &t, root[3]);
    settings_panel::render(frame, app, &t, root[4]);
    footer::render(frame, app, &t, root[5]);
}
