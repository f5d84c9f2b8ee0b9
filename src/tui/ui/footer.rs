use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    if app.confirm_quit {
        render_quit_prompt(frame, t, area);
        return;
    }
    if let Some(prompt) = &app.path_prompt {
        render_path_prompt(frame, t, area, prompt.title(), &prompt.buffer);
        return;
    }
    render_status_and_hints(frame, app, t, area);
}

fn render_quit_prompt(frame: &mut Frame, t: &Theme, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("CONFIRM: Quit cryptopad? ", t.confirm_prompt()),
            Span::styled("[", t.text_muted()),
            Span::styled("y", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Enter", t.key_hint()),
            Span::styled(":yes  ", t.text_muted()),
            Span::styled("n", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(":no]", t.text_muted()),
        ]),
        Line::styled(
            "Unsaved output is discarded on quit.",
            t.text_muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_path_prompt(frame: &mut Frame, t: &Theme, area: Rect, title: &str, buffer: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", title), t.key_hint()),
            Span::styled(format!("{}_", buffer), t.text_primary()),
        ]),
        Line::from(vec![
            Span::styled("Enter", t.key_hint()),
            Span::styled(":confirm  ", t.text_muted()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(":cancel", t.text_muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_and_hints(frame: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let status_style = if app.status_is_error {
        t.status_error()
    } else {
        t.status_ok()
    };
    let line1 = Line::from(vec![
        Span::styled("Status: ", t.text_muted()),
        Span::styled(app.status.clone(), status_style),
    ]);

    let pane_hint = |pane: Pane, label: &'static str| {
        if app.focused_pane == pane {
            Span::styled(label, t.key_hint())
        } else {
            Span::styled(label, t.text_muted())
        }
    };

    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":", t.text_muted()),
        pane_hint(Pane::Modes, "Mode"),
        Span::styled(" ", t.text_muted()),
        pane_hint(Pane::Input, "Input"),
        Span::styled(" ", t.text_muted()),
        pane_hint(Pane::Key, "Key"),
        Span::styled(" ", t.text_muted()),
        pane_hint(Pane::Output, "Output"),
        Span::styled(" ", t.text_muted()),
        pane_hint(Pane::Settings, "Settings"),
        Span::styled("  ", t.text_muted()),
        Span::styled("^O", t.key_hint()),
        Span::styled(":open ", t.text_muted()),
        Span::styled("^S", t.key_hint()),
        Span::styled(":save ", t.text_muted()),
        Span::styled("^L", t.key_hint()),
        Span::styled(":clear ", t.text_muted()),
        Span::styled("^U", t.key_hint()),
        Span::styled(":out>in ", t.text_muted()),
        Span::styled("^K", t.key_hint()),
        Span::styled(":key ", t.text_muted()),
        Span::styled("^\u{2190}\u{2192}", t.key_hint()),
        Span::styled(":mode ", t.text_muted()),
        Span::styled("^Q", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}
