use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane, SETTING_ENTRIES};

/// Handle input and return true if the app should quit.
///
/// The Input and Key panes consume plain characters, so global actions ride
/// on control chords; everything else follows the pane-focus convention.
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if app.confirm_quit {
        return Ok(handle_quit_confirmation(app, key.code));
    }
    if app.path_prompt.is_some() {
        handle_prompt_input(app, key.code);
        return Ok(false);
    }

    // Global chords, available from any pane
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Ok(app.request_quit()),
            KeyCode::Char('o') => {
                app.start_open_prompt();
                return Ok(false);
            }
            KeyCode::Char('s') => {
                app.start_save_prompt();
                return Ok(false);
            }
            KeyCode::Char('l') => {
                app.clear_all();
                return Ok(false);
            }
            KeyCode::Char('u') => {
                app.use_output_as_input();
                return Ok(false);
            }
            KeyCode::Char('k') => {
                app.toggle_key_visibility();
                return Ok(false);
            }
            KeyCode::Left => {
                app.select_prev_mode();
                return Ok(false);
            }
            KeyCode::Right => {
                app.select_next_mode();
                return Ok(false);
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return Ok(false);
        }
        _ => {}
    }

    handle_pane_input(app, key);
    Ok(false)
}

fn handle_quit_confirmation(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_quit = false;
            app.set_status("Cancelled");
            false
        }
        _ => false,
    }
}

fn handle_prompt_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Backspace => {
            if let Some(prompt) = app.path_prompt.as_mut() {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = app.path_prompt.as_mut() {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
}

fn handle_pane_input(app: &mut App, key: KeyEvent) {
    // Unbound control chords must not leak characters into the text buffers
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match app.focused_pane {
        Pane::Modes => handle_modes_input(app, key.code),
        Pane::Input => handle_text_input(app, key.code, true),
        Pane::Key => handle_text_input(app, key.code, false),
        Pane::Output => handle_output_input(app, key.code),
        Pane::Settings => handle_settings_input(app, key.code),
    }
}

fn handle_modes_input(app: &mut App, key: KeyCode) {
    // Modes are displayed horizontally, so use Left/Right to navigate
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.select_prev_mode(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_mode(),
        KeyCode::Enter | KeyCode::Char(' ') => app.run_transform(),
        _ => {}
    }
}

fn handle_text_input(app: &mut App, key: KeyCode, multiline: bool) {
    let changed = match key {
        KeyCode::Char(c) => {
            if multiline {
                app.input.push(c);
            } else {
                app.key.push(c);
            }
            true
        }
        KeyCode::Enter if multiline => {
            app.input.push('\n');
            true
        }
        KeyCode::Backspace => {
            let buffer = if multiline {
                &mut app.input
            } else {
                &mut app.key
            };
            buffer.pop().is_some()
        }
        _ => false,
    };

    // Re-run on every edit, like the original's keystroke handler
    if changed {
        app.run_transform();
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.output_scroll = app.output_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.output_scroll = app.output_scroll.saturating_add(1);
        }
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.setting_index > 0 {
                app.setting_index -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.setting_index + 1 < SETTING_ENTRIES.len() {
                app.setting_index += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.change_selected_setting(),
        KeyCode::Char('s') => app.save_settings(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_settings(),
        _ => {}
    }
}
