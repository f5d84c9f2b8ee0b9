use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use cryptopad_core::{transform, Mode, Settings, TransformRequest};

/// Quiet period before queued output is flushed to the auto-save file
const AUTO_SAVE_QUIET_PERIOD: Duration = Duration::from_secs(2);

/// Only auto-save substantial output
const AUTO_SAVE_MIN_LEN: usize = 10;

/// File name written into the configured save location
const AUTO_SAVE_FILE: &str = "cryptopad-autosave.txt";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Modes,
    Input,
    Key,
    Output,
    Settings,
}

impl Pane {
    const ORDER: [Pane; 5] = [
        Pane::Modes,
        Pane::Input,
        Pane::Key,
        Pane::Output,
        Pane::Settings,
    ];
}

/// What an active path prompt will do with the entered path
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PromptAction {
    OpenFile,
    SaveOutput,
}

#[derive(Clone, Debug)]
pub struct PathPrompt {
    pub action: PromptAction,
    pub buffer: String,
}

impl PathPrompt {
    pub fn title(&self) -> &'static str {
        match self.action {
            PromptAction::OpenFile => "Open file",
            PromptAction::SaveOutput => "Save output to",
        }
    }
}

/// Rows of the settings pane, in display order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingEntry {
    Theme,
    FontSize,
    DefaultMode,
    AutoSave,
    ConfirmBeforeClose,
}

pub const SETTING_ENTRIES: [SettingEntry; 5] = [
    SettingEntry::Theme,
    SettingEntry::FontSize,
    SettingEntry::DefaultMode,
    SettingEntry::AutoSave,
    SettingEntry::ConfirmBeforeClose,
];

impl SettingEntry {
    pub fn label(self) -> &'static str {
        match self {
            SettingEntry::Theme => "Theme",
            SettingEntry::FontSize => "Font size",
            SettingEntry::DefaultMode => "Default mode",
            SettingEntry::AutoSave => "Auto-save",
            SettingEntry::ConfirmBeforeClose => "Confirm quit",
        }
    }
}

pub struct App {
    pub focused_pane: Pane,
    pub mode: Mode,
    pub input: String,
    pub key: String,
    pub key_visible: bool,
    pub output: String,
    pub output_scroll: usize,
    pub status: String,
    pub status_is_error: bool,
    pub settings: Settings,
    pub setting_index: usize,
    pub path_prompt: Option<PathPrompt>,
    pub confirm_quit: bool,
    autosave_pending: Option<String>,
    autosave_due: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        let (settings, status) = match Settings::load_default() {
            Ok(settings) => (settings, "Ready".to_string()),
            Err(err) => (
                Settings::default(),
                format!("Settings unreadable, using defaults: {err}"),
            ),
        };

        Self {
            focused_pane: Pane::Input,
            mode: settings.default_mode,
            input: String::new(),
            key: String::new(),
            key_visible: false,
            output: String::new(),
            output_scroll: 0,
            status,
            status_is_error: false,
            settings,
            setting_index: 0,
            path_prompt: None,
            confirm_quit: false,
            autosave_pending: None,
            autosave_due: None,
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_is_error = false;
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_is_error = true;
    }

    /// Re-run the transform for the current (mode, input, key).
    ///
    /// Called on every edit, the way the original re-ran on each keystroke;
    /// the engine is cheap enough that no debouncing is needed here. Only
    /// the auto-save write is debounced.
    pub fn run_transform(&mut self) {
        let key = if self.key.is_empty() {
            None
        } else {
            Some(self.key.as_str())
        };
        let request = TransformRequest::new(self.mode, &self.input, key);

        match transform(&request) {
            Ok(output) => {
                self.output = output;
                self.output_scroll = 0;
                self.set_status(format!("{} ok", self.mode.label()));
                self.queue_autosave();
            }
            Err(err) => {
                self.output.clear();
                self.output_scroll = 0;
                self.set_error(err.to_string());
            }
        }
    }

    fn queue_autosave(&mut self) {
        if !self.settings.auto_save || self.output.len() <= AUTO_SAVE_MIN_LEN {
            return;
        }
        self.autosave_pending = Some(self.output.clone());
        self.autosave_due = Some(Instant::now() + AUTO_SAVE_QUIET_PERIOD);
    }

    /// Flush a queued auto-save once its quiet period has elapsed
    pub fn tick(&mut self) {
        match self.autosave_due {
            Some(due) if Instant::now() >= due => {}
            _ => return,
        }
        self.autosave_due = None;

        let Some(content) = self.autosave_pending.take() else {
            return;
        };
        let path = self.settings.save_location.join(AUTO_SAVE_FILE);
        match fs::write(&path, content) {
            Ok(()) => self.set_status(format!("Auto-saved to {}", path.display())),
            Err(err) => self.set_error(format!("Auto-save failed: {err}")),
        }
    }

    pub fn select_next_mode(&mut self) {
        self.mode = self.mode.next();
        self.run_transform();
    }

    pub fn select_prev_mode(&mut self) {
        self.mode = self.mode.prev();
        self.run_transform();
    }

    pub fn toggle_key_visibility(&mut self) {
        self.key_visible = !self.key_visible;
        self.set_status(if self.key_visible {
            "Key visible"
        } else {
            "Key hidden"
        });
    }

    pub fn clear_all(&mut self) {
        self.input.clear();
        self.key.clear();
        self.output.clear();
        self.output_scroll = 0;
        self.autosave_pending = None;
        self.autosave_due = None;
        self.set_status("Cleared");
    }

    /// Feed the current output back in as input (e.g. encode then encrypt)
    pub fn use_output_as_input(&mut self) {
        if self.output.is_empty() {
            self.set_status("Nothing to move: output is empty");
            return;
        }
        self.input = std::mem::take(&mut self.output);
        self.output_scroll = 0;
        self.run_transform();
        self.focused_pane = Pane::Input;
    }

    pub fn start_open_prompt(&mut self) {
        self.path_prompt = Some(PathPrompt {
            action: PromptAction::OpenFile,
            buffer: self.settings.save_location.display().to_string() + "/",
        });
    }

    pub fn start_save_prompt(&mut self) {
        if self.output.is_empty() {
            self.set_status("Nothing to save: output is empty");
            return;
        }
        self.path_prompt = Some(PathPrompt {
            action: PromptAction::SaveOutput,
            buffer: self
                .settings
                .save_location
                .join("output.txt")
                .display()
                .to_string(),
        });
    }

    pub fn cancel_prompt(&mut self) {
        self.path_prompt = None;
        self.set_status("Cancelled");
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.path_prompt.take() else {
            return;
        };
        let path = PathBuf::from(prompt.buffer.trim());
        if path.as_os_str().is_empty() {
            self.set_status("Cancelled");
            return;
        }
        match prompt.action {
            PromptAction::OpenFile => self.open_file(path),
            PromptAction::SaveOutput => self.save_output(path),
        }
    }

    fn open_file(&mut self, path: PathBuf) {
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.input = content;
                self.remember_location(&path);
                self.set_status(format!("Opened {}", path.display()));
                self.run_transform();
                self.focused_pane = Pane::Input;
            }
            Err(err) => self.set_error(format!("Open failed: {err}")),
        }
    }

    fn save_output(&mut self, path: PathBuf) {
        match fs::write(&path, &self.output) {
            Ok(()) => {
                self.remember_location(&path);
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(err) => self.set_error(format!("Save failed: {err}")),
        }
    }

    /// Remember the directory of the last open/save, like the original's
    /// dialogs did. Persisted only when settings are saved.
    fn remember_location(&mut self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.settings.save_location = parent.to_path_buf();
            }
        }
    }

    pub fn selected_setting(&self) -> SettingEntry {
        SETTING_ENTRIES[self.setting_index.min(SETTING_ENTRIES.len() - 1)]
    }

    pub fn setting_value_text(&self, entry: SettingEntry) -> String {
        match entry {
            SettingEntry::Theme => self.settings.theme.clone(),
            SettingEntry::FontSize => self.settings.font_size.clone(),
            SettingEntry::DefaultMode => self.settings.default_mode.label().to_string(),
            SettingEntry::AutoSave => checkbox(self.settings.auto_save),
            SettingEntry::ConfirmBeforeClose => checkbox(self.settings.confirm_before_close),
        }
    }

    pub fn change_selected_setting(&mut self) {
        match self.selected_setting() {
            SettingEntry::Theme => {
                self.settings.cycle_theme();
                self.set_status(format!("theme = {}", self.settings.theme));
            }
            SettingEntry::FontSize => {
                self.settings.cycle_font_size();
                self.set_status(format!("font_size = {}", self.settings.font_size));
            }
            SettingEntry::DefaultMode => {
                self.settings.default_mode = self.settings.default_mode.next();
                self.set_status(format!("default_mode = {}", self.settings.default_mode));
            }
            SettingEntry::AutoSave => {
                self.settings.auto_save = !self.settings.auto_save;
                self.set_status(format!("auto_save = {}", self.settings.auto_save));
            }
            SettingEntry::ConfirmBeforeClose => {
                self.settings.confirm_before_close = !self.settings.confirm_before_close;
                self.set_status(format!(
                    "confirm_before_close = {}",
                    self.settings.confirm_before_close
                ));
            }
        }
    }

    pub fn save_settings(&mut self) {
        match self.settings.save() {
            Ok(()) => self.set_status("Settings saved"),
            Err(err) => self.set_error(format!("Settings save failed: {err}")),
        }
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset();
        self.set_status("Settings reset to defaults (press s to persist)");
    }

    /// Returns true when the app should quit immediately
    pub fn request_quit(&mut self) -> bool {
        if self.settings.confirm_before_close {
            self.confirm_quit = true;
            false
        } else {
            true
        }
    }

    pub fn cycle_pane_forward(&mut self) {
        let idx = Pane::ORDER
            .iter()
            .position(|p| *p == self.focused_pane)
            .unwrap_or(0);
        self.focused_pane = Pane::ORDER[(idx + 1) % Pane::ORDER.len()];
    }

    pub fn cycle_pane_backward(&mut self) {
        let idx = Pane::ORDER
            .iter()
            .position(|p| *p == self.focused_pane)
            .unwrap_or(0);
        self.focused_pane = Pane::ORDER[(idx + Pane::ORDER.len() - 1) % Pane::ORDER.len()];
    }
}

fn checkbox(on: bool) -> String {
    if on { "[x]" } else { "[ ]" }.to_string()
}
