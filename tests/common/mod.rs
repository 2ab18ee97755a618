//! Shared test double: a host that records every instruction it receives.

use kataribe::host::{ChoiceBinding, PresentationHost};
use std::sync::{Arc, Mutex, MutexGuard};

/// One recorded host instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CharacterName(String),
    BackgroundImage(Option<String>),
    CharacterImage(Option<String>),
    CharacterVisible(bool),
    ClearText,
    SetText(String),
    ChoicePanelVisible(bool),
    ChoiceButtonVisible(usize, bool),
    ChoiceButtonText(usize, String),
    BindChoice(usize, ChoiceBinding),
    BeginTransition,
    EndTransition,
    LoadScene(String),
    Quit,
    OpenUrl(String),
}

/// Observable host state accumulated during a test.
#[derive(Debug, Default)]
pub struct HostLog {
    pub calls: Vec<HostCall>,
    /// Current dialogue text, tracking clear/append/set like a real label.
    pub text: String,
    pub choice_panel_visible: bool,
    pub bindings: Vec<Option<ChoiceBinding>>,
}

impl HostLog {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn position(&self, call: &HostCall) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }
}

/// Recording implementation of [`PresentationHost`], four choice buttons.
pub struct RecordingHost {
    log: Arc<Mutex<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> (Self, Arc<Mutex<HostLog>>) {
        let log = Arc::new(Mutex::new(HostLog::default()));
        (
            Self {
                log: Arc::clone(&log),
            },
            log,
        )
    }

    fn log(&self) -> MutexGuard<'_, HostLog> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PresentationHost for RecordingHost {
    fn set_character_name(&mut self, name: &str) {
        self.log()
            .calls
            .push(HostCall::CharacterName(name.to_string()));
    }

    fn set_background_image(&mut self, handle: Option<&str>) {
        self.log()
            .calls
            .push(HostCall::BackgroundImage(handle.map(str::to_string)));
    }

    fn set_character_image(&mut self, handle: Option<&str>) {
        self.log()
            .calls
            .push(HostCall::CharacterImage(handle.map(str::to_string)));
    }

    fn set_character_visible(&mut self, visible: bool) {
        self.log().calls.push(HostCall::CharacterVisible(visible));
    }

    fn clear_dialogue_text(&mut self) {
        let mut log = self.log();
        log.text.clear();
        log.calls.push(HostCall::ClearText);
    }

    fn append_dialogue_char(&mut self, ch: char) {
        self.log().text.push(ch);
    }

    fn set_dialogue_text(&mut self, text: &str) {
        let mut log = self.log();
        log.text = text.to_string();
        log.calls.push(HostCall::SetText(text.to_string()));
    }

    fn choice_button_count(&self) -> usize {
        4
    }

    fn set_choice_panel_visible(&mut self, visible: bool) {
        let mut log = self.log();
        log.choice_panel_visible = visible;
        log.bindings.clear();
        log.calls.push(HostCall::ChoicePanelVisible(visible));
    }

    fn set_choice_button_visible(&mut self, index: usize, visible: bool) {
        self.log()
            .calls
            .push(HostCall::ChoiceButtonVisible(index, visible));
    }

    fn set_choice_button_text(&mut self, index: usize, text: &str) {
        self.log()
            .calls
            .push(HostCall::ChoiceButtonText(index, text.to_string()));
    }

    fn bind_choice_handler(&mut self, index: usize, binding: ChoiceBinding) {
        let mut log = self.log();
        if log.bindings.len() <= index {
            log.bindings.resize(index + 1, None);
        }
        log.bindings[index] = Some(binding);
        log.calls.push(HostCall::BindChoice(index, binding));
    }

    fn begin_transition_effect(&mut self) {
        self.log().calls.push(HostCall::BeginTransition);
    }

    fn end_transition_effect(&mut self) {
        self.log().calls.push(HostCall::EndTransition);
    }

    fn load_scene(&mut self, name: &str) {
        self.log().calls.push(HostCall::LoadScene(name.to_string()));
    }

    fn quit_application(&mut self) {
        self.log().calls.push(HostCall::Quit);
    }

    fn open_url(&mut self, url: &str) {
        self.log().calls.push(HostCall::OpenUrl(url.to_string()));
    }

    fn toggle_target_visibility(&mut self) -> bool {
        false
    }
}
