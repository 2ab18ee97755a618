//! The presentation host seam: everything the engine asks its environment to do.
//!
//! The engine never renders anything itself. All display mutations, scene
//! changes, and application-level requests go through [`PresentationHost`],
//! which a frontend (terminal, game engine, test double) implements.

use serde::{Deserialize, Serialize};

/// Identifies one choice button binding, captured by value at bind time.
///
/// Carrying the line index alongside the choice index lets the engine reject
/// a handler that fires after the script has already moved to another line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceBinding {
    pub line_index: usize,
    pub choice_index: usize,
}

/// Operations the engine calls on its environment.
///
/// Implementations should treat every call as a plain display instruction;
/// sequencing decisions stay inside the engine.
pub trait PresentationHost: Send {
    fn set_character_name(&mut self, name: &str);
    fn set_background_image(&mut self, handle: Option<&str>);
    fn set_character_image(&mut self, handle: Option<&str>);
    fn set_character_visible(&mut self, visible: bool);

    fn clear_dialogue_text(&mut self);
    fn append_dialogue_char(&mut self, ch: char);
    fn set_dialogue_text(&mut self, text: &str);

    /// Number of choice buttons the host renders. Buttons beyond the number
    /// of choices on the current line are hidden.
    fn choice_button_count(&self) -> usize;
    fn set_choice_panel_visible(&mut self, visible: bool);
    fn set_choice_button_visible(&mut self, index: usize, visible: bool);
    fn set_choice_button_text(&mut self, index: usize, text: &str);
    fn bind_choice_handler(&mut self, index: usize, binding: ChoiceBinding);

    fn begin_transition_effect(&mut self);
    fn end_transition_effect(&mut self);
    fn load_scene(&mut self, name: &str);
    fn quit_application(&mut self);

    fn open_url(&mut self, url: &str);
    /// Toggle the host's optional toggle target. Returns false when no
    /// target is assigned, in which case the caller logs and skips.
    fn toggle_target_visibility(&mut self) -> bool;
}

/// A host that discards every instruction. Useful for headless stepping.
#[derive(Debug, Default)]
pub struct NullHost;

impl PresentationHost for NullHost {
    fn set_character_name(&mut self, _name: &str) {}
    fn set_background_image(&mut self, _handle: Option<&str>) {}
    fn set_character_image(&mut self, _handle: Option<&str>) {}
    fn set_character_visible(&mut self, _visible: bool) {}

    fn clear_dialogue_text(&mut self) {}
    fn append_dialogue_char(&mut self, _ch: char) {}
    fn set_dialogue_text(&mut self, _text: &str) {}

    fn choice_button_count(&self) -> usize {
        4
    }
    fn set_choice_panel_visible(&mut self, _visible: bool) {}
    fn set_choice_button_visible(&mut self, _index: usize, _visible: bool) {}
    fn set_choice_button_text(&mut self, _index: usize, _text: &str) {}
    fn bind_choice_handler(&mut self, _index: usize, _binding: ChoiceBinding) {}

    fn begin_transition_effect(&mut self) {}
    fn end_transition_effect(&mut self) {}
    fn load_scene(&mut self, _name: &str) {}
    fn quit_application(&mut self) {}

    fn open_url(&mut self, _url: &str) {}
    fn toggle_target_visibility(&mut self) -> bool {
        false
    }
}
