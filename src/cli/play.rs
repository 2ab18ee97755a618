//! Interactive terminal player.
//!
//! Implements [`PresentationHost`] over stdout and feeds stdin input into a
//! [`Session`]. The typing effect prints one character per tick; choices are
//! picked with the digit keys.

use crate::config::EngineConfig;
use crate::engine::DialogueEngine;
use crate::host::{ChoiceBinding, PresentationHost};
use crate::script::Script;
use crate::session::{InputEvent, Session};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

const CHOICE_BUTTONS: usize = 4;

#[derive(Debug, Default)]
struct TerminalState {
    speaker: String,
    last_background: Option<String>,
    bindings: Vec<Option<ChoiceBinding>>,
}

/// Stdout implementation of the presentation host.
///
/// State is shared with the stdin reader so a digit key can be translated
/// into the binding that was captured when the button was bound.
pub struct TerminalHost {
    shared: Arc<Mutex<TerminalState>>,
}

impl TerminalHost {
    fn new(shared: Arc<Mutex<TerminalState>>) -> Self {
        Self { shared }
    }

    fn state(&self) -> MutexGuard<'_, TerminalState> {
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn flush() {
        let _ = io::stdout().flush();
    }
}

impl PresentationHost for TerminalHost {
    fn set_character_name(&mut self, name: &str) {
        self.state().speaker = name.to_string();
    }

    fn set_background_image(&mut self, handle: Option<&str>) {
        let mut state = self.state();
        let handle = handle.map(str::to_string);
        if handle != state.last_background {
            if let Some(name) = &handle {
                println!("[Background: {name}]");
            }
            state.last_background = handle;
        }
    }

    fn set_character_image(&mut self, _handle: Option<&str>) {}

    fn set_character_visible(&mut self, _visible: bool) {}

    fn clear_dialogue_text(&mut self) {
        let speaker = self.state().speaker.clone();
        print!("\n{speaker}: ");
        Self::flush();
    }

    fn append_dialogue_char(&mut self, ch: char) {
        print!("{ch}");
        Self::flush();
    }

    fn set_dialogue_text(&mut self, text: &str) {
        let speaker = self.state().speaker.clone();
        // Rewrite the current line so a skipped reveal shows the full text once.
        print!("\r\x1b[K{speaker}: {text}");
        Self::flush();
    }

    fn choice_button_count(&self) -> usize {
        CHOICE_BUTTONS
    }

    fn set_choice_panel_visible(&mut self, visible: bool) {
        self.state().bindings.clear();
        if visible {
            println!("\n--- Choice ---");
        }
    }

    fn set_choice_button_visible(&mut self, _index: usize, _visible: bool) {}

    fn set_choice_button_text(&mut self, index: usize, text: &str) {
        println!("{}. {text}", index + 1);
    }

    fn bind_choice_handler(&mut self, index: usize, binding: ChoiceBinding) {
        let mut state = self.state();
        if state.bindings.len() <= index {
            state.bindings.resize(index + 1, None);
        }
        state.bindings[index] = Some(binding);
    }

    fn begin_transition_effect(&mut self) {
        println!("\n[transition]");
    }

    fn end_transition_effect(&mut self) {
        println!("[transition done]");
    }

    fn load_scene(&mut self, name: &str) {
        println!("[Scene: {name}]");
    }

    fn quit_application(&mut self) {
        println!("\nGoodbye!");
    }

    fn open_url(&mut self, url: &str) {
        println!("[Open: {url}]");
    }

    fn toggle_target_visibility(&mut self) -> bool {
        false
    }
}

/// Play a script interactively in the terminal.
pub async fn run_play(script: Script, config: EngineConfig) -> anyhow::Result<()> {
    for warning in script.lint() {
        eprintln!("warning: {warning}");
    }

    let shared = Arc::new(Mutex::new(TerminalState::default()));
    let host = TerminalHost::new(Arc::clone(&shared));
    let engine = DialogueEngine::new(script, Box::new(host));
    let (tx, rx) = mpsc::channel(16);

    println!("=== kataribe player ===");
    println!();
    println!("Controls:");
    println!("  Enter: next / skip typing");
    println!("  1-{CHOICE_BUTTONS}:   select choice");
    println!("  s:     skip forward");
    println!("  q:     quit");

    tokio::task::spawn_blocking(move || read_input(shared, tx));

    Session::new(engine, rx, config).run().await;
    println!();
    println!("== THE END ==");
    Ok(())
}

/// Blocking stdin loop translating lines into input events.
fn read_input(shared: Arc<Mutex<TerminalState>>, tx: mpsc::Sender<InputEvent>) {
    let stdin = io::stdin();
    loop {
        let mut line = String::new();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let event = match line.trim() {
            "q" => break,
            "" => InputEvent::PointerClick,
            "s" => InputEvent::SkipRequested,
            digit => match digit.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    let binding = shared
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner())
                        .bindings
                        .get(n - 1)
                        .copied()
                        .flatten();
                    match binding {
                        Some(binding) => InputEvent::ChoiceSelected(binding),
                        None => {
                            println!("No such choice.");
                            continue;
                        }
                    }
                }
                _ => {
                    println!("Press Enter, a choice number, 's', or 'q'.");
                    continue;
                }
            },
        };
        if tx.blocking_send(event).is_err() {
            break;
        }
    }
}
