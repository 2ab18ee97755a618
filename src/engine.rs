//! The dialogue sequencing and branching state machine.
//!
//! The engine owns the script and the current position, and mutates the
//! display purely through [`PresentationHost`] calls. Timing lives outside:
//! a driver (see [`crate::session`]) calls [`DialogueEngine::tick_typing`]
//! once per typing interval and [`DialogueEngine::finish_transition`] after
//! the transition effect has run its fixed duration.

use crate::error::SnapshotError;
use crate::host::{ChoiceBinding, PresentationHost};
use crate::script::{ChoiceAction, DialogueLine, Script, ANTI_SKIP_MARKER};
use crate::storage::Snapshot;

/// Number of consecutive skip requests allowed before the engine forces the
/// position back to the `"AntiSkip"` checkpoint line.
pub const SKIP_THRESHOLD: u32 = 5;

/// Per-line display phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Text reveal in progress; one character appears per typing tick.
    Typing,
    /// All characters revealed; waiting for an advance or a choice.
    FullyDisplayed,
    /// Scene change in progress; dialogue input is ignored until it completes.
    Transitioning,
    /// The session is over (scene loaded or application quit requested).
    Ended,
}

/// Single source of truth for "where are we in the script" and "what should
/// the host display right now".
pub struct DialogueEngine {
    script: Script,
    host: Box<dyn PresentationHost>,
    current: usize,
    skip_counter: u32,
    revealed: usize,
    phase: Phase,
    choices_active: bool,
    pending_scene: Option<String>,
}

impl DialogueEngine {
    pub fn new(script: Script, host: Box<dyn PresentationHost>) -> Self {
        Self {
            script,
            host,
            current: 0,
            skip_counter: 0,
            revealed: 0,
            phase: Phase::FullyDisplayed,
            choices_active: false,
            pending_scene: None,
        }
    }

    /// Display the first line. Call once at session start.
    pub fn start(&mut self) {
        self.show_line(0);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn skip_counter(&self) -> u32 {
        self.skip_counter
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Whether the choice panel is currently shown.
    pub fn choices_active(&self) -> bool {
        self.choices_active
    }

    /// Display the line at `index` and start its text reveal.
    ///
    /// Out-of-range indices are an authoring error and are silently ignored.
    /// Every call fully rebinds choice handlers, so re-entering a line via a
    /// jump can never leave a stale handler behind.
    pub fn show_line(&mut self, index: usize) {
        let Some(line) = self.script.get(index).cloned() else {
            log::debug!("show_line({index}) out of range for script of length {}", self.script.len());
            return;
        };
        log::debug!("showing line {index} (speaker '{}')", line.character_name);

        self.current = index;
        self.host.set_character_name(&line.character_name);
        self.host.set_background_image(line.background.as_deref());
        self.host.set_character_image(line.character_sprite.as_deref());
        self.host.set_character_visible(line.character_sprite.is_some());

        self.host.set_choice_panel_visible(false);
        self.choices_active = false;
        self.host.clear_dialogue_text();
        self.revealed = 0;
        // An empty message has nothing to type out.
        self.phase = if line.message.is_empty() {
            Phase::FullyDisplayed
        } else {
            Phase::Typing
        };

        if line.has_choices && !line.choices.is_empty() {
            self.choices_active = true;
            self.host.set_choice_panel_visible(true);
            let buttons = self.host.choice_button_count();
            for i in 0..buttons {
                match line.choices.get(i) {
                    Some(choice) => {
                        self.host.set_choice_button_visible(i, true);
                        self.host.set_choice_button_text(i, &choice.choice_text);
                        self.host.bind_choice_handler(
                            i,
                            ChoiceBinding {
                                line_index: index,
                                choice_index: i,
                            },
                        );
                    }
                    None => self.host.set_choice_button_visible(i, false),
                }
            }
        }
    }

    /// Reveal one more character of the current line.
    ///
    /// Returns true while the reveal is still in progress.
    pub fn tick_typing(&mut self) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        let message = match self.script.get(self.current) {
            Some(line) => line.message.clone(),
            None => return false,
        };
        if let Some(ch) = message.chars().nth(self.revealed) {
            self.host.append_dialogue_char(ch);
            self.revealed += 1;
        }
        if self.revealed >= message.chars().count() {
            self.phase = Phase::FullyDisplayed;
        }
        self.phase == Phase::Typing
    }

    /// Route a pointer click: skip the reveal while typing, advance otherwise.
    ///
    /// Clicks are ignored while the choice panel is open and while a
    /// transition is running.
    pub fn on_pointer_click(&mut self) {
        if self.choices_active {
            return;
        }
        self.advance();
    }

    /// Advance the presentation by one user-visible step.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::Transitioning | Phase::Ended => {}
            Phase::Typing => self.skip_typing(),
            Phase::FullyDisplayed => {
                if self.current < self.script.last_index() {
                    self.current += 1;
                    self.show_line(self.current);
                } else if let Some(line) = self.script.get(self.current).cloned() {
                    if line.is_end {
                        self.begin_transition(line.next_scene);
                    } else {
                        // Terminal line without an end marker: redisplay in place.
                        self.show_line(self.current);
                    }
                }
            }
        }
    }

    /// Short-circuit the reveal: show the full message at once.
    fn skip_typing(&mut self) {
        let message = match self.script.get(self.current) {
            Some(line) => line.message.clone(),
            None => return,
        };
        self.host.set_dialogue_text(&message);
        self.revealed = message.chars().count();
        self.phase = Phase::FullyDisplayed;
    }

    /// Resolve a selected choice against the binding captured at bind time.
    pub fn resolve_choice(&mut self, binding: ChoiceBinding) {
        if matches!(self.phase, Phase::Transitioning | Phase::Ended) {
            return;
        }
        if !self.choices_active {
            log::warn!("choice selected while no choice panel is active, ignoring");
            return;
        }
        if binding.line_index != self.current {
            log::warn!(
                "stale choice binding for line {} (current line {}), ignoring",
                binding.line_index,
                self.current
            );
            return;
        }
        let choice = match self
            .script
            .get(self.current)
            .and_then(|l| l.choices.get(binding.choice_index))
            .cloned()
        {
            Some(choice) => choice,
            None => {
                log::warn!(
                    "choice index {} out of range on line {}, ignoring",
                    binding.choice_index,
                    self.current
                );
                return;
            }
        };

        match choice.action_type {
            ChoiceAction::NextLine => match choice.action_value.trim().parse::<usize>() {
                Ok(target) if target < self.script.len() => {
                    log::debug!("choice jump: line {} -> {target}", self.current);
                    self.current = target;
                    self.show_line(target);
                }
                Ok(target) => {
                    log::warn!(
                        "nextLine target {target} out of range (script length {}), position unchanged",
                        self.script.len()
                    );
                }
                Err(_) => {
                    log::warn!(
                        "invalid nextLine value '{}', position unchanged",
                        choice.action_value
                    );
                }
            },
            ChoiceAction::LoadScene => self.begin_transition(choice.action_value),
            ChoiceAction::ExitGame => {
                self.host.quit_application();
                self.phase = Phase::Ended;
            }
        }
    }

    /// Fast-forward one line, with a bounded-skip checkpoint.
    ///
    /// Every fifth consecutive request resets the counter and jumps back to
    /// the first `"AntiSkip"` marker line, so repeated skipping cannot race
    /// past plot-critical content. Without a marker the reset keeps the
    /// position as-is. Plain increments clamp at the last line.
    pub fn skip(&mut self) {
        if matches!(self.phase, Phase::Transitioning | Phase::Ended) {
            return;
        }
        self.skip_counter += 1;
        if self.skip_counter >= SKIP_THRESHOLD {
            self.skip_counter = 0;
            match self.script.find_marker(ANTI_SKIP_MARKER) {
                Some(marker) => self.current = marker,
                None => log::debug!("no '{ANTI_SKIP_MARKER}' marker line, staying at {}", self.current),
            }
        } else if self.current < self.script.last_index() {
            self.current += 1;
        } else {
            log::debug!("skip clamped at last line {}", self.current);
        }
        self.show_line(self.current);
    }

    /// Start the transition protocol toward `scene`.
    fn begin_transition(&mut self, scene: String) {
        log::debug!("transition started toward scene '{scene}'");
        self.host.begin_transition_effect();
        self.pending_scene = Some(scene);
        self.phase = Phase::Transitioning;
    }

    /// Complete the transition protocol after the effect's fixed duration.
    ///
    /// Ends the visual effect and issues the single load-scene command.
    pub fn finish_transition(&mut self) {
        if self.phase != Phase::Transitioning {
            return;
        }
        self.host.end_transition_effect();
        if let Some(scene) = self.pending_scene.take() {
            self.host.load_scene(&scene);
        }
        self.phase = Phase::Ended;
    }

    /// Capture the restorable part of the session state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.current,
            skip_counter: self.skip_counter,
            script_digest: self.script.digest(),
        }
    }

    /// Restore a snapshot taken against the same script and redisplay.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let digest = self.script.digest();
        if snapshot.script_digest != digest {
            return Err(SnapshotError::DigestMismatch {
                snapshot: snapshot.script_digest.clone(),
                script: digest,
            });
        }
        if snapshot.index >= self.script.len() {
            return Err(SnapshotError::IndexOutOfRange {
                index: snapshot.index,
                len: self.script.len(),
            });
        }
        self.skip_counter = snapshot.skip_counter;
        self.pending_scene = None;
        self.show_line(snapshot.index);
        Ok(())
    }

    /// Fully reveal the current line without host involvement in timing.
    ///
    /// Convenience for hosts that do not animate the reveal.
    pub fn reveal_all(&mut self) {
        while self.tick_typing() {}
    }

    /// Line currently displayed, if the engine has started.
    pub fn current_line(&self) -> Option<&DialogueLine> {
        self.script.get(self.current)
    }
}
