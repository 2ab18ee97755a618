//! Async session driver: timing and input delivery for the engine.
//!
//! The engine itself is a synchronous state machine; this module supplies
//! the cooperative scheduling around it. Exactly one logical task runs at a
//! time. While typing, the driver races the per-character delay against the
//! input channel, so an arriving event drops the in-flight delay (the
//! cancel-on-restart rule). The transition effect always runs its full
//! duration; input arriving during it is discarded rather than queued.

use crate::config::EngineConfig;
use crate::engine::{DialogueEngine, Phase};
use crate::host::ChoiceBinding;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Input events a frontend feeds into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click: skip the reveal while typing, advance otherwise.
    PointerClick,
    /// A bound choice button was invoked.
    ChoiceSelected(ChoiceBinding),
    /// The skip control was pressed.
    SkipRequested,
}

/// Owns an engine and drives it from a channel of input events.
pub struct Session {
    engine: DialogueEngine,
    events: mpsc::Receiver<InputEvent>,
    config: EngineConfig,
}

impl Session {
    pub fn new(
        engine: DialogueEngine,
        events: mpsc::Receiver<InputEvent>,
        config: EngineConfig,
    ) -> Self {
        Self {
            engine,
            events,
            config,
        }
    }

    /// Run the dialogue session to completion.
    ///
    /// Returns the engine so callers can inspect or snapshot the final
    /// state. The session ends when the engine reaches [`Phase::Ended`] or
    /// every event sender is dropped.
    pub async fn run(mut self) -> DialogueEngine {
        self.engine.start();
        loop {
            match self.engine.phase() {
                Phase::Typing => {
                    tokio::select! {
                        _ = sleep(self.config.typing_speed()) => {
                            self.engine.tick_typing();
                        }
                        event = self.events.recv() => match event {
                            Some(event) => self.dispatch(event),
                            None => break,
                        },
                    }
                }
                Phase::FullyDisplayed => match self.events.recv().await {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
                Phase::Transitioning => {
                    sleep(self.config.transition_duration()).await;
                    // Anything that arrived during the effect is ignored.
                    while self.events.try_recv().is_ok() {}
                    self.engine.finish_transition();
                }
                Phase::Ended => break,
            }
        }
        self.engine
    }

    fn dispatch(&mut self, event: InputEvent) {
        log::debug!("input event: {event:?}");
        match event {
            InputEvent::PointerClick => self.engine.on_pointer_click(),
            InputEvent::ChoiceSelected(binding) => self.engine.resolve_choice(binding),
            InputEvent::SkipRequested => self.engine.skip(),
        }
    }
}
