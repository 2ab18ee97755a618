//! # kataribe
//!
//! A visual-novel-style dialogue presentation engine: it steps through a
//! scripted sequence of dialogue lines, types text out progressively, offers
//! branching choices, and transitions between scenes with a transient visual
//! effect. The engine renders nothing itself; every display instruction goes
//! through an injected [`PresentationHost`].
//!
//! ## Quick start
//!
//! ```rust
//! use kataribe::{DialogueEngine, NullHost, Phase, Script};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let script = Script::from_json(r#"[
//!     {"characterName": "Ayumi", "message": "Hello!"},
//!     {"characterName": "Ayumi", "message": "Bye.", "isEnd": true, "nextScene": "Credits"}
//! ]"#)?;
//!
//! let mut engine = DialogueEngine::new(script, Box::new(NullHost));
//! engine.start();
//! assert_eq!(engine.phase(), Phase::Typing);
//!
//! engine.advance(); // short-circuit the reveal
//! assert_eq!(engine.phase(), Phase::FullyDisplayed);
//!
//! engine.advance(); // move to the last line
//! engine.advance(); // reveal it
//! engine.advance(); // trigger the scene transition
//! assert_eq!(engine.phase(), Phase::Transitioning);
//!
//! engine.finish_transition(); // effect done: loads "Credits"
//! assert_eq!(engine.phase(), Phase::Ended);
//! # Ok(())
//! # }
//! ```
//!
//! For timed playback (per-character typing cadence, fixed-duration scene
//! transitions), wrap the engine in a [`Session`] and feed it
//! [`InputEvent`]s through a channel.

pub mod actions;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod script;
pub mod session;
pub mod storage;

pub use config::EngineConfig;
pub use engine::{DialogueEngine, Phase, SKIP_THRESHOLD};
pub use error::{ScriptError, SnapshotError, StorageError};
pub use host::{ChoiceBinding, NullHost, PresentationHost};
pub use script::{ANTI_SKIP_MARKER, Choice, ChoiceAction, DialogueLine, Script};
pub use session::{InputEvent, Session};
pub use storage::{FileScriptRepository, ScriptRepository, Snapshot};
