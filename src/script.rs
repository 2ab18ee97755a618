//! Script data model: dialogue lines, choices, and the ordered script.

use crate::error::ScriptError;
use serde::{Deserialize, Serialize};

/// Reserved character name marking the line that bounded skipping jumps to.
pub const ANTI_SKIP_MARKER: &str = "AntiSkip";

/// One scripted beat: speaker, text, visuals, and optional choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogueLine {
    /// Speaker label. Also doubles as a marker name for skip targeting.
    pub character_name: String,
    /// Text revealed progressively while the line is typed out.
    pub message: String,
    /// Logical handle of the character sprite, hidden when absent.
    pub character_sprite: Option<String>,
    /// Logical handle of the background image.
    pub background: Option<String>,
    /// Whether this line presents a choice panel.
    pub has_choices: bool,
    /// Branch options, only rendered when `has_choices` is set.
    pub choices: Vec<Choice>,
    /// Whether reaching the end of the script on this line triggers a scene change.
    pub is_end: bool,
    /// Target scene, meaningful only when `is_end` is set.
    pub next_scene: String,
}

/// One branch option on a dialogue line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Label shown on the choice button.
    pub choice_text: String,
    /// What selecting this choice does.
    pub action_type: ChoiceAction,
    /// Interpreted per action: a line index (NextLine) or a scene name (LoadScene).
    #[serde(default)]
    pub action_value: String,
}

/// The action a choice performs when selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceAction {
    /// Jump to the line index in `action_value`.
    NextLine,
    /// Transition to the scene named in `action_value`.
    LoadScene,
    /// Terminate the application.
    ExitGame,
}

/// An ordered, immutable sequence of dialogue lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Script {
    lines: Vec<DialogueLine>,
}

impl Script {
    /// Create a script from authored lines. Empty scripts are rejected.
    pub fn new(lines: Vec<DialogueLine>) -> Result<Self, ScriptError> {
        if lines.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { lines })
    }

    /// Parse a script from its authored JSON form (an array of lines).
    pub fn from_json(src: &str) -> Result<Self, ScriptError> {
        let lines: Vec<DialogueLine> = serde_json::from_str(src)?;
        Self::new(lines)
    }

    pub fn get(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line. Scripts are never empty.
    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Linear scan for the first line whose character name equals `marker`.
    pub fn find_marker(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.character_name == marker)
    }

    /// Content digest used to guard snapshots against script mismatches.
    pub fn digest(&self) -> String {
        // Serialization of the line list is deterministic, so the digest is stable.
        let bytes = serde_json::to_vec(&self.lines).unwrap_or_default();
        format!("{:x}", md5::compute(&bytes))
    }

    /// Authoring checks that are warnings at runtime but worth surfacing early.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            if line.has_choices && line.choices.is_empty() {
                warnings.push(format!("line {i}: hasChoices is set but choices is empty"));
            }
            if line.is_end && line.next_scene.is_empty() {
                warnings.push(format!("line {i}: isEnd is set but nextScene is empty"));
            }
            for (c, choice) in line.choices.iter().enumerate() {
                if choice.action_type == ChoiceAction::NextLine {
                    match choice.action_value.trim().parse::<usize>() {
                        Ok(target) if target < self.lines.len() => {}
                        Ok(target) => warnings.push(format!(
                            "line {i}, choice {c}: nextLine target {target} out of range (script length {})",
                            self.lines.len()
                        )),
                        Err(_) => warnings.push(format!(
                            "line {i}, choice {c}: nextLine value '{}' is not an integer",
                            choice.action_value
                        )),
                    }
                }
            }
        }
        warnings
    }
}
