//! Timing configuration for the session driver.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs for the typing reveal and the scene-transition effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Delay between revealed characters, in milliseconds.
    pub typing_speed_ms: u64,
    /// Fixed duration of the scene-transition effect, in milliseconds.
    pub transition_ms: u64,
}

impl EngineConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 20,
            transition_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig = serde_json::from_str(r#"{"typingSpeedMs": 5}"#).unwrap();
        assert_eq!(config.typing_speed(), Duration::from_millis(5));
        assert_eq!(config.transition_duration(), Duration::from_millis(1000));
    }
}
