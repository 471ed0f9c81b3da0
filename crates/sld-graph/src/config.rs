//! Engine tunables a host can embed in its own settings.

use serde::{Deserialize, Serialize};
use sld_core::Real;

pub const DEFAULT_HIT_THRESHOLD_PX: Real = 10.0;
pub const DEFAULT_TOUCH_HIT_THRESHOLD_PX: Real = 24.0;

/// Pointer device that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max distance (px) between pointer and wire that still counts as a hit.
    pub hit_threshold_px: Real,
    /// Same, for touch input.
    pub touch_hit_threshold_px: Real,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hit_threshold_px: DEFAULT_HIT_THRESHOLD_PX,
            touch_hit_threshold_px: DEFAULT_TOUCH_HIT_THRESHOLD_PX,
        }
    }
}

impl EngineConfig {
    pub fn threshold_for(&self, input: InputKind) -> Real {
        match input {
            InputKind::Mouse => self.hit_threshold_px,
            InputKind::Touch => self.touch_hit_threshold_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_per_input() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.threshold_for(InputKind::Mouse), 10.0);
        assert_eq!(cfg.threshold_for(InputKind::Touch), 24.0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"hit_threshold_px": 6.0}"#).unwrap();
        assert_eq!(cfg.hit_threshold_px, 6.0);
        assert_eq!(cfg.touch_hit_threshold_px, DEFAULT_TOUCH_HIT_THRESHOLD_PX);
    }
}
