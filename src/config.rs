//! Coordinator settings
//!
//! Everything here is optional in JSON: missing fields fall back to the
//! defaults below, so an empty object is a valid configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What to do when a contact starts under an identifier that is still live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateStart {
    /// Discard the whole sequence.
    #[default]
    Reset,
    /// Replace the live record with a fresh one and keep going.
    Restart,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub duplicate_start: DuplicateStart,

    /// Clear contact records once every contact has ended
    #[serde(default = "default_true")]
    pub reset_when_idle: bool,

    /// Call `preventDefault` on events the region handles
    #[serde(default = "default_true")]
    pub prevent_default: bool,

    #[serde(default)]
    pub gestures: GestureOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duplicate_start: DuplicateStart::default(),
            reset_when_idle: true,
            prevent_default: true,
            gestures: GestureOptions::default(),
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_duplicate_start(mut self, policy: DuplicateStart) -> Self {
        self.duplicate_start = policy;
        self
    }
}

/// Options handed to each built-in interpreter at construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureOptions {
    #[serde(default)]
    pub tap: TapOptions,
    #[serde(default)]
    pub pan: PanOptions,
    #[serde(default)]
    pub distance: DistanceOptions,
    #[serde(default)]
    pub rotate: RotateOptions,
    #[serde(default)]
    pub swipe: SwipeOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapOptions {
    pub max_delay_ms: f64,
    pub min_delay_ms: f64,
    pub num_inputs: usize,
    /// Pixels a contact may wander and still count as a tap.
    pub tolerance: f64,
}

impl Default for TapOptions {
    fn default() -> Self {
        Self {
            max_delay_ms: 300.0,
            min_delay_ms: 0.0,
            num_inputs: 1,
            tolerance: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanOptions {
    pub num_inputs: usize,
    pub threshold: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            num_inputs: 1,
            threshold: 1.0,
        }
    }
}

/// Shared by pinch and expand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceOptions {
    pub threshold: f64,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self { threshold: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateOptions {
    pub num_inputs: usize,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self { num_inputs: 2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeOptions {
    pub num_inputs: usize,
    pub max_rest_time_ms: f64,
    pub escape_velocity: f64,
    pub time_distortion: f64,
    pub max_progress_stack: usize,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            num_inputs: 1,
            max_rest_time_ms: 100.0,
            escape_velocity: 0.2,
            time_distortion: 100.0,
            max_progress_stack: 10,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.reset_when_idle);
        assert_eq!(settings.duplicate_start, DuplicateStart::Reset);
        assert_eq!(settings.gestures.rotate.num_inputs, 2);
    }

    #[test]
    fn partial_gesture_options_keep_remaining_defaults() {
        let settings = Settings::from_json(
            r#"{"duplicate_start": "restart", "gestures": {"tap": {"max_delay_ms": 500}}}"#,
        )
        .unwrap();
        assert_eq!(settings.duplicate_start, DuplicateStart::Restart);
        assert_eq!(settings.gestures.tap.max_delay_ms, 500.0);
        assert_eq!(settings.gestures.tap.tolerance, 10.0);
        assert_eq!(settings.gestures.swipe, SwipeOptions::default());
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = Settings::from_json("{\"reset_when_idle\": 3}").unwrap_err();
        assert!(matches!(err, crate::error::GestureError::Settings(_)));
    }

    #[test]
    fn settings_survive_persistence() {
        let settings = Settings::default().with_duplicate_start(DuplicateStart::Restart);
        let raw = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&raw).unwrap(), settings);
    }
}
