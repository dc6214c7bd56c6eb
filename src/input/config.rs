#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for input normalization
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Gamepad axis magnitude above which a synthetic direction button is
    /// considered pressed
    pub axis_dead_zone: f32,

    /// Seconds an abstract button must stay held before auto-repeat starts
    pub repeat_initial_delay: f32,

    /// Seconds between auto-repeated typed events once repeating
    pub repeat_interval: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            axis_dead_zone: 0.4,
            repeat_initial_delay: 0.5,
            repeat_interval: 0.1,
        }
    }
}
