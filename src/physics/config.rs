#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PhysicsConfig {
    /// Extra penetration added to every contact so that a pair resolved to the
    /// exact boundary does not re-collide on the next frame
    pub penetration_epsilon: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            penetration_epsilon: 0.01,
        }
    }
}
