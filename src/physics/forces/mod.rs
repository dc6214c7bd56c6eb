mod drag;
mod gravity;
mod spring;

pub use self::drag::DragForceGenerator;
pub use self::gravity::GravityForceGenerator;
pub use self::spring::SpringForceGenerator;

use crate::physics::body::Body;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// A per-tick force contributor.
///
/// Generators are invoked once per body per sub-step and contribute to the
/// body's force accumulator, pre-scaled by `delta`; calling with `delta = 0`
/// must not alter state.
pub trait ForceGenerator: std::fmt::Debug {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Returns whether the force generator is enabled
    fn is_enabled(&self) -> bool;

    /// Sets whether the force generator is enabled
    fn set_enabled(&mut self, enabled: bool);

    /// Contributes this generator's force to the target collider
    fn update_collider(
        &self,
        target: ColliderHandle,
        bodies: &mut ColliderStorage<Body>,
        delta: f32,
    ) -> Result<()>;
}
