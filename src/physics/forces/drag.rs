use crate::physics::body::Body;
use crate::physics::forces::ForceGenerator;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// A force generator that applies quadratic drag opposing the body's motion
#[derive(Debug, Clone)]
pub struct DragForceGenerator {
    /// Linear drag coefficient (k1 * v)
    pub k1: f32,

    /// Quadratic drag coefficient (k2 * v^2)
    pub k2: f32,

    enabled: bool,
}

impl DragForceGenerator {
    /// Creates a new drag force generator with the given coefficients
    pub fn new(k1: f32, k2: f32) -> Self {
        Self {
            k1,
            k2,
            enabled: true,
        }
    }
}

impl ForceGenerator for DragForceGenerator {
    fn generator_type(&self) -> &'static str {
        "Drag"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update_collider(
        &self,
        target: ColliderHandle,
        bodies: &mut ColliderStorage<Body>,
        delta: f32,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let body = bodies.get_collider(target)?;
        if body.is_fixed() || body.speed() == 0.0 {
            return Ok(());
        }

        let scaled_speed = body.speed() / 100.0;
        let mut drag_coefficient =
            self.k1 * scaled_speed + self.k2 * scaled_speed * scaled_speed;
        // One step of drag may cancel the current velocity but never reverse it.
        if drag_coefficient > scaled_speed {
            drag_coefficient = scaled_speed;
        }

        let (nhspeed, nvspeed) = (
            body.hspeed() / scaled_speed,
            body.vspeed() / scaled_speed,
        );
        let (hdrag, vdrag) = (-nhspeed * drag_coefficient, -nvspeed * drag_coefficient);

        bodies
            .get_collider_mut(target)?
            .add_force(hdrag * delta, vdrag * delta)
    }
}
