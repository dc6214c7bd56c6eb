use crate::math::point_distance;
use crate::physics::body::Body;
use crate::physics::forces::ForceGenerator;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// A Hookean spring between the target collider and a partner collider.
///
/// The restoring force is distributed between the two ends proportional to
/// inverse mass, so heavier bodies move less.
#[derive(Debug, Clone)]
pub struct SpringForceGenerator {
    partner: ColliderHandle,
    spring_constant: f32,
    rest_length: f32,
    enabled: bool,
}

impl SpringForceGenerator {
    /// Creates a new spring anchored to the partner collider
    pub fn new(partner: ColliderHandle, spring_constant: f32, rest_length: f32) -> Self {
        Self {
            partner,
            spring_constant,
            rest_length,
            enabled: true,
        }
    }

    /// Gets the partner collider
    pub fn partner(&self) -> ColliderHandle {
        self.partner
    }

    /// Gets the spring rest length
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Gets the spring constant
    pub fn spring_constant(&self) -> f32 {
        self.spring_constant
    }
}

impl ForceGenerator for SpringForceGenerator {
    fn generator_type(&self) -> &'static str {
        "Spring"
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
        if !self.enabled || self.partner == target {
            return Ok(());
        }

        let (target_pos, target_mass) = {
            let body = bodies.get_collider(target)?;
            (body.position(), body.mass())
        };
        let (partner_pos, partner_mass) = {
            let body = bodies.get_collider(self.partner)?;
            (body.position(), body.mass())
        };

        let (hdist, vdist) = (target_pos.x - partner_pos.x, target_pos.y - partner_pos.y);
        let mut magnitude = point_distance(0.0, 0.0, hdist, vdist);
        magnitude = (self.rest_length - magnitude) / 100.0;
        magnitude *= self.spring_constant;

        let (hforce, vforce) = (hdist * magnitude * delta, vdist * magnitude * delta);
        let mass_ratio = target_mass / (target_mass + partner_mass);

        bodies
            .get_collider_mut(target)?
            .add_force(hforce * (1.0 - mass_ratio), vforce * (1.0 - mass_ratio))?;
        bodies
            .get_collider_mut(self.partner)?
            .add_force(-hforce * mass_ratio, -vforce * mass_ratio)
    }
}
