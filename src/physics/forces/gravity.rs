use crate::math::EPSILON;
use crate::physics::body::Body;
use crate::physics::forces::ForceGenerator;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// Default downward gravity, in velocity units per second per second
const DEFAULT_VGRAVITY: f32 = 98.0;

/// Scaling constant for point-source gravity
const POINT_GRAVITY_CONSTANT: f32 = 6.674e-2;

/// A force generator that applies constant-vector or point-source gravity
#[derive(Debug, Clone)]
pub struct GravityForceGenerator {
    hgravity: f32,
    vgravity: f32,

    /// When set, gravity pulls toward this collider instead of along the
    /// constant vector
    towards: Option<ColliderHandle>,

    enabled: bool,
}

impl GravityForceGenerator {
    /// Creates a gravity generator with the default downward pull
    pub fn new() -> Self {
        Self::with_components(0.0, DEFAULT_VGRAVITY)
    }

    /// Creates a vertical-only gravity generator
    pub fn vertical(vgravity: f32) -> Self {
        Self::with_components(0.0, vgravity)
    }

    /// Creates a gravity generator with explicit horizontal and vertical components
    pub fn with_components(hgravity: f32, vgravity: f32) -> Self {
        Self {
            hgravity,
            vgravity,
            towards: None,
            enabled: true,
        }
    }

    /// Creates a point-source gravity generator pulling toward another collider
    pub fn towards(target: ColliderHandle) -> Self {
        Self {
            hgravity: 0.0,
            vgravity: 0.0,
            towards: Some(target),
            enabled: true,
        }
    }

    /// Gets the constant gravity components
    pub fn components(&self) -> (f32, f32) {
        (self.hgravity, self.vgravity)
    }

    /// Sets the constant gravity components
    pub fn set_components(&mut self, hgravity: f32, vgravity: f32) {
        self.hgravity = hgravity;
        self.vgravity = vgravity;
    }
}

impl Default for GravityForceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceGenerator for GravityForceGenerator {
    fn generator_type(&self) -> &'static str {
        "Gravity"
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

        let (hgrav, vgrav) = match self.towards {
            Some(source) => {
                // Gravity toward the source collider falls off with distance.
                if source == target {
                    return Ok(());
                }
                let (source_center, source_mass) = {
                    let body = bodies.get_collider(source)?;
                    (body.center(), body.mass())
                };
                let body = bodies.get_collider(target)?;
                let to_source = source_center - body.center();
                let distance = to_source.length();
                if distance < EPSILON {
                    return Ok(());
                }
                let magnitude =
                    POINT_GRAVITY_CONSTANT * body.mass() * source_mass / distance;
                let direction = to_source / distance;
                (direction.x * magnitude, direction.y * magnitude)
            }
            None => (self.hgravity, self.vgravity),
        };

        bodies
            .get_collider_mut(target)?
            .add_force(hgrav * delta, vgrav * delta)
    }
}
