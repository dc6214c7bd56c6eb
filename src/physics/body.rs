use bitflags::bitflags;

use crate::error::EngineError;
use crate::math::{self, Vector2};
use crate::physics::contact::ContactId;
use crate::physics::forces::ForceGenerator;
use crate::physics::shape::Shape;
use crate::physics::storage::ColliderHandle;
use crate::Result;

bitflags! {
    /// Flags for controlling the behavior of physics bodies
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BodyFlags: u32 {
        /// Body has infinite mass and is never moved by collisions or forces
        const FIXED = 0x01;

        /// Body detects overlap but produces no physical response
        const TRIGGER = 0x02;
    }
}

/// Gate for positional penetration correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionCorrection {
    /// Correction is applied every sub-step
    #[default]
    Always,

    /// Correction is applied for one more sub-step, then stops.
    ///
    /// Used for one-time separation of bodies spawned overlapping.
    Once,

    /// Correction is never applied
    Never,
}

/// A physics-enabled body: collision shape, kinematic state, and the
/// force/impulse accumulators drained by the space each sub-step.
#[derive(Debug)]
pub struct Body {
    x: f32,
    y: f32,

    // Kinematic state, kept mutually consistent: direction is degrees with
    // y-down screen convention, so vspeed = -sin(direction) * speed.
    direction: f32,
    speed: f32,
    hspeed: f32,
    vspeed: f32,

    mass: f32,
    flags: BodyFlags,
    shape: Shape,
    position_correction: PositionCorrection,

    force_accum: Vector2,
    impulse_accum: Vector2,
    collision_impulse: Vector2,
    impulse_count: u32,

    contacts: Vec<ContactId>,
    triggers: Vec<ColliderHandle>,

    generators: Vec<Box<dyn ForceGenerator>>,
}

impl Body {
    /// Creates a new body with the given shape.
    ///
    /// Mass defaults to the shape's area.
    pub fn new(shape: Shape) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            direction: 0.0,
            speed: 0.0,
            hspeed: 0.0,
            vspeed: 0.0,
            mass: shape.default_mass(),
            flags: BodyFlags::empty(),
            shape,
            position_correction: PositionCorrection::default(),
            force_accum: Vector2::zero(),
            impulse_accum: Vector2::zero(),
            collision_impulse: Vector2::zero(),
            impulse_count: 0,
            contacts: Vec::new(),
            triggers: Vec::new(),
            generators: Vec::new(),
        }
    }

    /// Creates a new body with an explicit mass
    pub fn with_mass(shape: Shape, mass: f32) -> Self {
        let mut body = Self::new(shape);
        body.mass = mass;
        body
    }

    /// Creates a new fixed body: it participates in collisions but is never moved
    pub fn new_fixed(shape: Shape) -> Self {
        let mut body = Self::new(shape);
        body.flags |= BodyFlags::FIXED;
        body
    }

    /// Creates a new trigger body: it detects overlap but produces no response
    pub fn new_trigger(shape: Shape) -> Self {
        let mut body = Self::new(shape);
        body.flags |= BodyFlags::TRIGGER;
        body
    }

    /// Gets the x position
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Sets the x position
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Gets the y position
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Sets the y position
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Gets the position as a vector
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Sets the position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// The world-space center of the collision shape
    pub fn center(&self) -> Vector2 {
        self.position() + self.shape.offset()
    }

    /// Gets the movement direction in degrees
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Sets the movement direction in degrees, wrapped into `[0, 360)`
    pub fn set_direction(&mut self, direction: f32) {
        let direction = math::fmod(direction, 360.0);
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.update_hv_speed();
    }

    /// Gets the movement speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the movement speed.
    ///
    /// Negative speeds are a usage error; reverse the direction instead.
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if speed < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "Invalid speed: {}. Must be >= 0",
                speed
            )));
        }
        if self.speed != speed {
            self.speed = speed;
            self.update_hv_speed();
        }
        Ok(())
    }

    /// Gets the horizontal velocity component
    pub fn hspeed(&self) -> f32 {
        self.hspeed
    }

    /// Sets the horizontal velocity component
    pub fn set_hspeed(&mut self, hspeed: f32) {
        if self.hspeed == hspeed {
            return;
        }
        self.hspeed = hspeed;
        self.update_direction_and_speed();
    }

    /// Gets the vertical velocity component
    pub fn vspeed(&self) -> f32 {
        self.vspeed
    }

    /// Sets the vertical velocity component
    pub fn set_vspeed(&mut self, vspeed: f32) {
        if self.vspeed == vspeed {
            return;
        }
        self.vspeed = vspeed;
        self.update_direction_and_speed();
    }

    /// Gets the velocity as a vector
    pub fn velocity(&self) -> Vector2 {
        Vector2::new(self.hspeed, self.vspeed)
    }

    /// Sets both velocity components at once
    pub fn set_velocity(&mut self, velocity: Vector2) {
        if self.hspeed == velocity.x && self.vspeed == velocity.y {
            return;
        }
        self.hspeed = velocity.x;
        self.vspeed = velocity.y;
        self.update_direction_and_speed();
    }

    fn update_hv_speed(&mut self) {
        let radians = math::to_radians(self.direction);
        self.vspeed = -radians.sin() * self.speed;
        self.hspeed = radians.cos() * self.speed;
    }

    fn update_direction_and_speed(&mut self) {
        self.speed = (self.hspeed * self.hspeed + self.vspeed * self.vspeed).sqrt();
        if self.speed == 0.0 {
            return;
        }
        self.direction = math::point_direction(0.0, 0.0, self.hspeed, self.vspeed);
    }

    /// Gets the mass
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        if !(mass > 0.0) {
            return Err(EngineError::InvalidParameter(format!(
                "Invalid mass: {}. Must be > 0",
                mass
            )));
        }
        self.mass = mass;
        Ok(())
    }

    /// Returns whether this body is fixed (infinite mass, never moved)
    pub fn is_fixed(&self) -> bool {
        self.flags.contains(BodyFlags::FIXED)
    }

    /// Sets whether this body is fixed
    pub fn set_fixed(&mut self, fixed: bool) {
        self.flags.set(BodyFlags::FIXED, fixed);
    }

    /// Returns whether this body is a trigger
    pub fn is_trigger(&self) -> bool {
        self.flags.contains(BodyFlags::TRIGGER)
    }

    /// Sets whether this body is a trigger
    pub fn set_trigger(&mut self, trigger: bool) {
        self.flags.set(BodyFlags::TRIGGER, trigger);
    }

    /// Gets the collision shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Gets the positional-correction gate
    pub fn position_correction(&self) -> PositionCorrection {
        self.position_correction
    }

    /// Sets the positional-correction gate
    pub fn set_position_correction(&mut self, correction: PositionCorrection) {
        self.position_correction = correction;
    }

    /// Contacts generated against this body in the current sub-step
    pub fn contacts(&self) -> &[ContactId] {
        &self.contacts
    }

    /// Overlapping trigger partners recorded this sub-step
    pub fn triggers(&self) -> &[ColliderHandle] {
        &self.triggers
    }

    /// Adds a body-local force generator, run after the scene-global ones
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) {
        self.generators.push(generator);
    }

    /// The body-local force generators
    pub fn generators(&self) -> &[Box<dyn ForceGenerator>] {
        &self.generators
    }

    /// Accumulates a continuous force.
    ///
    /// No-op for fixed bodies; rejects NaN components.
    pub fn add_force(&mut self, fx: f32, fy: f32) -> Result<()> {
        if self.is_fixed() {
            return Ok(());
        }
        if fx.is_nan() || fy.is_nan() {
            return Err(EngineError::InvalidParameter(format!(
                "Invalid force: ({}, {})",
                fx, fy
            )));
        }
        self.force_accum += Vector2::new(fx, fy);
        Ok(())
    }

    /// Accumulates an instantaneous positional impulse.
    ///
    /// No-op for fixed bodies; rejects NaN components.
    pub fn add_impulse(&mut self, ix: f32, iy: f32) -> Result<()> {
        if self.is_fixed() {
            return Ok(());
        }
        if ix.is_nan() || iy.is_nan() {
            return Err(EngineError::InvalidParameter(format!(
                "Invalid impulse: ({}, {})",
                ix, iy
            )));
        }
        self.impulse_accum += Vector2::new(ix, iy);
        Ok(())
    }

    /// Empties the contact and trigger bookkeeping; called once per sub-step
    /// before the broad phase
    pub fn clear_contacts(&mut self) {
        self.contacts.clear();
        self.triggers.clear();
    }

    /// Drains the averaged positional correction into the impulse accumulator.
    ///
    /// A no-op when no collision impulses were recorded this sub-step.
    /// Averaging keeps multi-contact penetration correction from being
    /// double-counted.
    pub fn resolve_impulses(&mut self) -> Result<()> {
        if self.impulse_count == 0 {
            return Ok(());
        }
        let average = self.collision_impulse / self.impulse_count as f32;
        self.collision_impulse = Vector2::zero();
        self.impulse_count = 0;
        self.add_impulse(average.x, average.y)
    }

    /// The running positional-correction sum for the current sub-step
    pub fn collision_impulse(&self) -> Vector2 {
        self.collision_impulse
    }

    /// The number of collision impulses recorded this sub-step
    pub fn impulse_count(&self) -> u32 {
        self.impulse_count
    }

    pub(crate) fn record_contact(&mut self, id: ContactId) {
        self.contacts.push(id);
    }

    pub(crate) fn record_trigger(&mut self, partner: ColliderHandle) {
        self.triggers.push(partner);
    }

    pub(crate) fn accumulate_collision_impulse(&mut self, impulse: Vector2) {
        if self.position_correction == PositionCorrection::Never {
            return;
        }
        self.collision_impulse += impulse;
        self.impulse_count += 1;
    }

    pub(crate) fn finish_correction_pass(&mut self) {
        if self.position_correction == PositionCorrection::Once {
            self.position_correction = PositionCorrection::Never;
        }
    }

    /// Applies the accumulated force to velocity and the accumulated impulse
    /// to position, then zeroes both accumulators.
    ///
    /// Fixed bodies only have their accumulators zeroed.
    pub(crate) fn apply_accumulated(&mut self) {
        if !self.is_fixed() {
            self.hspeed += self.force_accum.x;
            self.vspeed += self.force_accum.y;
            self.update_direction_and_speed();
            self.x += self.impulse_accum.x;
            self.y += self.impulse_accum.y;
        }
        self.force_accum = Vector2::zero();
        self.impulse_accum = Vector2::zero();
    }

    pub(crate) fn take_generators(&mut self) -> Vec<Box<dyn ForceGenerator>> {
        std::mem::take(&mut self.generators)
    }

    pub(crate) fn restore_generators(&mut self, mut generators: Vec<Box<dyn ForceGenerator>>) {
        // add_generator may have been called while the list was checked out
        generators.append(&mut self.generators);
        self.generators = generators;
    }
}
