use crate::adapter::RenderAdapter;
use crate::physics::body::Body;
use crate::physics::config::PhysicsConfig;
use crate::physics::contact::ContactArena;
use crate::physics::forces::ForceGenerator;
use crate::physics::narrow_phase;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// The collider list, contact arena, and scene-global force generators that
/// make up one scene's physics state.
///
/// The space owns its generator list explicitly; there is no ambient global
/// state.
#[derive(Debug, Default)]
pub struct PhysicsSpace {
    bodies: ColliderStorage<Body>,
    arena: ContactArena,
    generators: Vec<Box<dyn ForceGenerator>>,
    config: PhysicsConfig,
}

impl PhysicsSpace {
    /// Creates a new physics space with default settings
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Creates a new physics space with the given configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: ColliderStorage::new(),
            arena: ContactArena::new(),
            generators: Vec::new(),
            config,
        }
    }

    /// Returns a reference to the configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Registers a body into the collider list and returns its handle
    pub fn add_body(&mut self, body: Body) -> ColliderHandle {
        self.bodies.add(body)
    }

    /// Deregisters a body from the collider list
    pub fn remove_body(&mut self, handle: ColliderHandle) -> Result<Body> {
        self.bodies.remove(handle).ok_or_else(|| {
            crate::error::EngineError::ResourceNotFound(format!(
                "Collider with handle {:?} not found",
                handle
            ))
        })
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: ColliderHandle) -> Result<&Body> {
        self.bodies.get_collider(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: ColliderHandle) -> Result<&mut Body> {
        self.bodies.get_collider_mut(handle)
    }

    /// Returns the number of registered colliders
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns all collider handles in ascending order
    pub fn handles(&self) -> Vec<ColliderHandle> {
        self.bodies.sorted_handles()
    }

    /// The contact arena for the current sub-step
    pub fn contacts(&self) -> &ContactArena {
        &self.arena
    }

    /// Adds a scene-global force generator
    pub fn add_force_generator(&mut self, generator: Box<dyn ForceGenerator>) {
        self.generators.push(generator);
    }

    /// Removes a scene-global force generator by index
    pub fn remove_force_generator(&mut self, index: usize) -> Option<Box<dyn ForceGenerator>> {
        if index < self.generators.len() {
            Some(self.generators.remove(index))
        } else {
            None
        }
    }

    /// Returns the number of scene-global force generators
    pub fn force_generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Returns a scene-global force generator by index
    pub fn force_generator(&self, index: usize) -> Option<&dyn ForceGenerator> {
        self.generators.get(index).map(|g| g.as_ref())
    }

    /// Returns a mutable scene-global force generator by index
    pub fn force_generator_mut(&mut self, index: usize) -> Option<&mut (dyn ForceGenerator + '_)> {
        let generator: &mut (dyn ForceGenerator + '_) = self.generators.get_mut(index)?.as_mut();
        Some(generator)
    }

    /// Movement integration: advances every non-fixed body by its velocity.
    ///
    /// Runs once per rendered frame, before the physics sub-step.
    pub fn integrate(&mut self, delta: f32) {
        for (_, body) in self.bodies.iter_mut() {
            if body.is_fixed() {
                continue;
            }
            let (dx, dy) = (body.hspeed() * delta, body.vspeed() * delta);
            body.set_position(body.x() + dx, body.y() + dy);
        }
    }

    /// One physics sub-step.
    ///
    /// The phase order is load-bearing: resolving collisions before draining
    /// impulses keeps multi-contact penetration correction averaged rather
    /// than summed, and applying forces last makes drag and gravity act on
    /// post-collision velocity.
    pub fn step(&mut self, delta: f32) -> Result<()> {
        let handles = self.bodies.sorted_handles();

        // 1. Clear per-sub-step bookkeeping.
        self.arena.reset();
        for &handle in &handles {
            self.bodies.get_collider_mut(handle)?.clear_contacts();
        }

        // 2. All-pairs broad phase feeding the narrow phase.
        for (i, &first) in handles.iter().enumerate() {
            for &second in &handles[i + 1..] {
                narrow_phase::check_pair(
                    &mut self.arena,
                    &mut self.bodies,
                    first,
                    second,
                    self.config.penetration_epsilon,
                )?;
            }
        }

        // 3. Velocity response and positional-correction accumulation.
        for &handle in &handles {
            self.resolve_collisions(handle)?;
        }

        // 4. Drain averaged positional correction into impulse accumulators.
        for &handle in &handles {
            self.bodies.get_collider_mut(handle)?.resolve_impulses()?;
        }

        // 5. Force generators, then accumulator integration.
        for &handle in &handles {
            self.apply_forces(handle, delta)?;
        }

        Ok(())
    }

    /// Velocity impulse response for the contacts owned by one collider.
    ///
    /// Both bodies of a pair hold the same contact id; only the `first` side
    /// processes it, so each pair is resolved exactly once.
    fn resolve_collisions(&mut self, handle: ColliderHandle) -> Result<()> {
        let contact_ids = self.bodies.get_collider(handle)?.contacts().to_vec();

        for id in contact_ids {
            let contact = match self.arena.get(id) {
                Some(contact) => *contact,
                None => continue,
            };
            if contact.first != handle {
                continue;
            }
            let other = contact.second;

            let (mass_1, fixed_1, velocity_1) = {
                let body = self.bodies.get_collider(handle)?;
                (body.mass(), body.is_fixed(), body.velocity())
            };
            let (mass_2, fixed_2, velocity_2) = {
                let body = self.bodies.get_collider(other)?;
                (body.mass(), body.is_fixed(), body.velocity())
            };
            if fixed_1 && fixed_2 {
                continue;
            }

            // A fixed side absorbs none of the correction.
            let relative_mass = if fixed_1 {
                1.0
            } else if fixed_2 {
                0.0
            } else {
                mass_1 / (mass_1 + mass_2)
            };

            if !fixed_1 {
                let share = contact.penetration * (1.0 - relative_mass);
                self.bodies
                    .get_collider_mut(handle)?
                    .accumulate_collision_impulse(contact.normal * -share);
            }
            if !fixed_2 {
                let share = contact.penetration * relative_mass;
                self.bodies
                    .get_collider_mut(other)?
                    .accumulate_collision_impulse(contact.normal * share);
            }

            // Elastic collision impulse along the contact normal.
            let v1n = velocity_1.dot(&contact.normal);
            let v2n = velocity_2.dot(&contact.normal);
            let optimized_p = 2.0 * (v1n - v2n) / (mass_1 + mass_2);

            if !fixed_1 {
                let velocity = velocity_1 - contact.normal * (optimized_p * mass_2);
                self.bodies.get_collider_mut(handle)?.set_velocity(velocity);
            }
            if !fixed_2 {
                let velocity = velocity_2 + contact.normal * (optimized_p * mass_1);
                self.bodies.get_collider_mut(other)?.set_velocity(velocity);
            }
        }

        self.bodies.get_collider_mut(handle)?.finish_correction_pass();
        Ok(())
    }

    /// Runs the scene-global generators, then the body-local ones, then
    /// integrates and zeroes the accumulators.
    fn apply_forces(&mut self, handle: ColliderHandle, delta: f32) -> Result<()> {
        if self.bodies.get_collider(handle)?.is_fixed() {
            self.bodies.get_collider_mut(handle)?.apply_accumulated();
            return Ok(());
        }

        for generator in &self.generators {
            if generator.is_enabled() {
                generator.update_collider(handle, &mut self.bodies, delta)?;
            }
        }

        let local = self.bodies.get_collider_mut(handle)?.take_generators();
        let mut result = Ok(());
        for generator in &local {
            if generator.is_enabled() {
                result = generator.update_collider(handle, &mut self.bodies, delta);
                if result.is_err() {
                    break;
                }
            }
        }
        self.bodies.get_collider_mut(handle)?.restore_generators(local);
        result?;

        self.bodies.get_collider_mut(handle)?.apply_accumulated();
        Ok(())
    }

    /// Physics debug draw through the render adapter contract
    pub fn render(&self, adapter: &mut dyn RenderAdapter) {
        for handle in self.bodies.sorted_handles() {
            let body = match self.bodies.get(handle) {
                Some(body) => body,
                None => continue,
            };
            adapter.render_collision_mask(body);
            for generator in body.generators() {
                adapter.render_force_generator(body, generator.as_ref());
            }
        }
    }
}
