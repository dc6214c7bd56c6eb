use std::fmt;

use crate::adapter::RenderAdapter;
use crate::error::EngineError;
use crate::input::queue::EventQueue;
use crate::input::GameEvent;
use crate::physics::{ColliderHandle, PhysicsSpace};
use crate::Result;

/// Identifies an object registered in a scene. A value of 0 is never handed
/// out and can represent an invalid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectHandle(pub(crate) u32);

/// A game object living in a scene.
///
/// Objects receive events and per-frame ticks in registration order. An
/// object that owns a collider reports its handle so the scene can deregister
/// it from the physics space on removal.
pub trait SceneObject: fmt::Debug {
    /// The collider this object owns in the scene's physics space, if any
    fn collider(&self) -> Option<ColliderHandle> {
        None
    }

    /// Offers an event to this object; return true to consume it and stop
    /// propagation to later objects
    fn handle_event(&mut self, _event: &GameEvent, _space: &mut PhysicsSpace) -> bool {
        false
    }

    /// Per-frame update, run before movement integration and the physics
    /// sub-step
    fn tick(&mut self, _delta: f32, _space: &mut PhysicsSpace) -> Result<()> {
        Ok(())
    }
}

/// A scene: an ordered list of game objects plus the physics space they
/// share.
#[derive(Debug)]
pub struct Scene {
    space: PhysicsSpace,
    objects: Vec<(ObjectHandle, Box<dyn SceneObject>)>,
    next_id: u32,
}

impl Scene {
    /// Creates an empty scene with a default physics space
    pub fn new() -> Self {
        Self {
            space: PhysicsSpace::new(),
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a scene around an already-configured physics space
    pub fn with_space(space: PhysicsSpace) -> Self {
        Self {
            space,
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a reference to the scene's physics space
    pub fn space(&self) -> &PhysicsSpace {
        &self.space
    }

    /// Returns a mutable reference to the scene's physics space
    pub fn space_mut(&mut self) -> &mut PhysicsSpace {
        &mut self.space
    }

    /// Registers an object at the end of the dispatch order
    pub fn add_object(&mut self, object: Box<dyn SceneObject>) -> ObjectHandle {
        let handle = ObjectHandle(self.next_id);
        self.next_id += 1;
        self.objects.push((handle, object));
        handle
    }

    /// Removes an object from the scene, deregistering its collider from the
    /// physics space. Removing an object that is not in the scene is an error.
    pub fn remove_object(&mut self, handle: ObjectHandle) -> Result<Box<dyn SceneObject>> {
        let index = self
            .objects
            .iter()
            .position(|(h, _)| *h == handle)
            .ok_or_else(|| {
                EngineError::ResourceNotFound(format!(
                    "Object with handle {:?} not found in scene",
                    handle
                ))
            })?;
        let (_, object) = self.objects.remove(index);
        if let Some(collider) = object.collider() {
            // The collider may already be gone if the object released it.
            let _ = self.space.remove_body(collider);
        }
        Ok(object)
    }

    /// Gets a reference to a registered object
    pub fn get_object(&self, handle: ObjectHandle) -> Result<&dyn SceneObject> {
        self.objects
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, object)| object.as_ref())
            .ok_or_else(|| {
                EngineError::ResourceNotFound(format!(
                    "Object with handle {:?} not found in scene",
                    handle
                ))
            })
    }

    /// Returns the number of registered objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Drains the event queue and offers each event to the objects in order,
    /// stopping at the first object that consumes it. Call once per frame.
    pub fn dispatch_events(&mut self, queue: &mut EventQueue) {
        for event in queue.drain() {
            for (_, object) in &mut self.objects {
                if object.handle_event(&event, &mut self.space) {
                    break;
                }
            }
        }
    }

    /// One full frame update: object ticks, movement integration, then the
    /// physics sub-step
    pub fn tick(&mut self, delta: f32) -> Result<()> {
        for (_, object) in &mut self.objects {
            object.tick(delta, &mut self.space)?;
        }
        self.space.integrate(delta);
        self.space.step(delta)
    }

    /// A collision-only physics sub-step: contacts are detected and resolved
    /// but no time passes, so force generators contribute nothing
    pub fn fixed_tick(&mut self) -> Result<()> {
        self.space.step(0.0)
    }

    /// Physics debug draw through the render adapter contract
    pub fn render_physics(&self, adapter: &mut dyn RenderAdapter) {
        self.space.render(adapter);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
