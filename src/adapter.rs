//! Host-environment contracts.
//!
//! The engine core never touches a drawing surface, audio device, or asset
//! pipeline directly. Hosts implement these traits and hand them in; the core
//! only ever calls through them.

use crate::physics::forces::ForceGenerator;
use crate::physics::Body;

/// Drawing surface contract used by the physics debug-draw path
pub trait RenderAdapter {
    /// Fills the whole surface with a solid color
    fn clear(&mut self, color: &str);

    /// Runs the draw callback under a translated, rotated, and scaled
    /// coordinate frame, restoring the previous frame afterwards
    fn render_transformed(
        &mut self,
        translate_x: f32,
        translate_y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
        draw: &mut dyn FnMut(&mut dyn RenderAdapter),
    );

    /// Draws a debug outline of the body's collision shape
    fn render_collision_mask(&mut self, body: &Body);

    /// Draws a debug marker for a force generator attached to a body
    fn render_force_generator(&mut self, body: &Body, generator: &dyn ForceGenerator);
}

/// Asset-loading contract; consulted for gating, never driven by the core
pub trait ResourceLoader {
    /// Whether every requested resource has finished loading
    fn is_done(&self) -> bool;

    /// Begins loading an image from the given source path
    fn load_image(&mut self, src: &str);

    /// Begins loading an audio clip from the given source path
    fn load_audio(&mut self, src: &str);
}

/// Audio output contract
pub trait AudioController {
    /// Current master volume in `[0, 1]`
    fn volume(&self) -> f32;

    /// Sets the master volume, clamped by the implementation to `[0, 1]`
    fn set_volume(&mut self, volume: f32);
}
