//! Drops a handful of circles onto a fixed floor and renders the scene as
//! ASCII frames on stdout.
//!
//! Run with: cargo run --example bouncing_circles

use kinetic2d::physics::{Body, PhysicsSpace, Shape};
use kinetic2d::{DragForceGenerator, GravityForceGenerator};

const WIDTH: usize = 64;
const HEIGHT: usize = 24;
const WORLD_WIDTH: f32 = 320.0;
const WORLD_HEIGHT: f32 = 240.0;

fn draw(space: &PhysicsSpace) {
    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

    for (_, body) in space_bodies(space) {
        let radius = match *body.shape() {
            Shape::Circle { radius, .. } => radius,
        };
        let glyph = if body.is_fixed() { '#' } else { 'o' };
        let cx = body.x();
        let cy = body.y();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let wx = col as f32 / WIDTH as f32 * WORLD_WIDTH;
                let wy = row as f32 / HEIGHT as f32 * WORLD_HEIGHT;
                let (dx, dy) = (wx - cx, wy - cy);
                if dx * dx + dy * dy <= radius * radius {
                    grid[row][col] = glyph;
                }
            }
        }
    }

    let mut frame = String::with_capacity((WIDTH + 1) * HEIGHT);
    for row in grid {
        frame.extend(row);
        frame.push('\n');
    }
    print!("\x1B[H{}", frame);
}

fn space_bodies(space: &PhysicsSpace) -> Vec<(kinetic2d::ColliderHandle, &Body)> {
    space
        .handles()
        .into_iter()
        .filter_map(|handle| space.get_body(handle).ok().map(|body| (handle, body)))
        .collect()
}

fn main() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(GravityForceGenerator::new()));
    space.add_force_generator(Box::new(DragForceGenerator::new(0.05, 0.01)));

    // A floor of fixed circles across the bottom of the world.
    let floor_radius = 12.0;
    let mut x = floor_radius;
    while x < WORLD_WIDTH {
        let mut tile = Body::new_fixed(Shape::circle(floor_radius));
        tile.set_position(x, WORLD_HEIGHT - floor_radius);
        space.add_body(tile);
        x += floor_radius * 2.0;
    }

    // Falling circles with a little sideways motion.
    for i in 0..6 {
        let mut ball = Body::new(Shape::circle(8.0));
        ball.set_position(40.0 + i as f32 * 45.0, 20.0 + (i % 3) as f32 * 15.0);
        ball.set_hspeed(if i % 2 == 0 { 20.0 } else { -20.0 });
        space.add_body(ball);
    }

    print!("\x1B[2J");
    let dt = 1.0 / 30.0;
    for _ in 0..300 {
        space.integrate(dt);
        if let Err(err) = space.step(dt) {
            eprintln!("physics step failed: {}", err);
            return;
        }
        draw(&space);
        std::thread::sleep(std::time::Duration::from_millis(33));
    }
}
