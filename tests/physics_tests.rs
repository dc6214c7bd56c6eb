use approx::assert_relative_eq;
use kinetic2d::physics::{Body, ForceGenerator, PhysicsSpace, PositionCorrection, Shape};
use kinetic2d::{DragForceGenerator, GravityForceGenerator, SpringForceGenerator};
use rand::{Rng, SeedableRng};

#[test]
fn test_default_mass_from_area() {
    let body = Body::new(Shape::circle(10.0));
    assert_relative_eq!(body.mass(), std::f32::consts::PI * 100.0, epsilon = 1e-3);

    let heavy = Body::with_mass(Shape::circle(10.0), 500.0);
    assert_relative_eq!(heavy.mass(), 500.0);
}

#[test]
fn test_kinematics_direction_and_speed() {
    let mut body = Body::new(Shape::circle(1.0));

    // 90 degrees points up in the screen convention: y grows downward.
    body.set_direction(90.0);
    body.set_speed(10.0).unwrap();
    assert_relative_eq!(body.hspeed(), 0.0, epsilon = 1e-4);
    assert_relative_eq!(body.vspeed(), -10.0, epsilon = 1e-4);

    // Setting components recomputes speed and direction.
    let mut body = Body::new(Shape::circle(1.0));
    body.set_hspeed(3.0);
    body.set_vspeed(-4.0);
    assert_relative_eq!(body.speed(), 5.0, epsilon = 1e-4);
    assert_relative_eq!(body.direction(), 53.13, epsilon = 1e-2);

    // Direction wraps into [0, 360).
    body.set_direction(-90.0);
    assert_relative_eq!(body.direction(), 270.0);
    body.set_direction(450.0);
    assert_relative_eq!(body.direction(), 90.0);
}

#[test]
fn test_negative_speed_rejected() {
    let mut body = Body::new(Shape::circle(1.0));
    assert!(body.set_speed(-1.0).is_err());
    assert_eq!(body.speed(), 0.0);
}

#[test]
fn test_nan_force_rejected() {
    let mut body = Body::new(Shape::circle(1.0));
    assert!(body.add_force(f32::NAN, 0.0).is_err());
    assert!(body.add_impulse(0.0, f32::NAN).is_err());

    // A fixed body silently ignores forces, even NaN ones.
    let mut fixed = Body::new_fixed(Shape::circle(1.0));
    assert!(fixed.add_force(f32::NAN, 0.0).is_ok());
    assert!(fixed.add_force(10.0, 0.0).is_ok());
}

#[test]
fn test_separated_pair_produces_no_contacts() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut body_b = Body::new(Shape::circle(10.0));
    body_b.set_position(50.0, 0.0);
    let b = space.add_body(body_b);

    space.step(1.0 / 60.0).unwrap();

    assert!(space.contacts().is_empty());
    assert!(space.get_body(a).unwrap().contacts().is_empty());
    assert!(space.get_body(b).unwrap().contacts().is_empty());
}

#[test]
fn test_overlapping_pair_shares_one_contact() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut body_b = Body::new(Shape::circle(10.0));
    body_b.set_position(15.0, 0.0);
    let b = space.add_body(body_b);

    space.step(1.0 / 60.0).unwrap();

    assert_eq!(space.contacts().len(), 1);
    let id_a = space.get_body(a).unwrap().contacts()[0];
    let id_b = space.get_body(b).unwrap().contacts()[0];
    assert_eq!(id_a, id_b);

    let contact = *space.contacts().get(id_a).unwrap();
    assert_eq!(contact.first, a);
    assert_eq!(contact.second, b);
    assert_relative_eq!(contact.normal.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(contact.normal.y, 0.0, epsilon = 1e-5);
    // Overlap is 5, plus the penetration epsilon.
    assert_relative_eq!(contact.penetration, 5.01, epsilon = 1e-4);
    // Contact point sits at the midpoint of the radial overlap.
    assert_relative_eq!(contact.point.x, 7.5, epsilon = 1e-4);
    assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-5);
}

#[test]
fn test_equal_masses_split_correction() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut body_b = Body::new(Shape::circle(10.0));
    body_b.set_position(15.0, 0.0);
    let b = space.add_body(body_b);

    space.step(1.0 / 60.0).unwrap();

    assert_relative_eq!(space.get_body(a).unwrap().x(), -2.505, epsilon = 1e-3);
    assert_relative_eq!(space.get_body(b).unwrap().x(), 17.505, epsilon = 1e-3);
}

#[test]
fn test_fixed_partner_absorbs_no_correction() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut wall = Body::new_fixed(Shape::circle(10.0));
    wall.set_position(15.0, 0.0);
    let b = space.add_body(wall);

    space.step(1.0 / 60.0).unwrap();

    // The dynamic body takes the whole correction; the fixed one never moves.
    assert_relative_eq!(space.get_body(a).unwrap().x(), -5.01, epsilon = 1e-3);
    assert_relative_eq!(space.get_body(b).unwrap().x(), 15.0);
    assert_eq!(space.get_body(b).unwrap().speed(), 0.0);
}

#[test]
fn test_elastic_impulse_swaps_equal_mass_velocities() {
    let mut space = PhysicsSpace::new();
    let mut mover = Body::new(Shape::circle(10.0));
    mover.set_hspeed(10.0);
    let a = space.add_body(mover);
    let mut target = Body::new(Shape::circle(10.0));
    target.set_position(15.0, 0.0);
    let b = space.add_body(target);

    space.step(1.0 / 60.0).unwrap();

    // Head-on elastic collision between equal masses exchanges velocities.
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 0.0, epsilon = 1e-3);
    assert_relative_eq!(space.get_body(b).unwrap().hspeed(), 10.0, epsilon = 1e-3);
}

#[test]
fn test_trigger_records_partners_without_response() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut zone = Body::new_trigger(Shape::circle(10.0));
    zone.set_position(15.0, 0.0);
    let b = space.add_body(zone);

    space.step(1.0 / 60.0).unwrap();

    assert!(space.contacts().is_empty());
    assert_eq!(space.get_body(a).unwrap().triggers(), &[b]);
    assert_eq!(space.get_body(b).unwrap().triggers(), &[a]);
    assert_relative_eq!(space.get_body(a).unwrap().x(), 0.0);
    assert_relative_eq!(space.get_body(b).unwrap().x(), 15.0);
}

#[test]
fn test_resolve_impulses_without_collisions_is_noop() {
    let mut body = Body::new(Shape::circle(5.0));
    body.set_position(3.0, 4.0);
    body.resolve_impulses().unwrap();
    assert_relative_eq!(body.x(), 3.0);
    assert_relative_eq!(body.y(), 4.0);
    assert_eq!(body.impulse_count(), 0);
}

#[test]
fn test_once_correction_flips_to_never() {
    let mut space = PhysicsSpace::new();
    let mut mover = Body::new(Shape::circle(10.0));
    mover.set_position_correction(PositionCorrection::Once);
    let a = space.add_body(mover);
    let mut wall = Body::new_fixed(Shape::circle(10.0));
    wall.set_position(15.0, 0.0);
    space.add_body(wall);

    space.step(1.0 / 60.0).unwrap();

    let body = space.get_body(a).unwrap();
    assert_relative_eq!(body.x(), -5.01, epsilon = 1e-3);
    assert_eq!(body.position_correction(), PositionCorrection::Never);
}

#[test]
fn test_never_correction_leaves_position_alone() {
    let mut space = PhysicsSpace::new();
    let mut mover = Body::new(Shape::circle(10.0));
    mover.set_position_correction(PositionCorrection::Never);
    let a = space.add_body(mover);
    let mut wall = Body::new_fixed(Shape::circle(10.0));
    wall.set_position(15.0, 0.0);
    space.add_body(wall);

    space.step(1.0 / 60.0).unwrap();

    // The contact still exists, but no positional correction is applied.
    assert_eq!(space.get_body(a).unwrap().contacts().len(), 1);
    assert_relative_eq!(space.get_body(a).unwrap().x(), 0.0);
}

#[test]
fn test_gravity_accelerates_downward() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(GravityForceGenerator::new()));
    let a = space.add_body(Body::new(Shape::circle(5.0)));

    space.step(1.0).unwrap();

    // Default gravity is 98 downward; y grows downward.
    assert_relative_eq!(space.get_body(a).unwrap().vspeed(), 98.0, epsilon = 1e-3);
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 0.0);
}

#[test]
fn test_fixed_body_pinned_under_gravity() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(GravityForceGenerator::new()));
    let mut anchor = Body::new_fixed(Shape::circle(5.0));
    anchor.set_position(7.0, -3.0);
    let a = space.add_body(anchor);

    for _ in 0..10 {
        space.integrate(1.0 / 60.0);
        space.step(1.0 / 60.0).unwrap();
    }

    let body = space.get_body(a).unwrap();
    assert_relative_eq!(body.x(), 7.0);
    assert_relative_eq!(body.y(), -3.0);
    assert_eq!(body.speed(), 0.0);
}

#[test]
fn test_zero_delta_step_changes_nothing() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(GravityForceGenerator::new()));
    let mut mover = Body::new(Shape::circle(5.0));
    mover.set_hspeed(10.0);
    let a = space.add_body(mover);

    space.step(0.0).unwrap();

    // Collision-only sub-step: no time passes, so generators contribute nothing.
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 10.0);
    assert_relative_eq!(space.get_body(a).unwrap().vspeed(), 0.0);
    assert_relative_eq!(space.get_body(a).unwrap().x(), 0.0);
}

#[test]
fn test_point_gravity_pulls_toward_source() {
    let mut space = PhysicsSpace::new();
    let mut sun = Body::new_fixed(Shape::circle(10.0));
    sun.set_position(0.0, 0.0);
    let source = space.add_body(sun);
    let mut satellite = Body::new(Shape::circle(10.0));
    satellite.set_position(100.0, 0.0);
    let a = space.add_body(satellite);

    space.add_force_generator(Box::new(GravityForceGenerator::towards(source)));
    space.step(1.0 / 60.0).unwrap();

    let body = space.get_body(a).unwrap();
    assert!(body.hspeed() < 0.0);
    assert_relative_eq!(body.vspeed(), 0.0, epsilon = 1e-5);
    // The source itself never accelerates toward itself.
    assert_eq!(space.get_body(source).unwrap().speed(), 0.0);
}

#[test]
fn test_drag_reduces_speed() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(DragForceGenerator::new(0.1, 0.01)));
    let mut mover = Body::new(Shape::circle(5.0));
    mover.set_hspeed(500.0);
    let a = space.add_body(mover);

    space.step(1.0).unwrap();

    // scaled speed 5 => coefficient 0.1*5 + 0.01*25 = 0.75 => force -75
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 425.0, epsilon = 1e-2);
}

#[test]
fn test_strong_drag_stops_but_never_reverses() {
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(DragForceGenerator::new(100.0, 100.0)));
    let mut mover = Body::new(Shape::circle(5.0));
    mover.set_hspeed(500.0);
    let a = space.add_body(mover);

    space.step(1.0).unwrap();

    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 0.0, epsilon = 1e-3);

    // Further steps stay at rest instead of oscillating.
    space.step(1.0).unwrap();
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 0.0, epsilon = 1e-3);
}

#[test]
fn test_spring_pulls_both_ends_together() {
    let mut space = PhysicsSpace::new();
    let mut far = Body::new(Shape::circle(5.0));
    far.set_position(200.0, 0.0);
    let a = space.add_body(far);
    let anchor = space.add_body(Body::new(Shape::circle(5.0)));

    space.add_force_generator(Box::new(SpringForceGenerator::new(anchor, 10.0, 100.0)));
    space.step(1.0 / 60.0).unwrap();

    // Stretched past rest length: the target is pulled back and the partner
    // pulled forward, split evenly between equal masses.
    let target_hspeed = space.get_body(a).unwrap().hspeed();
    let anchor_hspeed = space.get_body(anchor).unwrap().hspeed();
    assert!(target_hspeed < 0.0);
    assert!(anchor_hspeed > 0.0);
    assert_relative_eq!(target_hspeed, -anchor_hspeed, epsilon = 1e-3);
}

#[test]
fn test_disabled_generator_contributes_nothing() {
    let mut space = PhysicsSpace::new();
    let mut gravity = GravityForceGenerator::new();
    gravity.set_enabled(false);
    space.add_force_generator(Box::new(gravity));
    let a = space.add_body(Body::new(Shape::circle(5.0)));

    space.step(1.0).unwrap();
    assert_eq!(space.get_body(a).unwrap().speed(), 0.0);

    space.force_generator_mut(0).unwrap().set_enabled(true);
    space.step(1.0).unwrap();
    assert!(space.get_body(a).unwrap().vspeed() > 0.0);
}

#[test]
fn test_body_local_generator_runs_after_global() {
    let mut space = PhysicsSpace::new();
    let mut mover = Body::new(Shape::circle(5.0));
    mover.add_generator(Box::new(GravityForceGenerator::with_components(10.0, 0.0)));
    let a = space.add_body(mover);
    let other = space.add_body({
        let mut b = Body::new(Shape::circle(5.0));
        b.set_position(100.0, 0.0);
        b
    });

    space.step(1.0).unwrap();

    // The local generator only affects its owner.
    assert_relative_eq!(space.get_body(a).unwrap().hspeed(), 10.0, epsilon = 1e-4);
    assert_eq!(space.get_body(other).unwrap().speed(), 0.0);
}

#[test]
fn test_movement_integration() {
    let mut space = PhysicsSpace::new();
    let mut mover = Body::new(Shape::circle(5.0));
    mover.set_hspeed(10.0);
    mover.set_vspeed(-4.0);
    let a = space.add_body(mover);
    let mut anchor = Body::new_fixed(Shape::circle(5.0));
    anchor.set_hspeed(10.0);
    let b = space.add_body(anchor);

    space.integrate(0.5);

    assert_relative_eq!(space.get_body(a).unwrap().x(), 5.0);
    assert_relative_eq!(space.get_body(a).unwrap().y(), -2.0);
    // Fixed bodies never move, even with a velocity set.
    assert_relative_eq!(space.get_body(b).unwrap().x(), 0.0);
}

#[test]
fn test_stale_handle_is_an_error() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(5.0)));
    space.remove_body(a).unwrap();

    assert!(space.get_body(a).is_err());
    assert!(space.get_body_mut(a).is_err());
    assert!(space.remove_body(a).is_err());
}

#[test]
fn test_contacts_reset_between_substeps() {
    let mut space = PhysicsSpace::new();
    let a = space.add_body(Body::new(Shape::circle(10.0)));
    let mut other = Body::new(Shape::circle(10.0));
    other.set_position(15.0, 0.0);
    space.add_body(other);

    space.step(1.0 / 60.0).unwrap();
    assert_eq!(space.contacts().len(), 1);

    // After separation the next sub-step starts from an empty arena.
    space.get_body_mut(a).unwrap().set_position(-100.0, 0.0);
    space.step(1.0 / 60.0).unwrap();
    assert!(space.contacts().is_empty());
    assert!(space.get_body(a).unwrap().contacts().is_empty());
}

#[test]
fn test_randomized_stress_keeps_fixed_bodies_pinned() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut space = PhysicsSpace::new();
    space.add_force_generator(Box::new(GravityForceGenerator::new()));

    let mut handles = Vec::new();
    let mut fixed_positions = Vec::new();
    for i in 0..30 {
        let x = rng.gen_range(-100.0..100.0);
        let y = rng.gen_range(-100.0..100.0);
        let radius = rng.gen_range(2.0..10.0);
        let mut body = if i % 5 == 0 {
            Body::new_fixed(Shape::circle(radius))
        } else {
            let mut b = Body::new(Shape::circle(radius));
            b.set_hspeed(rng.gen_range(-50.0..50.0));
            b.set_vspeed(rng.gen_range(-50.0..50.0));
            b
        };
        body.set_position(x, y);
        let handle = space.add_body(body);
        handles.push(handle);
        if i % 5 == 0 {
            fixed_positions.push((handle, x, y));
        }
    }

    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        space.integrate(dt);
        space.step(dt).unwrap();
    }

    for handle in space
        .contacts()
        .iter()
        .flat_map(|c| [c.first, c.second])
        .collect::<Vec<_>>()
    {
        assert!(space.get_body(handle).is_ok());
    }
    for (handle, x, y) in fixed_positions {
        let body = space.get_body(handle).unwrap();
        assert_relative_eq!(body.x(), x);
        assert_relative_eq!(body.y(), y);
    }
    for handle in handles {
        let body = space.get_body(handle).unwrap();
        assert!(body.x().is_finite() && body.y().is_finite());
        assert!(body.speed().is_finite());
    }
}
