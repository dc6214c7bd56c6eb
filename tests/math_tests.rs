use approx::assert_relative_eq;
use kinetic2d::math::{
    approx_eq, clamp, fmod, point_direction, point_distance, to_degrees, to_radians, Vector2,
};

#[test]
fn test_vector_arithmetic() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, -4.0);

    assert_eq!(a + b, Vector2::new(4.0, -2.0));
    assert_eq!(a - b, Vector2::new(-2.0, 6.0));
    assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));
    assert_relative_eq!(a.dot(&b), -5.0);
}

#[test]
fn test_vector_length_and_normalize() {
    let v = Vector2::new(3.0, 4.0);
    assert_relative_eq!(v.length(), 5.0);
    assert_relative_eq!(v.length_squared(), 25.0);

    let n = v.normalize();
    assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(n.x, 0.6, epsilon = 1e-6);
    assert_relative_eq!(n.y, 0.8, epsilon = 1e-6);

    // Normalizing a zero vector must not produce NaN.
    let z = Vector2::zero().normalize();
    assert!(z.is_zero());
    assert!(!z.is_nan());
}

#[test]
fn test_clamp_and_approx() {
    assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
    assert_eq!(clamp(1.5, 0.0, 3.0), 1.5);

    assert!(approx_eq(1.0, 1.0 + 1e-8));
    assert!(!approx_eq(1.0, 1.001));
}

#[test]
fn test_fmod_stays_in_range() {
    assert_relative_eq!(fmod(370.0, 360.0), 10.0);
    assert_relative_eq!(fmod(-10.0, 360.0), 350.0);
    assert_relative_eq!(fmod(720.0, 360.0), 0.0);
    assert_relative_eq!(fmod(359.5, 360.0), 359.5);
}

#[test]
fn test_angle_conversions() {
    assert_relative_eq!(to_radians(180.0), std::f32::consts::PI);
    assert_relative_eq!(to_degrees(std::f32::consts::PI / 2.0), 90.0);
}

#[test]
fn test_point_distance() {
    assert_relative_eq!(point_distance(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_relative_eq!(point_distance(1.0, 1.0, 1.0, 1.0), 0.0);
}

#[test]
fn test_point_direction_screen_convention() {
    // y grows downward, so a target straight above is at 90 degrees.
    assert_relative_eq!(point_direction(0.0, 0.0, 1.0, 0.0), 0.0);
    assert_relative_eq!(point_direction(0.0, 0.0, 0.0, -1.0), 90.0);
    assert_relative_eq!(point_direction(0.0, 0.0, -1.0, 0.0), 180.0);
    assert_relative_eq!(point_direction(0.0, 0.0, 0.0, 1.0), 270.0);

    // Result is always wrapped into [0, 360).
    let d = point_direction(0.0, 0.0, 1.0, 1.0);
    assert!((0.0..360.0).contains(&d));
    assert_relative_eq!(d, 315.0, epsilon = 1e-4);
}
