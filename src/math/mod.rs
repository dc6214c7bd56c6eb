mod vector;

pub use vector::Vector2;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Floating point modulo with the result always in `[0, modulus)`
#[inline]
pub fn fmod(value: f32, modulus: f32) -> f32 {
    let result = value % modulus;
    if result < 0.0 {
        result + modulus
    } else {
        result
    }
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Distance between two points
#[inline]
pub fn point_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let (dx, dy) = (x2 - x1, y2 - y1);
    (dx * dx + dy * dy).sqrt()
}

/// Direction from one point toward another, in degrees in `[0, 360)`.
///
/// Uses the screen convention: y grows downward, so 90 degrees points up.
#[inline]
pub fn point_direction(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let degrees = to_degrees(-(y2 - y1).atan2(x2 - x1));
    fmod(degrees, 360.0)
}
