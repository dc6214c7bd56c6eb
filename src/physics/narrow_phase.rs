use crate::physics::body::Body;
use crate::physics::contact::{Contact, ContactArena, ContactId};
use crate::physics::shape::Shape;
use crate::physics::storage::{ColliderHandle, ColliderStorage};
use crate::Result;

/// Narrow-phase test for one broad-phase pair.
///
/// Dispatches on the pair of shape kinds; the match is exhaustive, so every
/// shape pairing is visibly handled. The detect-then-resolve protocol is
/// enforced by the borrow checker: while a pair is being tested the storage is
/// exclusively borrowed, so no second narrow-phase test can start.
pub(crate) fn check_pair(
    arena: &mut ContactArena,
    bodies: &mut ColliderStorage<Body>,
    first: ColliderHandle,
    second: ColliderHandle,
    penetration_epsilon: f32,
) -> Result<Option<ContactId>> {
    let a = bodies.get_collider(first)?;
    let b = bodies.get_collider(second)?;

    match (*a.shape(), *b.shape()) {
        (Shape::Circle { radius: r1, .. }, Shape::Circle { radius: r2, .. }) => circle_circle(
            arena,
            bodies,
            (first, r1),
            (second, r2),
            penetration_epsilon,
        ),
    }
}

fn circle_circle(
    arena: &mut ContactArena,
    bodies: &mut ColliderStorage<Body>,
    (first, r1): (ColliderHandle, f32),
    (second, r2): (ColliderHandle, f32),
    penetration_epsilon: f32,
) -> Result<Option<ContactId>> {
    let a = bodies.get_collider(first)?;
    let b = bodies.get_collider(second)?;
    let (center_a, center_b) = (a.center(), b.center());
    let any_trigger = a.is_trigger() || b.is_trigger();

    let delta = center_b - center_a;
    let distance_squared = delta.length_squared();
    let radii = r1 + r2;

    // Same center is degenerate: the normal is undefined, so skip rather than
    // divide by zero.
    if distance_squared == 0.0 || distance_squared >= radii * radii {
        return Ok(None);
    }

    if any_trigger {
        bodies.get_collider_mut(first)?.record_trigger(second);
        bodies.get_collider_mut(second)?.record_trigger(first);
        return Ok(None);
    }

    let distance = distance_squared.sqrt();
    let normal = delta / distance;
    let penetration = radii - distance + penetration_epsilon;
    // Midpoint of the radial overlap along the normal.
    let point = center_a + normal * ((r1 + distance - r2) * 0.5);

    let id = arena.insert(Contact {
        first,
        second,
        normal,
        point,
        penetration,
    });
    bodies.get_collider_mut(first)?.record_contact(id);
    bodies.get_collider_mut(second)?.record_contact(id);
    Ok(Some(id))
}
