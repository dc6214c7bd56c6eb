use std::cell::RefCell;
use std::rc::Rc;

use kinetic2d::input::{EventQueue, GameEvent, KeyModifiers};
use kinetic2d::physics::{Body, ColliderHandle, PhysicsSpace, Shape};
use kinetic2d::scene::{Scene, SceneObject};
use kinetic2d::Result;

#[derive(Debug)]
struct Player {
    label: &'static str,
    collider: ColliderHandle,
    log: Rc<RefCell<Vec<String>>>,
    consume_events: bool,
}

impl SceneObject for Player {
    fn collider(&self) -> Option<ColliderHandle> {
        Some(self.collider)
    }

    fn handle_event(&mut self, event: &GameEvent, _space: &mut PhysicsSpace) -> bool {
        if let GameEvent::KeyPressed { code, .. } = event {
            self.log
                .borrow_mut()
                .push(format!("{}:{}", self.label, code));
            return self.consume_events;
        }
        false
    }

    fn tick(&mut self, _delta: f32, _space: &mut PhysicsSpace) -> Result<()> {
        self.log.borrow_mut().push(format!("{}:tick", self.label));
        Ok(())
    }
}

fn make_player(
    scene: &mut Scene,
    label: &'static str,
    log: &Rc<RefCell<Vec<String>>>,
    consume_events: bool,
) -> (Player, ColliderHandle) {
    let collider = scene.space_mut().add_body(Body::new(Shape::circle(5.0)));
    (
        Player {
            label,
            collider,
            log: Rc::clone(log),
            consume_events,
        },
        collider,
    )
}

#[test]
fn test_remove_object_deregisters_collider() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let (player, collider) = make_player(&mut scene, "p1", &log, false);
    let handle = scene.add_object(Box::new(player));

    assert_eq!(scene.space().body_count(), 1);
    scene.remove_object(handle).unwrap();
    assert_eq!(scene.object_count(), 0);
    assert!(scene.space().get_body(collider).is_err());
}

#[test]
fn test_remove_unknown_object_is_an_error() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let (player, _) = make_player(&mut scene, "p1", &log, false);
    let handle = scene.add_object(Box::new(player));
    scene.remove_object(handle).unwrap();

    assert!(scene.remove_object(handle).is_err());
}

#[test]
fn test_tick_runs_objects_then_physics() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let (player, collider) = make_player(&mut scene, "p1", &log, false);
    scene
        .space_mut()
        .get_body_mut(collider)
        .unwrap()
        .set_hspeed(10.0);
    scene.add_object(Box::new(player));

    scene.tick(0.5).unwrap();

    assert_eq!(log.borrow().as_slice(), ["p1:tick"]);
    let body = scene.space().get_body(collider).unwrap();
    assert!((body.x() - 5.0).abs() < 1e-4);
}

#[test]
fn test_fixed_tick_resolves_collisions_without_time() {
    let mut scene = Scene::new();
    let a = scene.space_mut().add_body(Body::new(Shape::circle(10.0)));
    let mut wall = Body::new_fixed(Shape::circle(10.0));
    wall.set_position(15.0, 0.0);
    scene.space_mut().add_body(wall);

    scene.fixed_tick().unwrap();

    let body = scene.space().get_body(a).unwrap();
    assert!((body.x() + 5.01).abs() < 1e-3);
}

#[test]
fn test_event_dispatch_stops_at_consumer() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let (first, _) = make_player(&mut scene, "first", &log, true);
    let (second, _) = make_player(&mut scene, "second", &log, false);
    scene.add_object(Box::new(first));
    scene.add_object(Box::new(second));

    let mut queue = EventQueue::new();
    queue.key_down("a", "KeyA", KeyModifiers::empty());
    scene.dispatch_events(&mut queue);

    assert_eq!(log.borrow().as_slice(), ["first:KeyA"]);
}

#[test]
fn test_event_dispatch_reaches_all_without_consumer() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let (first, _) = make_player(&mut scene, "first", &log, false);
    let (second, _) = make_player(&mut scene, "second", &log, false);
    scene.add_object(Box::new(first));
    scene.add_object(Box::new(second));

    let mut queue = EventQueue::new();
    queue.key_down("a", "KeyA", KeyModifiers::empty());
    scene.dispatch_events(&mut queue);

    assert_eq!(log.borrow().as_slice(), ["first:KeyA", "second:KeyA"]);
}
