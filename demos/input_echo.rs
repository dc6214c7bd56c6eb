//! Feeds a scripted stream of raw device notifications into the event queue
//! and echoes the normalized events it produces.
//!
//! Run with: cargo run --example input_echo

use kinetic2d::input::{Binding, EventQueue, GamepadButton, KeyModifiers, MouseButton};

fn drain_and_print(queue: &mut EventQueue, label: &str) {
    println!("-- {}", label);
    for event in queue.drain() {
        println!("   {:?}", event);
    }
}

fn main() {
    let mut queue = EventQueue::new();

    queue
        .bind_abstract_button(
            "jump",
            &[
                Binding::Key("Space".to_string()),
                Binding::GamepadButton(GamepadButton::A),
            ],
        )
        .expect("bindings route to the default providers");
    queue
        .bind_abstract_button(
            "right",
            &[
                Binding::Key("ArrowRight".to_string()),
                Binding::GamepadButton(GamepadButton::LeftStickRight),
            ],
        )
        .expect("bindings route to the default providers");

    // A held key: one press, repeated typed events, one release.
    queue.key_down(" ", "Space", KeyModifiers::empty());
    queue.key_down(" ", "Space", KeyModifiers::empty());
    queue.key_up("Space", KeyModifiers::empty());
    drain_and_print(&mut queue, "keyboard jump");

    // High-frequency motion coalesces into single events.
    for i in 0..10 {
        queue.mouse_move(3.0, 1.0, 100.0 + i as f32 * 3.0, 50.0 + i as f32);
    }
    queue.mouse_down(MouseButton::Left, 130.0, 60.0);
    queue.mouse_wheel(-1.0, 130.0, 60.0);
    queue.mouse_wheel(-2.0, 130.0, 60.0);
    queue.mouse_up(MouseButton::Left, 130.0, 60.0);
    drain_and_print(&mut queue, "mouse motion and clicks");

    // A stick push past the dead zone acts as the bound direction button.
    queue.poll_gamepad("standard", &[0.2, 0.0], &[false; 17]);
    queue.poll_gamepad("standard", &[0.8, 0.0], &[false; 17]);
    queue.poll_gamepad("standard", &[0.0, 0.0], &[false; 17]);
    drain_and_print(&mut queue, "gamepad stick as 'right'");

    // Holding the abstract button drives auto-repeat from the queue clock.
    queue.key_down("d", "ArrowRight", KeyModifiers::empty());
    queue.tick(0.75);
    queue.key_up("ArrowRight", KeyModifiers::empty());
    drain_and_print(&mut queue, "auto-repeat while held 0.75s");

    // Unknown mappings are ignored (and logged through the `log` facade).
    queue.poll_gamepad("vendor-xyz", &[1.0], &[true]);
    drain_and_print(&mut queue, "unsupported gamepad mapping");
}
