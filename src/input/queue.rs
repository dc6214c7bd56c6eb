use std::collections::HashMap;

use log::warn;

use crate::error::EngineError;
use crate::input::config::InputConfig;
use crate::input::events::{
    GameEvent, GamepadButton, KeyModifiers, MouseButton, STANDARD_GAMEPAD_AXES,
    STANDARD_GAMEPAD_BUTTONS,
};
use crate::input::provider::{
    AbstractButtonProvider, Binding, ButtonEdge, GamepadButtonProvider, KeyboardButtonProvider,
};
use crate::Result;

/// Raw device state tracked by the event queue.
///
/// Every boolean map reflects the most recent edge enqueued for that input.
#[derive(Debug, Default)]
pub struct DeviceState {
    keys: HashMap<String, bool>,
    mouse_buttons: HashMap<MouseButton, bool>,
    gamepad_buttons: HashMap<GamepadButton, bool>,
    gamepad_axes: Vec<f32>,
    page_x: f32,
    page_y: f32,
}

impl DeviceState {
    /// Returns whether the key with the given code is held
    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Returns whether the mouse button is held
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.get(&button).copied().unwrap_or(false)
    }

    /// Returns whether the gamepad button (raw or synthetic) is held
    pub fn is_gamepad_button_down(&self, button: GamepadButton) -> bool {
        self.gamepad_buttons.get(&button).copied().unwrap_or(false)
    }

    /// The last observed gamepad axis value, 0 if never reported
    pub fn gamepad_axis(&self, idx: usize) -> f32 {
        self.gamepad_axes.get(idx).copied().unwrap_or(0.0)
    }

    /// The last observed mouse position
    pub fn mouse_position(&self) -> (f32, f32) {
        (self.page_x, self.page_y)
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingMouseMove {
    movement_x: f32,
    movement_y: f32,
    page_x: f32,
    page_y: f32,
}

#[derive(Debug, Clone, Copy)]
struct PendingWheel {
    delta: f32,
    page_x: f32,
    page_y: f32,
}

/// Auto-repeat state for the most recently activated abstract button
#[derive(Debug, Default)]
struct RepeatState {
    current: Option<String>,
    held_for: f32,
    repeating: bool,
}

/// Collects raw device notifications, normalizes them into discrete events,
/// and drives the abstract-button layer.
///
/// Listener methods only append; draining and dispatch happen once per frame
/// on the main tick.
#[derive(Debug)]
pub struct EventQueue {
    config: InputConfig,
    devices: DeviceState,
    events: Vec<GameEvent>,

    // Coalescing accumulators for high-frequency motion, kept apart from the
    // queued discrete events. At most one is pending at a time: enqueuing
    // either kind flushes the other first, which preserves event order.
    pending_mouse_move: Option<PendingMouseMove>,
    pending_wheel: Option<PendingWheel>,

    abstract_buttons: HashMap<String, bool>,
    providers: Vec<Box<dyn AbstractButtonProvider>>,
    repeat: RepeatState,
}

impl EventQueue {
    /// Creates an event queue with default configuration and the keyboard and
    /// gamepad providers registered
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Creates an event queue with the given configuration
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            devices: DeviceState::default(),
            events: Vec::new(),
            pending_mouse_move: None,
            pending_wheel: None,
            abstract_buttons: HashMap::new(),
            providers: vec![
                Box::new(KeyboardButtonProvider::new()),
                Box::new(GamepadButtonProvider::new()),
            ],
            repeat: RepeatState::default(),
        }
    }

    /// Returns a reference to the configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Returns the tracked raw device state
    pub fn devices(&self) -> &DeviceState {
        &self.devices
    }

    /// Registers an additional abstract-button provider stage
    pub fn add_provider(&mut self, provider: Box<dyn AbstractButtonProvider>) {
        self.providers.push(provider);
    }

    /// Returns whether the key with the given code is held
    pub fn is_key_down(&self, code: &str) -> bool {
        self.devices.is_key_down(code)
    }

    /// Returns whether the mouse button is held
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.devices.is_mouse_button_down(button)
    }

    /// Returns whether the gamepad button is held
    pub fn is_gamepad_button_down(&self, button: GamepadButton) -> bool {
        self.devices.is_gamepad_button_down(button)
    }

    /// Returns whether the named abstract button is down
    pub fn is_abstract_button_down(&self, name: &str) -> bool {
        self.abstract_buttons.get(name).copied().unwrap_or(false)
    }

    /// The last observed mouse position
    pub fn mouse_position(&self) -> (f32, f32) {
        self.devices.mouse_position()
    }

    /// Raw keyboard listener: a key went down.
    ///
    /// A `KeyPressed` event is only emitted on the up-to-down edge, so OS
    /// key-repeat never re-emits a press; `KeyTyped` fires every time for
    /// repeat-sensitive consumers.
    pub fn key_down(&mut self, key: &str, code: &str, modifiers: KeyModifiers) {
        if !self.devices.is_key_down(code) {
            self.devices.keys.insert(code.to_string(), true);
            self.push_event(GameEvent::KeyPressed {
                code: code.to_string(),
                modifiers,
            });
        }
        self.push_event(GameEvent::KeyTyped {
            key: key.to_string(),
            code: code.to_string(),
            modifiers,
        });
    }

    /// Raw keyboard listener: a key went up
    pub fn key_up(&mut self, code: &str, modifiers: KeyModifiers) {
        if self.devices.is_key_down(code) {
            self.devices.keys.insert(code.to_string(), false);
            self.push_event(GameEvent::KeyReleased {
                code: code.to_string(),
                modifiers,
            });
        }
    }

    /// Raw mouse listener: the pointer moved.
    ///
    /// Moves within one undrained tick are coalesced: deltas sum, the
    /// absolute position is the latest.
    pub fn mouse_move(&mut self, movement_x: f32, movement_y: f32, page_x: f32, page_y: f32) {
        self.flush_pending_wheel();
        self.devices.page_x = page_x;
        self.devices.page_y = page_y;
        match &mut self.pending_mouse_move {
            Some(pending) => {
                pending.movement_x += movement_x;
                pending.movement_y += movement_y;
                pending.page_x = page_x;
                pending.page_y = page_y;
            }
            None => {
                self.pending_mouse_move = Some(PendingMouseMove {
                    movement_x,
                    movement_y,
                    page_x,
                    page_y,
                });
            }
        }
    }

    /// Raw mouse listener: the wheel turned. Coalesced like mouse motion.
    pub fn mouse_wheel(&mut self, delta: f32, page_x: f32, page_y: f32) {
        self.flush_pending_mouse_move();
        self.devices.page_x = page_x;
        self.devices.page_y = page_y;
        match &mut self.pending_wheel {
            Some(pending) => {
                pending.delta += delta;
                pending.page_x = page_x;
                pending.page_y = page_y;
            }
            None => {
                self.pending_wheel = Some(PendingWheel {
                    delta,
                    page_x,
                    page_y,
                });
            }
        }
    }

    /// Raw mouse listener: a button went down
    pub fn mouse_down(&mut self, button: MouseButton, page_x: f32, page_y: f32) {
        if self.devices.is_mouse_button_down(button) {
            return;
        }
        self.devices.page_x = page_x;
        self.devices.page_y = page_y;
        self.devices.mouse_buttons.insert(button, true);
        self.push_event(GameEvent::MouseButtonPressed {
            button,
            page_x,
            page_y,
        });
    }

    /// Raw mouse listener: a button went up
    pub fn mouse_up(&mut self, button: MouseButton, page_x: f32, page_y: f32) {
        if !self.devices.is_mouse_button_down(button) {
            return;
        }
        self.devices.page_x = page_x;
        self.devices.page_y = page_y;
        self.devices.mouse_buttons.insert(button, false);
        self.push_event(GameEvent::MouseButtonReleased {
            button,
            page_x,
            page_y,
        });
    }

    /// Polls a gamepad snapshot; call once per tick.
    ///
    /// Only the standard mapping is supported; anything else is logged and
    /// the pad ignored. Axis values crossing the dead zone synthesize
    /// press/release events for the matching stick-direction button; the
    /// crossing itself is the hysteresis point, so hovering on one side of
    /// the threshold produces no chatter.
    pub fn poll_gamepad(&mut self, mapping: &str, axes: &[f32], buttons: &[bool]) {
        if mapping != "standard" {
            warn!("ignoring gamepad with unsupported mapping '{}'", mapping);
            return;
        }

        for (idx, &pressed) in buttons.iter().enumerate() {
            let Some(&button) = STANDARD_GAMEPAD_BUTTONS.get(idx) else {
                warn!("ignoring gamepad button index {} outside the standard mapping", idx);
                continue;
            };
            self.sync_gamepad_button(button, pressed);
        }

        for (idx, &value) in axes.iter().enumerate() {
            let Some(&(negative, positive)) = STANDARD_GAMEPAD_AXES.get(idx) else {
                warn!("ignoring gamepad axis index {} outside the standard mapping", idx);
                continue;
            };
            let previous = self.devices.gamepad_axis(idx);
            let dead_zone = self.config.axis_dead_zone;
            self.sync_gamepad_button(positive, value > dead_zone);
            self.sync_gamepad_button(negative, value < -dead_zone);

            if value != previous {
                if self.devices.gamepad_axes.len() <= idx {
                    self.devices.gamepad_axes.resize(idx + 1, 0.0);
                }
                self.devices.gamepad_axes[idx] = value;
                self.push_event(GameEvent::GamepadAxisChanged {
                    idx,
                    previous,
                    value,
                });
            }
        }
    }

    fn sync_gamepad_button(&mut self, button: GamepadButton, down: bool) {
        let was_down = self.devices.is_gamepad_button_down(button);
        if down && !was_down {
            self.devices.gamepad_buttons.insert(button, true);
            self.push_event(GameEvent::GamepadButtonPressed { button });
        } else if !down && was_down {
            self.devices.gamepad_buttons.insert(button, false);
            self.push_event(GameEvent::GamepadButtonReleased { button });
        }
    }

    /// Binds named abstract buttons to physical inputs.
    ///
    /// Binding an input that is currently held immediately reconciles state:
    /// the abstract button flips down and exactly one press event is emitted.
    pub fn bind_abstract_button(&mut self, name: &str, bindings: &[Binding]) -> Result<()> {
        for binding in bindings {
            let accepted = self
                .providers
                .iter_mut()
                .any(|provider| provider.try_bind(name, binding));
            if !accepted {
                return Err(EngineError::InputBinding(format!(
                    "No provider accepts the binding {:?}",
                    binding
                )));
            }
            self.abstract_buttons
                .entry(name.to_string())
                .or_insert(false);
            if self.any_provider_down(name) {
                self.press_abstract_button(name);
            }
        }
        Ok(())
    }

    /// Unbinds physical inputs from a named abstract button.
    ///
    /// Unbinding an input not registered to the given name is a usage error.
    /// Removing the last held binding of a pressed button synthesizes a
    /// release; a name with no bindings left anywhere is dropped entirely.
    pub fn unbind_abstract_button(&mut self, name: &str, bindings: &[Binding]) -> Result<()> {
        for binding in bindings {
            let mut handled = false;
            for provider in &mut self.providers {
                if let Some(result) = provider.try_unbind(name, binding) {
                    result?;
                    handled = true;
                    break;
                }
            }
            if !handled {
                return Err(EngineError::InputBinding(format!(
                    "No provider accepts the binding {:?}",
                    binding
                )));
            }

            if self.is_abstract_button_down(name) && !self.any_provider_down(name) {
                self.abstract_buttons.insert(name.to_string(), false);
                self.flush_pending_motion();
                self.events.push(GameEvent::AbstractButtonReleased {
                    name: name.to_string(),
                });
                if self.repeat.current.as_deref() == Some(name) {
                    self.repeat = RepeatState::default();
                }
            }
            if !self
                .providers
                .iter()
                .any(|provider| provider.has_bindings_for(name))
            {
                self.abstract_buttons.remove(name);
            }
        }
        Ok(())
    }

    /// Advances auto-repeat for the most recently activated abstract button.
    ///
    /// While the button stays held past the initial delay, typed events are
    /// synthesized at the configured interval, independent of raw key-repeat.
    pub fn tick(&mut self, delta: f32) {
        let Some(name) = self.repeat.current.clone() else {
            return;
        };
        if !self.is_abstract_button_down(&name) {
            self.repeat = RepeatState::default();
            return;
        }

        self.repeat.held_for += delta;
        if !self.repeat.repeating {
            if self.repeat.held_for < self.config.repeat_initial_delay {
                return;
            }
            self.repeat.repeating = true;
            self.repeat.held_for -= self.config.repeat_initial_delay;
            self.flush_pending_motion();
            self.events
                .push(GameEvent::AbstractButtonTyped { name: name.clone() });
        }
        while self.repeat.held_for >= self.config.repeat_interval {
            self.repeat.held_for -= self.config.repeat_interval;
            self.flush_pending_motion();
            self.events
                .push(GameEvent::AbstractButtonTyped { name: name.clone() });
        }
    }

    /// Atomically drains the queue, flushing any pending coalesced motion
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.flush_pending_motion();
        std::mem::take(&mut self.events)
    }

    /// Enqueues a discrete event and runs it through the provider pipeline
    fn push_event(&mut self, event: GameEvent) {
        self.flush_pending_motion();

        let mut edges: Vec<(String, ButtonEdge)> = Vec::new();
        for provider in &self.providers {
            edges.extend(provider.transform_event(&event));
        }
        self.events.push(event);

        for (name, edge) in edges {
            match edge {
                ButtonEdge::Pressed => self.press_abstract_button(&name),
                ButtonEdge::Released => self.release_abstract_button(&name),
            }
        }
    }

    /// Flips an abstract button down if it was up; emits exactly one press
    fn press_abstract_button(&mut self, name: &str) {
        if self.is_abstract_button_down(name) {
            return;
        }
        self.abstract_buttons.insert(name.to_string(), true);
        self.flush_pending_motion();
        self.events.push(GameEvent::AbstractButtonPressed {
            name: name.to_string(),
        });
        self.repeat = RepeatState {
            current: Some(name.to_string()),
            held_for: 0.0,
            repeating: false,
        };
    }

    /// Flips an abstract button up once no provider reports it held
    fn release_abstract_button(&mut self, name: &str) {
        if !self.is_abstract_button_down(name) || self.any_provider_down(name) {
            return;
        }
        self.abstract_buttons.insert(name.to_string(), false);
        self.flush_pending_motion();
        self.events.push(GameEvent::AbstractButtonReleased {
            name: name.to_string(),
        });
        if self.repeat.current.as_deref() == Some(name) {
            self.repeat = RepeatState::default();
        }
    }

    fn any_provider_down(&self, name: &str) -> bool {
        self.providers
            .iter()
            .any(|provider| provider.is_abstract_button_down(name, &self.devices))
    }

    fn flush_pending_motion(&mut self) {
        self.flush_pending_mouse_move();
        self.flush_pending_wheel();
    }

    fn flush_pending_mouse_move(&mut self) {
        if let Some(pending) = self.pending_mouse_move.take() {
            self.events.push(GameEvent::MouseMoved {
                movement_x: pending.movement_x,
                movement_y: pending.movement_y,
                page_x: pending.page_x,
                page_y: pending.page_y,
            });
        }
    }

    fn flush_pending_wheel(&mut self) {
        if let Some(pending) = self.pending_wheel.take() {
            self.events.push(GameEvent::MouseWheel {
                delta: pending.delta,
                page_x: pending.page_x,
                page_y: pending.page_y,
            });
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
